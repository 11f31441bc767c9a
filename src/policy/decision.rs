//! Decision records produced by the CPU policy.
//!
//! A `Decision` is what the policy hands back for the current phase:
//! which operation to invoke, the parameters to feed it, and
//! human-readable rationale notes that `apply_decision` appends to the
//! narrative log before acting.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which engine operation the decision maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Fallback: reset to the top of the turn.
    Begin,
    /// Route out of pre-move.
    FinishPreMove,
    /// Resolve a hell-escape attempt.
    HellEscape,
    /// Record the movement die.
    Roll,
    /// Apply movement.
    Move,
    /// Resolve the landed space.
    Resolve,
    /// Take the safe GO payout.
    GoPayout,
    /// Wager the GO payout on a called face.
    GoWager,
    /// Resolve the lotto roll.
    GoRoll,
    /// Run end-of-turn cleanup.
    AfterEffects,
}

/// How boldly to play the GO lotto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LottoCall {
    /// Wager the payout on a face.
    Aggressive,
    /// Take the fixed payout.
    Conservative,
}

/// One phase's worth of CPU intent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// The operation to invoke.
    pub kind: DecisionKind,

    /// Die to feed the operation (hell escape, roll, lotto roll).
    pub die: Option<u8>,

    /// The face the roll heuristic would pick if it could choose its
    /// own dice. Advisory: `die` is what actually gets fed in.
    pub preferred_die: Option<u8>,

    /// Elected firing-squad coin-flip outcome.
    pub survive_firing_squad: Option<bool>,

    /// Lotto risk appetite, recorded during the roll phase.
    pub lotto_call: Option<LottoCall>,

    /// Face called on a lotto wager.
    pub called_face: Option<u8>,

    /// Willing to pay an indulgence premium on this space.
    pub buy_indulgence: bool,

    /// Advisory debt-repayment figure. Log-only: no core debt mechanic.
    pub debt_repayment: i64,

    /// Advisory auction-bid figure. Log-only: no core auction mechanic.
    pub auction_bid: i64,

    /// Human-readable rationale, appended to the narrative log.
    pub notes: SmallVec<[String; 2]>,
}

impl Decision {
    /// A bare decision with no parameters or notes.
    #[must_use]
    pub fn new(kind: DecisionKind) -> Self {
        Self {
            kind,
            die: None,
            preferred_die: None,
            survive_firing_squad: None,
            lotto_call: None,
            called_face: None,
            buy_indulgence: false,
            debt_repayment: 0,
            auction_bid: 0,
            notes: SmallVec::new(),
        }
    }

    /// Append a rationale note (builder pattern).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}
