//! The turn state machine.
//!
//! One operation per phase transition. Every operation takes the
//! current snapshot plus any externally supplied randomness (a die
//! value 1-6, a coin flip) and returns a new snapshot - the engine
//! never rolls its own dice, so a recorded input log replays exactly.
//!
//! Calling an operation while the game is over, or while the state is
//! in the wrong phase, returns the input snapshot unchanged. Callers
//! (human-driven or the CPU policy) can therefore poll safely without
//! error handling.

use crate::core::state::{GoLottoState, LottoStatus, TurnPhase};
use crate::core::GameState;

use super::effects::{
    check_win_conditions, collect_jackpot, resolve_active_space, surface_start,
};

/// Clone the snapshot if the operation is legal right now.
fn guarded(state: &GameState, phase: TurnPhase) -> Option<GameState> {
    if state.is_over() || state.phase != phase {
        return None;
    }
    Some(state.clone())
}

/// Set the phase, with a trace of the transition.
fn set_phase(state: &mut GameState, phase: TurnPhase) {
    log::debug!("phase {} -> {}", state.phase, phase);
    state.phase = phase;
}

/// Reset to the top of the active player's turn.
#[must_use]
pub fn begin_pre_move(state: &GameState) -> GameState {
    let Some(mut next) = guarded(state, TurnPhase::PreMove) else {
        return state.clone();
    };
    next.last_roll = None;
    next
}

/// Route the turn: hell dwellers escape first, everyone else rolls.
#[must_use]
pub fn finish_pre_move(state: &GameState) -> GameState {
    let Some(mut next) = guarded(state, TurnPhase::PreMove) else {
        return state.clone();
    };

    let phase = if next.active_player().in_hell {
        TurnPhase::HellEscape
    } else {
        TurnPhase::Roll
    };
    set_phase(&mut next, phase);
    next
}

/// Resolve one hell-escape attempt.
///
/// A held indulgence is auto-consumed to end the stay immediately; the
/// supplied die is not used in that case. Otherwise the attempt must
/// reach the threshold for its number: 6, then 5, then 4 from the third
/// attempt on. A failure on the fourth or later attempt goes to the
/// firing squad, decided by the supplied coin flip.
#[must_use]
pub fn resolve_hell_escape(state: &GameState, die: u8, firing_squad_heads: bool) -> GameState {
    debug_assert!((1..=6).contains(&die), "die must be 1-6");
    let Some(mut next) = guarded(state, TurnPhase::HellEscape) else {
        return state.clone();
    };

    let name = next.active_player().name.clone();

    if next.active_player().indulgences > 0 {
        let player = next.active_player_mut();
        player.indulgences -= 1;
        player.leave_hell();
        next.push_log(format!(
            "{} spent an indulgence and walked out of hell.",
            name
        ));
        set_phase(&mut next, TurnPhase::Roll);
        return next;
    }

    let attempt = next.active_player().hell_escapes + 1;
    next.active_player_mut().hell_escapes = attempt;

    let required = match attempt {
        1 => 6,
        2 => 5,
        _ => 4,
    };

    if die >= required {
        next.active_player_mut().leave_hell();
        next.push_log(format!(
            "{} escaped hell on attempt {} with a roll of {} (needed {}+).",
            name, attempt, die, required
        ));
        set_phase(&mut next, TurnPhase::Roll);
        return next;
    }

    if attempt >= 4 {
        next.push_log(format!(
            "{} failed a fourth hell escape (roll {}) and faces the firing squad.",
            name, die
        ));

        if firing_squad_heads {
            let start = surface_start(&next);
            let player = next.active_player_mut();
            player.location = start;
            player.leave_hell();
            next.push_log(format!(
                "{} survived the firing squad coin flip and returns to GO.",
                name
            ));
            set_phase(&mut next, TurnPhase::AfterEffects);
            return next;
        }

        let bounty = next.config.firing_squad_bounty;
        let forfeited = {
            let player = next.active_player_mut();
            let forfeited = player.rubbies;
            player.rubbies = 0;
            player.indulgences = 0;
            player.alive = false;
            player.release_properties();
            forfeited
        };
        collect_jackpot(&mut next, forfeited + bounty);
        next.push_log(format!("{} was executed in hell.", name));
        check_win_conditions(&mut next);
        if !next.is_over() {
            set_phase(&mut next, TurnPhase::AfterEffects);
        }
        return next;
    }

    next.push_log(format!(
        "{} failed hell escape attempt {} with a roll of {} (needed {}+).",
        name, attempt, die, required
    ));
    set_phase(&mut next, TurnPhase::AfterEffects);
    next
}

/// Record the supplied die for this turn's movement.
#[must_use]
pub fn record_roll(state: &GameState, die: u8) -> GameState {
    debug_assert!((1..=6).contains(&die), "die must be 1-6");
    let Some(mut next) = guarded(state, TurnPhase::Roll) else {
        return state.clone();
    };

    next.last_roll = Some(die);
    let name = next.active_player().name.clone();
    next.push_log(format!("{} rolled a {}.", name, die));
    set_phase(&mut next, TurnPhase::Move);
    next
}

/// Advance the active player by the recorded roll, wrapping around the
/// current board.
#[must_use]
pub fn apply_movement(state: &GameState) -> GameState {
    let Some(mut next) = guarded(state, TurnPhase::Move) else {
        return state.clone();
    };

    let roll = next
        .last_roll
        .expect("move phase is unreachable without a recorded roll");

    let location = next.active_player().location;
    let board_len = next.board(location.board).len();
    let new_index = (location.index + roll as usize) % board_len;

    next.active_player_mut().location.index = new_index;

    let name = next.active_player().name.clone();
    let space_name = next.active_space().name.clone();
    next.push_log(format!("{} moved {} spaces to {}.", name, roll, space_name));
    set_phase(&mut next, TurnPhase::Resolve);
    next
}

/// Resolve the landed space's effect.
#[must_use]
pub fn resolve_current_space(state: &GameState) -> GameState {
    let Some(mut next) = guarded(state, TurnPhase::Resolve) else {
        return state.clone();
    };

    let name = next.active_player().name.clone();
    let space_name = next.active_space().name.clone();

    resolve_active_space(&mut next);
    next.push_log(format!("{} resolved {}.", name, space_name));
    check_win_conditions(&mut next);

    if next.is_over() {
        return next;
    }
    let phase = if next.go_lotto.is_some() {
        TurnPhase::GoLotto
    } else {
        TurnPhase::AfterEffects
    };
    set_phase(&mut next, phase);
    next
}

/// Is the lotto sub-flow at the given step?
fn lotto_at(state: &GameState, status: LottoStatus) -> bool {
    state
        .go_lotto
        .map(|lotto| lotto.status == status)
        .unwrap_or(false)
}

/// Take the safe fixed payout instead of wagering.
#[must_use]
pub fn take_go_payout(state: &GameState) -> GameState {
    let Some(mut next) = guarded(state, TurnPhase::GoLotto) else {
        return state.clone();
    };
    if !lotto_at(&next, LottoStatus::Choose) {
        return state.clone();
    }

    let payout = next.config.go_payout;
    next.active_player_mut().rubbies += payout;
    let name = next.active_player().name.clone();
    next.push_log(format!("{} took the safe {} rubbies from GO.", name, payout));

    next.go_lotto = None;
    check_win_conditions(&mut next);
    if !next.is_over() {
        set_phase(&mut next, TurnPhase::AfterEffects);
    }
    next
}

/// Wager the GO payout on a called die face. The wager moves into the
/// jackpot immediately; the lotto roll decides whether the whole pot
/// comes back.
#[must_use]
pub fn place_go_wager(state: &GameState, face: u8) -> GameState {
    debug_assert!((1..=6).contains(&face), "called face must be 1-6");
    let Some(mut next) = guarded(state, TurnPhase::GoLotto) else {
        return state.clone();
    };
    if !lotto_at(&next, LottoStatus::Choose) {
        return state.clone();
    }

    let payout = next.config.go_payout;
    let name = next.active_player().name.clone();
    next.push_log(format!(
        "{} wagers the {} rubby payout on a {}.",
        name, payout, face
    ));
    collect_jackpot(&mut next, payout);

    next.go_lotto = Some(GoLottoState::awaiting(face));
    set_phase(&mut next, TurnPhase::GoLottoRoll);
    next
}

/// Resolve the lotto roll against the called face.
#[must_use]
pub fn resolve_go_lotto_roll(state: &GameState, die: u8) -> GameState {
    debug_assert!((1..=6).contains(&die), "die must be 1-6");
    let Some(mut next) = guarded(state, TurnPhase::GoLottoRoll) else {
        return state.clone();
    };
    if !lotto_at(&next, LottoStatus::AwaitingRoll) {
        return state.clone();
    }

    let called = next
        .go_lotto
        .and_then(|lotto| lotto.called_face)
        .expect("awaiting-roll lotto without a called face");

    let name = next.active_player().name.clone();
    if die == called {
        let pot = next.jackpot;
        next.jackpot = 0;
        next.active_player_mut().rubbies += pot;
        next.push_log(format!(
            "{} called the {} and rolled it - the {} rubby jackpot pays out!",
            name, called, pot
        ));
    } else {
        next.push_log(format!(
            "{} called the {} but rolled a {}; the jackpot keeps the wager.",
            name, called, die
        ));
    }

    next.go_lotto = None;
    check_win_conditions(&mut next);
    if !next.is_over() {
        set_phase(&mut next, TurnPhase::AfterEffects);
    }
    next
}

/// End-of-turn cleanup: expire job protection at GO, re-check wins, and
/// hand the turn to the next living player.
#[must_use]
pub fn apply_after_effects(state: &GameState) -> GameState {
    let Some(mut next) = guarded(state, TurnPhase::AfterEffects) else {
        return state.clone();
    };

    let start = surface_start(&next);
    if next.active_player().job_protected && next.active_player().location == start {
        next.active_player_mut().job_protected = false;
        let name = next.active_player().name.clone();
        next.push_log(format!("{}'s job protection expired at GO.", name));
    }

    next.pending_card = None;
    check_win_conditions(&mut next);
    if next.is_over() {
        return next;
    }

    // At least two players live here, or the win check above would have
    // ended the session.
    let seats = next.player_count();
    let mut seat = next.current_player;
    for _ in 0..seats {
        seat = (seat + 1) % seats;
        if next.players[seat].alive {
            break;
        }
    }

    next.current_player = seat;
    next.last_roll = None;
    set_phase(&mut next, TurnPhase::PreMove);
    let name = next.active_player().name.clone();
    next.push_log(format!("Turn passes to {}.", name));
    next
}
