//! Event card definitions - static card data.
//!
//! A `CardDefinition` holds the immutable properties of one event card:
//! its kind, flavor text, and effect payload. The deck and discard pile
//! in `GameState` hold these definitions directly - there is no
//! per-instance card state in this game.

use serde::{Deserialize, Serialize};

use crate::boards::Location;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What an event card does when drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Grants one indulgence.
    Indulgence,
    /// Pays out currency.
    Cash,
    /// Charges currency.
    Penalty,
    /// Relocates the drawing player.
    Move,
    /// Sends the drawing player to hell (pre-emptible by an indulgence).
    Hell,
}

/// Static definition of one event card.
///
/// ## Example
///
/// ```
/// use rat_race::cards::{CardDefinition, CardId, CardKind};
///
/// let stash = CardDefinition::new(CardId::new(2), CardKind::Cash, "Found a ruby stash.")
///     .with_delta(200);
///
/// assert_eq!(stash.rubby_delta, Some(200));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Effect category.
    pub kind: CardKind,

    /// Narrative text, quoted in the game log when the card resolves.
    pub description: String,

    /// Currency delta applied to the drawing player.
    pub rubby_delta: Option<i64>,

    /// Forced relocation target.
    pub move_to: Option<Location>,

    /// Does this card send the drawing player to hell?
    pub send_to_hell: bool,
}

impl CardDefinition {
    /// Create a new card definition with no effect payload.
    #[must_use]
    pub fn new(id: CardId, kind: CardKind, description: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            description: description.into(),
            rubby_delta: None,
            move_to: None,
            send_to_hell: false,
        }
    }

    /// Set a currency delta (builder pattern).
    #[must_use]
    pub fn with_delta(mut self, delta: i64) -> Self {
        self.rubby_delta = Some(delta);
        self
    }

    /// Set a forced relocation target.
    #[must_use]
    pub fn with_move_to(mut self, target: Location) -> Self {
        self.move_to = Some(target);
        self
    }

    /// Mark this card as sending the player to hell.
    #[must_use]
    pub fn with_send_to_hell(mut self) -> Self {
        self.send_to_hell = true;
        self
    }
}
