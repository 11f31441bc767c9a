//! The default event deck and deck shuffling.
//!
//! The deck is drawn from the top (front) and never reshuffled during a
//! session; drawn cards accumulate in the discard pile. Shuffling only
//! happens at session setup, through the caller's `GameRng`.

use crate::boards::{catalog, Location};
use crate::core::GameRng;

use super::card::{CardDefinition, CardId, CardKind};

/// Build the default five-card event deck, in catalog order.
#[must_use]
pub fn default_deck() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            CardId::new(0),
            CardKind::Indulgence,
            "Receive an indulgence from the church.",
        ),
        CardDefinition::new(
            CardId::new(1),
            CardKind::Cash,
            "Found a ruby stash. Gain 200 rubbies.",
        )
        .with_delta(200),
        CardDefinition::new(
            CardId::new(2),
            CardKind::Penalty,
            "Rat mob shakedown. Pay 150 rubbies.",
        )
        .with_delta(-150),
        CardDefinition::new(
            CardId::new(3),
            CardKind::Move,
            "Shortcut to the sewer entrance.",
        )
        .with_move_to(Location::new(catalog::SURFACE, 6)),
        CardDefinition::new(
            CardId::new(4),
            CardKind::Hell,
            "Dragged to hell for your sins.",
        )
        .with_send_to_hell(),
    ]
}

/// Shuffle a deck in place with the supplied RNG.
pub fn shuffle_deck(deck: &mut [CardDefinition], rng: &mut GameRng) {
    rng.shuffle(deck);
}
