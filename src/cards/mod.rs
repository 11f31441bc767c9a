//! Event card system: definitions and the default deck.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardKind`: The five effect categories
//! - `CardDefinition`: Static card data (flavor text + effect payload)
//!
//! Cards have no per-instance state; the deck and discard pile in
//! `GameState` hold definitions directly.

pub mod card;
pub mod deck;

pub use card::{CardDefinition, CardId, CardKind};
pub use deck::{default_deck, shuffle_deck};
