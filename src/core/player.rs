//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 2-255 players.
//!
//! ## PlayerState
//!
//! Everything that belongs to one player: balance, indulgences,
//! position, hell bookkeeping, and owned properties. The owned-property
//! set uses `im::HashSet` so snapshot clones share structure.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::boards::{Location, SpaceId};

/// Player identifier. Player indices are 0-based seat numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Purchase metadata recorded when a property is bought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// What the owner paid at purchase time.
    pub price_paid: i64,
}

/// One player's complete state.
///
/// The balance is never negative: any transition that cannot collect in
/// full triggers bankruptcy before it returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Stable seat identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Currency balance, always >= 0.
    pub rubbies: i64,

    /// Held indulgences.
    pub indulgences: u32,

    /// False once executed in hell.
    pub alive: bool,

    /// Current board and space index.
    pub location: Location,

    /// Shielded from rent and barred from purchases until the next
    /// stop on the surface start space.
    pub job_protected: bool,

    /// Escape attempts made during the current hell stay.
    pub hell_escapes: u32,

    /// In hell: pre-move routes to the escape phase instead of rolling.
    pub in_hell: bool,

    /// Properties this player owns. Disjoint across players.
    pub owned_properties: ImHashSet<SpaceId>,

    /// Purchase metadata per owned property.
    pub purchases: FxHashMap<SpaceId, PurchaseRecord>,
}

impl PlayerState {
    /// Create a fresh player at the given start location.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, start: Location, rubbies: i64) -> Self {
        Self {
            id,
            name: name.into(),
            rubbies,
            indulgences: 0,
            alive: true,
            location: start,
            job_protected: false,
            hell_escapes: 0,
            in_hell: false,
            owned_properties: ImHashSet::new(),
            purchases: FxHashMap::default(),
        }
    }

    /// Does this player own the given property space?
    #[must_use]
    pub fn owns(&self, space: SpaceId) -> bool {
        self.owned_properties.contains(&space)
    }

    /// Record a purchase: ownership plus price metadata.
    pub fn record_purchase(&mut self, space: SpaceId, price: i64) {
        self.owned_properties.insert(space);
        self.purchases.insert(space, PurchaseRecord { price_paid: price });
    }

    /// Release every owned property (bankruptcy).
    pub fn release_properties(&mut self) {
        self.owned_properties = ImHashSet::new();
        self.purchases.clear();
    }

    /// Move to hell: position, flags, and escape counter reset.
    pub fn enter_hell(&mut self, hell_start: Location) {
        self.location = hell_start;
        self.in_hell = true;
        self.hell_escapes = 0;
        self.job_protected = false;
    }

    /// Clear hell status and the escape counter.
    pub fn leave_hell(&mut self) {
        self.in_hell = false;
        self.hell_escapes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::catalog;

    fn sample_player() -> PlayerState {
        PlayerState::new(PlayerId::new(0), "Whiskers", catalog::SURFACE_START, 300)
    }

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");

        let all: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(all, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_new_player_defaults() {
        let player = sample_player();

        assert_eq!(player.rubbies, 300);
        assert_eq!(player.indulgences, 0);
        assert!(player.alive);
        assert!(!player.in_hell);
        assert!(!player.job_protected);
        assert!(player.owned_properties.is_empty());
    }

    #[test]
    fn test_purchase_and_release() {
        let mut player = sample_player();
        let space = SpaceId::new(3);

        player.record_purchase(space, 220);
        assert!(player.owns(space));
        assert_eq!(player.purchases[&space].price_paid, 220);

        player.release_properties();
        assert!(!player.owns(space));
        assert!(player.purchases.is_empty());
    }

    #[test]
    fn test_hell_round_trip() {
        let mut player = sample_player();
        player.job_protected = true;
        player.hell_escapes = 2;

        player.enter_hell(catalog::HELL_START);
        assert!(player.in_hell);
        assert_eq!(player.hell_escapes, 0);
        assert!(!player.job_protected);
        assert_eq!(player.location, catalog::HELL_START);

        player.hell_escapes = 3;
        player.leave_hell();
        assert!(!player.in_hell);
        assert_eq!(player.hell_escapes, 0);
    }

    #[test]
    fn test_player_serialization() {
        let mut player = sample_player();
        player.record_purchase(SpaceId::new(7), 180);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: PlayerState = serde_json::from_str(&json).unwrap();

        assert_eq!(player, deserialized);
    }
}
