//! Session initialization.
//!
//! `SessionBuilder` assembles a fresh, valid snapshot from participant
//! names: default board catalog, default deck (optionally shuffled with
//! a seed), everyone at the surface start with the configured balance.

use crate::boards::catalog;
use crate::cards;
use crate::core::player::{PlayerId, PlayerState};
use crate::core::{GameConfig, GameRng, GameState};

/// Builder for a new game session.
///
/// ## Example
///
/// ```
/// use rat_race::engine::SessionBuilder;
///
/// let state = SessionBuilder::new()
///     .participant("Whiskers")
///     .participant("Scabbers")
///     .shuffle_seed(42)
///     .build();
///
/// assert_eq!(state.player_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    names: Vec<String>,
    config: GameConfig,
    shuffle_seed: Option<u64>,
}

impl SessionBuilder {
    /// Start an empty builder with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one participant.
    #[must_use]
    pub fn participant(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add several participants at once.
    #[must_use]
    pub fn participants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Override the session config.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle the event deck with this seed. Without it the deck stays
    /// in catalog order (handy for tests).
    #[must_use]
    pub fn shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Build the initial snapshot.
    ///
    /// Panics unless 2 to `config.max_players` participants were added.
    #[must_use]
    pub fn build(self) -> GameState {
        assert!(
            self.names.len() >= 2,
            "A session needs at least 2 participants"
        );

        let start = catalog::SURFACE_START;
        let players = self
            .names
            .iter()
            .enumerate()
            .map(|(seat, name)| {
                PlayerState::new(
                    PlayerId::new(seat as u8),
                    name.clone(),
                    start,
                    self.config.starting_rubbies,
                )
            })
            .collect();

        let mut deck = cards::default_deck();
        if let Some(seed) = self.shuffle_seed {
            cards::shuffle_deck(&mut deck, &mut GameRng::new(seed));
        }

        let mut state = GameState::new(self.config, catalog::default_boards(), deck, players);
        state.push_log("Game session created.".to_string());
        state
    }
}

/// Create a standard session from a list of names.
#[must_use]
pub fn new_session<S: Into<String> + Clone>(names: &[S]) -> GameState {
    SessionBuilder::new().participants(names.to_vec()).build()
}
