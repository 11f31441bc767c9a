//! Game configuration.
//!
//! Tunable constants for a session: starting balance, the GO payout,
//! win thresholds, and the firing-squad bounty. The config is embedded
//! in `GameState` so every snapshot is self-contained.

use serde::{Deserialize, Serialize};

/// Session tunables.
///
/// `GameConfig::default()` is the standard game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rubbies each player starts with.
    pub starting_rubbies: i64,

    /// Fixed payout offered on the GO space (also the wager amount).
    pub go_payout: i64,

    /// Indulgences needed to win outright.
    pub indulgence_goal: u32,

    /// Rubbies needed to win outright.
    pub wealth_goal: i64,

    /// Added to the jackpot on top of the forfeited balance when a
    /// player is executed in hell.
    pub firing_squad_bounty: i64,

    /// Maximum participants per session.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_rubbies: 300,
            go_payout: 200,
            indulgence_goal: 3,
            wealth_goal: 3000,
            firing_squad_bounty: 1000,
            max_players: 8,
        }
    }
}

impl GameConfig {
    /// Set the starting balance (builder pattern).
    #[must_use]
    pub fn with_starting_rubbies(mut self, rubbies: i64) -> Self {
        self.starting_rubbies = rubbies;
        self
    }

    /// Set the wealth win threshold.
    #[must_use]
    pub fn with_wealth_goal(mut self, goal: i64) -> Self {
        self.wealth_goal = goal;
        self
    }

    /// Set the indulgence win threshold.
    #[must_use]
    pub fn with_indulgence_goal(mut self, goal: u32) -> Self {
        self.indulgence_goal = goal;
        self
    }
}
