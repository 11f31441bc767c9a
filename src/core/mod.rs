//! Core types: players, the game snapshot, configuration, and the
//! deterministic dice supply.
//!
//! Everything the engine operates on lives here; the engine itself
//! (phase transitions, effect resolution) lives in `crate::engine`.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use player::{PlayerId, PlayerState, PurchaseRecord};
pub use rng::{GameRng, GameRngState};
pub use state::{
    GameState, GameStatus, GoLottoState, LottoStatus, TurnPhase, WinReason, WinRecord,
};
