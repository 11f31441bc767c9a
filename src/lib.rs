//! # rat-race
//!
//! A deterministic engine for a turn-based, multi-board
//! chance-and-property game: rats race around three linked boards,
//! buying squalid real estate, dodging hell, and gambling the jackpot
//! at GO.
//!
//! ## Design Principles
//!
//! 1. **Snapshot in, snapshot out**: every operation consumes a
//!    `GameState` by reference and returns a fresh one. `im` persistent
//!    collections make the copies O(1) with structural sharing; the
//!    prior snapshot is never aliased or mutated.
//!
//! 2. **No internal randomness**: dice and coin flips enter as explicit
//!    parameters. A session replays exactly from a recorded input log;
//!    `GameRng` is the seeded supply drivers draw those inputs from.
//!
//! 3. **Phase-gated, no-op-on-misuse**: each operation is legal in
//!    exactly one phase. Wrong-phase and post-game-over calls return
//!    the input unchanged, so callers poll without error handling.
//!
//! ## Modules
//!
//! - `core`: players, the `GameState` snapshot, config, the dice supply
//! - `boards`: static board topologies and the default catalog
//! - `cards`: event card definitions and the default deck
//! - `engine`: session setup, the turn state machine, effect resolution
//! - `policy`: the automated player (decide / apply)

pub mod boards;
pub mod cards;
pub mod core;
pub mod engine;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, GameState, GameStatus, GoLottoState, LottoStatus,
    PlayerId, PlayerState, PurchaseRecord, TurnPhase, WinReason, WinRecord,
};

pub use crate::boards::{
    BoardDefinition, BoardId, BoardKind, BoardSpace, Location, PropertyDetails, SpaceId,
    SpaceKind,
};

pub use crate::cards::{CardDefinition, CardId, CardKind};

pub use crate::engine::{
    apply_after_effects, apply_movement, begin_pre_move, finish_pre_move, new_session,
    place_go_wager, record_roll, resolve_current_space, resolve_go_lotto_roll,
    resolve_hell_escape, take_go_payout, SessionBuilder,
};

pub use crate::policy::{apply_decision, decide, describe_role, Decision, DecisionKind, LottoCall};
