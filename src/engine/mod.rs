//! The game engine: session setup, the turn state machine, and effect
//! resolution.
//!
//! Every operation here is a pure transition: snapshot in, snapshot
//! out. Randomness (dice, coin flips) always arrives as explicit
//! parameters, so a session replays exactly from a recorded input log.
//! Wrong-phase and post-game-over calls return the input unchanged.

pub mod effects;
pub mod session;
pub mod turn;

pub use session::{new_session, SessionBuilder};
pub use turn::{
    apply_after_effects, apply_movement, begin_pre_move, finish_pre_move, place_go_wager,
    record_roll, resolve_current_space, resolve_go_lotto_roll, resolve_hell_escape,
    take_go_payout,
};
