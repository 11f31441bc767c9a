//! The automated decision policy.
//!
//! ## Key Functions
//!
//! - `decide`: snapshot + RNG -> `Decision` (no state mutation)
//! - `apply_decision`: feeds a decision through the engine operations
//! - `describe_role`: one-line CPU persona for presentation
//!
//! The policy is a client of the engine, not part of it: it consumes
//! the same snapshot-in/snapshot-out operations a human-driven caller
//! would, and all of its randomness comes from the caller's `GameRng`.

pub mod cpu;
pub mod decision;

pub use cpu::{apply_decision, decide, describe_role};
pub use decision::{Decision, DecisionKind, LottoCall};
