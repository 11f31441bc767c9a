//! Board system: static topologies, spaces, and the default catalog.
//!
//! ## Key Types
//!
//! - `BoardId`: Identifier for boards in the catalog
//! - `BoardDefinition`: One board's ordered ring of spaces
//! - `BoardSpace`: A single space with its landing effect payload
//! - `Location`: Board + index, used for positions and teleport targets
//!
//! The catalog is fixed at session start; boards never change mid-game.

pub mod catalog;
pub mod definition;
pub mod space;

pub use definition::{BoardDefinition, BoardId, BoardKind};
pub use space::{BoardSpace, Location, PropertyDetails, SpaceId, SpaceKind};
