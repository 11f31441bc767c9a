//! Board definitions - static board topologies.
//!
//! A `BoardDefinition` is the ordered ring of spaces a player walks
//! around. Boards are fixed for the lifetime of a session; referencing a
//! board ID that is not in the catalog is a data-integrity bug, not a
//! recoverable condition.

use serde::{Deserialize, Serialize};

use super::space::BoardSpace;

/// Unique identifier for a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(pub u16);

impl BoardId {
    /// Create a new board ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.0)
    }
}

/// Which layer of the world a board belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardKind {
    /// The main street-level ring with the GO space.
    Surface,
    /// The sewer ring reached by teleport.
    Subsurface,
    /// The penalty board; entry suspends normal movement.
    Hell,
}

/// Static definition of one board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardDefinition {
    /// Unique identifier for this board.
    pub id: BoardId,

    /// Board name (for display and the narrative log).
    pub name: String,

    /// World layer.
    pub kind: BoardKind,

    /// Ordered ring of spaces. Movement wraps modulo this length.
    pub spaces: Vec<BoardSpace>,
}

impl BoardDefinition {
    /// Create a new board definition.
    ///
    /// Panics if `spaces` is empty - a board with no spaces cannot host
    /// a player.
    #[must_use]
    pub fn new(
        id: BoardId,
        name: impl Into<String>,
        kind: BoardKind,
        spaces: Vec<BoardSpace>,
    ) -> Self {
        assert!(!spaces.is_empty(), "Board must have at least one space");
        Self {
            id,
            name: name.into(),
            kind,
            spaces,
        }
    }

    /// Number of spaces on the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// A board always has spaces; kept for iterator-adapter symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Get a space by index.
    ///
    /// Panics on an out-of-range index: player positions are always
    /// produced modulo the board length, so this indicates a bug.
    #[must_use]
    pub fn space(&self, index: usize) -> &BoardSpace {
        &self.spaces[index]
    }
}
