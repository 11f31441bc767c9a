//! Board spaces - the squares players land on.
//!
//! A `BoardSpace` is static catalog data: its kind decides which effect
//! the resolver runs on landing, and the optional fields carry the
//! numbers that effect needs (currency delta, indulgence cost, property
//! terms, teleport target).
//!
//! Instance-specific data (who owns a property, what they paid) lives on
//! `PlayerState`, not here.

use serde::{Deserialize, Serialize};

use super::definition::BoardId;

/// Unique identifier for a board space.
///
/// Space IDs are unique across the whole catalog, not per board, so a
/// single ID is enough to track property ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub u32);

impl SpaceId {
    /// Create a new space ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// A position on some board: board plus space index.
///
/// Used for player locations, teleport targets, and card relocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Which board.
    pub board: BoardId,
    /// Index into that board's space list.
    pub index: usize,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(board: BoardId, index: usize) -> Self {
        Self { board, index }
    }
}

/// What happens when a player lands on a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    /// The start space; landing opens the lotto choice.
    Go,
    /// Purchasable real estate that charges rent.
    Property,
    /// Fixed currency penalty routed into the jackpot.
    Tax,
    /// Buy an indulgence for the listed cost.
    Church,
    /// Draw the top card of the event deck.
    Draw,
    /// Grants job protection (and a stipend, if the space carries one).
    Job,
    /// Sends the player to hell unless an indulgence pre-empts it.
    HellGate,
    /// Relocates the player to `send_to`.
    Teleport,
    /// No effect.
    Blank,
}

/// Purchase and rent terms for a property space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    /// Purchase price, paid to the bank.
    pub price: i64,
    /// Base rent charged to visitors.
    pub rent: i64,
    /// Optional multiplier applied to the base rent.
    pub rent_multiplier: Option<i64>,
}

impl PropertyDetails {
    /// Create property terms with no rent multiplier.
    #[must_use]
    pub const fn new(price: i64, rent: i64) -> Self {
        Self {
            price,
            rent,
            rent_multiplier: None,
        }
    }

    /// Set a rent multiplier (builder pattern).
    #[must_use]
    pub const fn with_multiplier(mut self, multiplier: i64) -> Self {
        self.rent_multiplier = Some(multiplier);
        self
    }

    /// Effective rent: base rent times the multiplier (default 1).
    #[must_use]
    pub fn effective_rent(&self) -> i64 {
        self.rent * self.rent_multiplier.unwrap_or(1)
    }
}

/// Static definition of a single board space.
///
/// ## Example
///
/// ```
/// use rat_race::boards::{BoardSpace, SpaceId, SpaceKind, PropertyDetails};
///
/// let palace = BoardSpace::new(SpaceId::new(3), "Trash Palace", SpaceKind::Property)
///     .with_property(PropertyDetails::new(220, 150));
///
/// assert_eq!(palace.property.unwrap().price, 220);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSpace {
    /// Catalog-wide unique identifier.
    pub id: SpaceId,

    /// Space name (for display and the narrative log).
    pub name: String,

    /// Which effect runs on landing.
    pub kind: SpaceKind,

    /// Fixed currency delta applied on landing (or, for the GO space,
    /// the lotto payout amount).
    pub rubby_delta: Option<i64>,

    /// Does landing here draw from the event deck?
    pub card_draw: bool,

    /// Teleport / hell-gate destination.
    pub send_to: Option<Location>,

    /// Cost of an indulgence bought here.
    pub indulgence_cost: Option<i64>,

    /// Purchase and rent terms, for property spaces.
    pub property: Option<PropertyDetails>,
}

impl BoardSpace {
    /// Create a new space with no optional payload.
    #[must_use]
    pub fn new(id: SpaceId, name: impl Into<String>, kind: SpaceKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            rubby_delta: None,
            card_draw: false,
            send_to: None,
            indulgence_cost: None,
            property: None,
        }
    }

    /// Set a fixed currency delta (builder pattern).
    #[must_use]
    pub fn with_delta(mut self, delta: i64) -> Self {
        self.rubby_delta = Some(delta);
        self
    }

    /// Mark this space as drawing a card on landing.
    #[must_use]
    pub fn with_card_draw(mut self) -> Self {
        self.card_draw = true;
        self
    }

    /// Set a teleport / hell destination.
    #[must_use]
    pub fn with_send_to(mut self, target: Location) -> Self {
        self.send_to = Some(target);
        self
    }

    /// Set an indulgence cost.
    #[must_use]
    pub fn with_indulgence_cost(mut self, cost: i64) -> Self {
        self.indulgence_cost = Some(cost);
        self
    }

    /// Set property terms.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDetails) -> Self {
        self.property = Some(property);
        self
    }
}
