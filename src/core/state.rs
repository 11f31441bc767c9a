//! The game snapshot.
//!
//! ## GameState
//!
//! The single root value describing a session: board catalog, event
//! deck and discard, the active seat, the turn phase, the jackpot, the
//! narrative log, and every player's state.
//!
//! Exactly one snapshot is authoritative at a time. Every engine
//! operation consumes a snapshot by reference and returns a fresh one;
//! `im` collections keep those whole-snapshot copies O(1) with
//! structural sharing.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::boards::{BoardDefinition, BoardId, BoardSpace, SpaceId};
use crate::cards::CardDefinition;

use super::config::GameConfig;
use super::player::{PlayerId, PlayerState};

/// The turn phase. Gates which operations are legal; an operation
/// invoked in any other phase returns its input unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Start of a turn, before routing.
    PreMove,
    /// In hell: resolve an escape attempt instead of rolling.
    HellEscape,
    /// Waiting for the die.
    Roll,
    /// Die recorded, movement pending.
    Move,
    /// Landed, space effect pending.
    Resolve,
    /// Landed on GO: choose payout or wager.
    GoLotto,
    /// Wager placed: waiting for the lotto die.
    GoLottoRoll,
    /// Turn cleanup and hand-off.
    AfterEffects,
    /// Terminal. No operation mutates the state again.
    GameOver,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::PreMove => "pre-move",
            TurnPhase::HellEscape => "hell-escape",
            TurnPhase::Roll => "roll",
            TurnPhase::Move => "move",
            TurnPhase::Resolve => "resolve",
            TurnPhase::GoLotto => "go-lotto",
            TurnPhase::GoLottoRoll => "go-lotto-roll",
            TurnPhase::AfterEffects => "after-effects",
            TurnPhase::GameOver => "game-over",
        };
        write!(f, "{}", name)
    }
}

/// Where the lotto sub-flow stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LottoStatus {
    /// Payout-or-wager choice pending.
    Choose,
    /// Face called, lotto die pending.
    AwaitingRoll,
}

/// The GO-lotto sub-state, present only mid-flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoLottoState {
    /// Current step of the sub-flow.
    pub status: LottoStatus,
    /// The face the player wagered on (1-6).
    pub called_face: Option<u8>,
}

impl GoLottoState {
    /// Fresh lotto at the choice step.
    #[must_use]
    pub const fn choose() -> Self {
        Self {
            status: LottoStatus::Choose,
            called_face: None,
        }
    }

    /// Lotto with a face called, awaiting the die.
    #[must_use]
    pub const fn awaiting(face: u8) -> Self {
        Self {
            status: LottoStatus::AwaitingRoll,
            called_face: Some(face),
        }
    }
}

/// How a session was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Everyone else died.
    LastRat,
    /// Reached the indulgence goal.
    Indulgences,
    /// Reached the wealth goal.
    Wealth,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WinReason::LastRat => "last-rat",
            WinReason::Indulgences => "indulgences",
            WinReason::Wealth => "wealth",
        };
        write!(f, "{}", name)
    }
}

/// The winner and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    /// Winning seat.
    pub winner: PlayerId,
    /// Which win condition fired.
    pub reason: WinReason,
}

/// Whether the session is live. Once `Over`, permanently so.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Play continues.
    Active,
    /// Terminal. `None` only in the degenerate no-survivors case.
    Over(Option<WinRecord>),
}

impl GameStatus {
    /// Is the session finished?
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// The complete session snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session tunables.
    pub config: GameConfig,

    /// Static board catalog, fixed at session start.
    pub boards: Vector<BoardDefinition>,

    /// Event deck, drawn from the front. Shrinks monotonically.
    pub deck: Vector<CardDefinition>,

    /// Drawn cards, in draw order. Never reshuffled into the deck.
    pub discard: Vector<CardDefinition>,

    /// Seat index of the active player. Always a living player.
    pub current_player: usize,

    /// Current turn phase.
    pub phase: TurnPhase,

    /// The die recorded in the roll phase, if any.
    pub last_roll: Option<u8>,

    /// Accumulated pool of penalties and forfeitures.
    pub jackpot: i64,

    /// Present while a GO-lotto sub-flow is open.
    pub go_lotto: Option<GoLottoState>,

    /// Narrative event log, oldest first.
    pub log: Vector<String>,

    /// Live or finished.
    pub status: GameStatus,

    /// The most recently drawn card, for presentation. Cleared during
    /// after-effects.
    pub pending_card: Option<CardDefinition>,

    /// Player states, in seat order.
    pub players: Vector<PlayerState>,
}

impl GameState {
    /// Assemble a snapshot from its parts. Use `SessionBuilder` to
    /// create a fully initialized session.
    #[must_use]
    pub fn new(
        config: GameConfig,
        boards: Vec<BoardDefinition>,
        deck: Vec<CardDefinition>,
        players: Vec<PlayerState>,
    ) -> Self {
        assert!(players.len() >= 2, "A session needs at least 2 players");
        assert!(
            players.len() <= config.max_players,
            "A session supports at most {} players",
            config.max_players
        );

        Self {
            config,
            boards: boards.into(),
            deck: deck.into(),
            discard: Vector::new(),
            current_player: 0,
            phase: TurnPhase::PreMove,
            last_roll: None,
            jackpot: 0,
            go_lotto: None,
            log: Vector::new(),
            status: GameStatus::Active,
            pending_card: None,
            players: players.into(),
        }
    }

    // === Catalog lookups ===

    /// Look up a board by ID.
    ///
    /// The catalog is fixed at session start, so a missing board is a
    /// data-integrity bug; this panics rather than limping on.
    #[must_use]
    pub fn board(&self, id: BoardId) -> &BoardDefinition {
        self.boards
            .iter()
            .find(|b| b.id == id)
            .unwrap_or_else(|| panic!("{} is not in the board catalog", id))
    }

    /// Find a space anywhere in the catalog.
    #[must_use]
    pub fn find_space(&self, id: SpaceId) -> Option<&BoardSpace> {
        self.boards
            .iter()
            .flat_map(|b| b.spaces.iter())
            .find(|s| s.id == id)
    }

    // === Player projections ===

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The active player.
    #[must_use]
    pub fn active_player(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// A player by seat, if the seat exists.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.get(id.index())
    }

    /// Living players, in seat order.
    pub fn living_players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().filter(|p| p.alive)
    }

    /// The space the active player stands on.
    #[must_use]
    pub fn active_space(&self) -> &BoardSpace {
        let location = self.active_player().location;
        self.board(location.board).space(location.index)
    }

    /// Who owns a property space, if anyone.
    #[must_use]
    pub fn property_owner(&self, space: SpaceId) -> Option<PlayerId> {
        self.players.iter().find(|p| p.owns(space)).map(|p| p.id)
    }

    /// Players currently standing on a board, in seat order.
    #[must_use]
    pub fn players_on(&self, board: BoardId) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.alive && p.location.board == board)
            .map(|p| p.id)
            .collect()
    }

    // === Status projections ===

    /// Is the session finished?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Remaining deck size.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    // === Mutation helpers (engine-internal) ===

    /// Append a narrative log entry.
    pub(crate) fn push_log(&mut self, entry: impl Into<String>) {
        self.log.push_back(entry.into());
    }

    /// Mutable access to the active player.
    pub(crate) fn active_player_mut(&mut self) -> &mut PlayerState {
        let seat = self.current_player;
        self.players
            .get_mut(seat)
            .expect("active seat out of range")
    }

    /// Mutable access to a player by seat.
    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        self.players
            .get_mut(id.index())
            .expect("player seat out of range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{catalog, Location};
    use crate::cards::default_deck;

    fn sample_state() -> GameState {
        let start = catalog::SURFACE_START;
        GameState::new(
            GameConfig::default(),
            catalog::default_boards(),
            default_deck(),
            vec![
                PlayerState::new(PlayerId::new(0), "Whiskers", start, 300),
                PlayerState::new(PlayerId::new(1), "Scabbers", start, 300),
            ],
        )
    }

    #[test]
    fn test_new_state_defaults() {
        let state = sample_state();

        assert_eq!(state.phase, TurnPhase::PreMove);
        assert_eq!(state.current_player, 0);
        assert_eq!(state.jackpot, 0);
        assert_eq!(state.deck_size(), 5);
        assert!(state.discard.is_empty());
        assert!(!state.is_over());
    }

    #[test]
    fn test_board_lookup() {
        let state = sample_state();
        assert_eq!(state.board(catalog::HELL).name, "Hell Pit");
    }

    #[test]
    #[should_panic(expected = "not in the board catalog")]
    fn test_missing_board_panics() {
        let state = sample_state();
        let _ = state.board(BoardId::new(99));
    }

    #[test]
    fn test_active_space() {
        let state = sample_state();
        assert_eq!(state.active_space().name, "GO / Lotto");
    }

    #[test]
    fn test_property_owner() {
        let mut state = sample_state();
        let space = SpaceId::new(3);

        assert_eq!(state.property_owner(space), None);

        state.player_mut(PlayerId::new(1)).record_purchase(space, 220);
        assert_eq!(state.property_owner(space), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_players_on_board() {
        let mut state = sample_state();
        state.player_mut(PlayerId::new(1)).location = Location::new(catalog::SUBSURFACE, 2);

        assert_eq!(state.players_on(catalog::SURFACE), vec![PlayerId::new(0)]);
        assert_eq!(state.players_on(catalog::SUBSURFACE), vec![PlayerId::new(1)]);
        assert!(state.players_on(catalog::HELL).is_empty());
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut state = sample_state();
        let snapshot = state.clone();

        state.push_log("mutated original");
        state.active_player_mut().rubbies = 0;

        assert!(snapshot.log.is_empty());
        assert_eq!(snapshot.active_player().rubbies, 300);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(TurnPhase::GoLottoRoll.to_string(), "go-lotto-roll");
        assert_eq!(TurnPhase::PreMove.to_string(), "pre-move");
    }

    #[test]
    fn test_state_serialization() {
        let state = sample_state();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    #[should_panic(expected = "at least 2 players")]
    fn test_single_player_rejected() {
        let _ = GameState::new(
            GameConfig::default(),
            catalog::default_boards(),
            default_deck(),
            vec![PlayerState::new(
                PlayerId::new(0),
                "Loner",
                catalog::SURFACE_START,
                300,
            )],
        );
    }
}
