//! The default board catalog.
//!
//! Three boards: the surface ring with the GO space, the subsurface
//! sewer reached by teleport, and the hell pit where normal movement is
//! suspended. Spaces are numbered catalog-wide so a `SpaceId` alone
//! identifies a property.

use super::definition::{BoardDefinition, BoardId, BoardKind};
use super::space::{BoardSpace, Location, PropertyDetails, SpaceId, SpaceKind};

/// The surface board.
pub const SURFACE: BoardId = BoardId::new(0);
/// The subsurface sewer board.
pub const SUBSURFACE: BoardId = BoardId::new(1);
/// The hell board.
pub const HELL: BoardId = BoardId::new(2);

/// Where players start, and where job protection expires.
pub const SURFACE_START: Location = Location::new(SURFACE, 0);
/// Where players sent to hell land.
pub const HELL_START: Location = Location::new(HELL, 0);

fn surface_board() -> BoardDefinition {
    BoardDefinition::new(
        SURFACE,
        "Surface Streets",
        BoardKind::Surface,
        vec![
            BoardSpace::new(SpaceId::new(0), "GO / Lotto", SpaceKind::Go).with_delta(200),
            BoardSpace::new(SpaceId::new(1), "Church", SpaceKind::Church)
                .with_indulgence_cost(300),
            BoardSpace::new(SpaceId::new(2), "Tax Office", SpaceKind::Tax).with_delta(-150),
            BoardSpace::new(SpaceId::new(3), "Trash Palace", SpaceKind::Property)
                .with_property(PropertyDetails::new(220, 150)),
            BoardSpace::new(SpaceId::new(4), "Sniff a Card", SpaceKind::Draw).with_card_draw(),
            BoardSpace::new(SpaceId::new(5), "Job Board", SpaceKind::Job).with_delta(100),
            BoardSpace::new(SpaceId::new(6), "Hell Gate", SpaceKind::HellGate)
                .with_send_to(HELL_START),
            BoardSpace::new(SpaceId::new(7), "Roach District", SpaceKind::Property)
                .with_property(PropertyDetails::new(180, 60).with_multiplier(2)),
            BoardSpace::new(SpaceId::new(8), "Rat Lotto", SpaceKind::Draw).with_card_draw(),
            BoardSpace::new(SpaceId::new(9), "Subsewer Exit", SpaceKind::Teleport)
                .with_send_to(Location::new(SUBSURFACE, 0)),
        ],
    )
}

fn subsewer_board() -> BoardDefinition {
    BoardDefinition::new(
        SUBSURFACE,
        "Subsurface Sewer",
        BoardKind::Subsurface,
        vec![
            BoardSpace::new(SpaceId::new(10), "Subsewer Gate", SpaceKind::Blank),
            BoardSpace::new(SpaceId::new(11), "Pipe Palace", SpaceKind::Property)
                .with_property(PropertyDetails::new(120, 80)),
            BoardSpace::new(SpaceId::new(12), "Flooded Toll", SpaceKind::Tax).with_delta(-100),
            BoardSpace::new(SpaceId::new(13), "Scrap Stash", SpaceKind::Draw).with_card_draw(),
            BoardSpace::new(SpaceId::new(14), "Exit to GO", SpaceKind::Teleport)
                .with_send_to(SURFACE_START),
        ],
    )
}

fn hell_board() -> BoardDefinition {
    BoardDefinition::new(
        HELL,
        "Hell Pit",
        BoardKind::Hell,
        vec![
            BoardSpace::new(SpaceId::new(15), "Cell Block", SpaceKind::Blank),
            BoardSpace::new(SpaceId::new(16), "Firing Squad", SpaceKind::Blank),
        ],
    )
}

/// Build the default three-board catalog.
#[must_use]
pub fn default_boards() -> Vec<BoardDefinition> {
    vec![surface_board(), subsewer_board(), hell_board()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let boards = default_boards();

        assert_eq!(boards.len(), 3);
        assert_eq!(boards[0].id, SURFACE);
        assert_eq!(boards[0].len(), 10);
        assert_eq!(boards[1].id, SUBSURFACE);
        assert_eq!(boards[1].len(), 5);
        assert_eq!(boards[2].id, HELL);
        assert_eq!(boards[2].len(), 2);
    }

    #[test]
    fn test_space_ids_unique() {
        let boards = default_boards();
        let mut seen = std::collections::HashSet::new();

        for board in &boards {
            for space in &board.spaces {
                assert!(seen.insert(space.id), "duplicate space id {}", space.id);
            }
        }
    }

    #[test]
    fn test_go_space_is_first_on_surface() {
        let boards = default_boards();
        assert_eq!(boards[0].space(0).kind, SpaceKind::Go);
        assert_eq!(boards[0].space(0).rubby_delta, Some(200));
    }

    #[test]
    fn test_teleports_link_the_rings() {
        let boards = default_boards();

        let exit = boards[0].space(9);
        assert_eq!(exit.send_to, Some(Location::new(SUBSURFACE, 0)));

        let back = boards[1].space(4);
        assert_eq!(back.send_to, Some(SURFACE_START));
    }

    #[test]
    fn test_hell_gate_targets_hell_start() {
        let boards = default_boards();
        assert_eq!(boards[0].space(6).send_to, Some(HELL_START));
    }
}
