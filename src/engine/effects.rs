//! Effect resolution: what landing on a space (or drawing a card) does.
//!
//! These helpers mutate a snapshot the turn operations have already
//! cloned; nothing here is visible to callers except through the new
//! snapshot those operations return.
//!
//! Money rules concentrated here:
//! - balances never go negative - a collection that cannot be met in
//!   full clamps to the balance and triggers bankruptcy in the same
//!   transition
//! - bankruptcy forfeits the remaining balance to the jackpot, zeroes
//!   indulgences, and releases every owned property
//! - win conditions are re-checked after every economic event

use crate::boards::{BoardKind, BoardSpace, Location, SpaceKind};
use crate::cards::CardDefinition;
use crate::core::state::{GameStatus, GoLottoState, TurnPhase, WinReason, WinRecord};
use crate::core::GameState;

/// Mark the session over and freeze the phase.
pub(crate) fn mark_game_over(state: &mut GameState, win: Option<WinRecord>) {
    state.phase = TurnPhase::GameOver;
    state.status = GameStatus::Over(win);
    match win {
        Some(record) => {
            let name = state
                .player(record.winner)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| record.winner.to_string());
            state.push_log(format!("Game over: {} wins by {}.", name, record.reason));
        }
        None => state.push_log("Game over: no rats left standing.".to_string()),
    }
    log::debug!("session finished: {:?}", state.status);
}

/// Evaluate the win conditions in fixed precedence order.
///
/// Each rule is checked across all players before the next rule is
/// considered, so a state satisfying both last-rat and wealth resolves
/// as last-rat.
pub(crate) fn check_win_conditions(state: &mut GameState) {
    if state.is_over() {
        return;
    }

    let living: Vec<_> = state.living_players().map(|p| p.id).collect();

    if living.is_empty() {
        mark_game_over(state, None);
        return;
    }

    if living.len() == 1 {
        mark_game_over(
            state,
            Some(WinRecord {
                winner: living[0],
                reason: WinReason::LastRat,
            }),
        );
        return;
    }

    let indulgence_goal = state.config.indulgence_goal;
    let indulgence_winner = state
        .living_players()
        .find(|p| p.indulgences >= indulgence_goal)
        .map(|p| p.id);
    if let Some(winner) = indulgence_winner {
        mark_game_over(
            state,
            Some(WinRecord {
                winner,
                reason: WinReason::Indulgences,
            }),
        );
        return;
    }

    let wealth_goal = state.config.wealth_goal;
    let wealth_winner = state
        .living_players()
        .find(|p| p.rubbies >= wealth_goal)
        .map(|p| p.id);
    if let Some(winner) = wealth_winner {
        mark_game_over(
            state,
            Some(WinRecord {
                winner,
                reason: WinReason::Wealth,
            }),
        );
    }
}

/// Feed the jackpot and log it.
pub(crate) fn collect_jackpot(state: &mut GameState, amount: i64) {
    state.jackpot = (state.jackpot + amount).max(0);
    state.push_log(format!("Jackpot changed by {}.", amount));
}

/// Bankrupt the active player: remaining balance to the jackpot,
/// indulgences zeroed, properties released.
pub(crate) fn bankrupt_active(state: &mut GameState, cause: &str) {
    let (name, forfeited) = {
        let player = state.active_player_mut();
        let forfeited = player.rubbies;
        player.rubbies = 0;
        player.indulgences = 0;
        player.release_properties();
        (player.name.clone(), forfeited)
    };

    if forfeited > 0 {
        collect_jackpot(state, forfeited);
    }
    state.push_log(format!("{} went bankrupt over {}.", name, cause));
    log::debug!("{} bankrupt, forfeited {}", name, forfeited);
}

/// Charge the active player. The payment clamps to the balance; a
/// shortfall bankrupts in the same transition. When `to_jackpot` is set
/// the full magnitude feeds the pot regardless of what was collected.
pub(crate) fn charge_active(state: &mut GameState, amount: i64, to_jackpot: bool, cause: &str) {
    debug_assert!(amount >= 0, "charges are non-negative");

    let shortfall = {
        let player = state.active_player_mut();
        let shortfall = amount > player.rubbies;
        player.rubbies = (player.rubbies - amount).max(0);
        shortfall
    };

    if to_jackpot {
        collect_jackpot(state, amount);
    }
    if shortfall {
        bankrupt_active(state, cause);
    }
}

/// Entrance of the hell board.
fn hell_entrance(state: &GameState) -> Location {
    state
        .boards
        .iter()
        .find(|b| b.kind == BoardKind::Hell)
        .map(|b| Location::new(b.id, 0))
        .expect("board catalog has no hell board")
}

/// Start space of the surface board.
pub(crate) fn surface_start(state: &GameState) -> Location {
    state
        .boards
        .iter()
        .find(|b| b.kind == BoardKind::Surface)
        .map(|b| Location::new(b.id, 0))
        .expect("board catalog has no surface board")
}

/// Send the active player to hell, unless a held indulgence pre-empts
/// the trip.
pub(crate) fn send_active_to_hell(state: &mut GameState) {
    let entrance = hell_entrance(state);
    let name = state.active_player().name.clone();

    if state.active_player().indulgences > 0 {
        state.active_player_mut().indulgences -= 1;
        state.push_log(format!("{} spent an indulgence to dodge hell.", name));
        return;
    }

    state.active_player_mut().enter_hell(entrance);
    state.push_log(format!("{} was dragged to hell.", name));
}

/// Resolve a drawn card against the active player, then discard it.
fn resolve_card(state: &mut GameState, card: CardDefinition) {
    use crate::cards::CardKind;

    state.push_log(format!("Card drawn: {}", card.description));

    if let Some(delta) = card.rubby_delta {
        if delta >= 0 {
            state.active_player_mut().rubbies += delta;
        } else {
            charge_active(state, -delta, false, "a card penalty");
        }
    }

    if card.kind == CardKind::Indulgence {
        state.active_player_mut().indulgences += 1;
    }

    if let Some(target) = card.move_to {
        state.active_player_mut().location = target;
        let name = state.active_player().name.clone();
        let board_name = state.board(target.board).name.clone();
        state.push_log(format!("{} was whisked off to {}.", name, board_name));
    }

    if card.send_to_hell {
        send_active_to_hell(state);
    }

    state.discard.push_back(card);
}

/// Draw the top card of the deck for the active player.
///
/// An empty deck is a logged note, never a failure.
pub(crate) fn draw_card(state: &mut GameState) {
    match state.deck.pop_front() {
        Some(card) => {
            state.pending_card = Some(card.clone());
            resolve_card(state, card);
        }
        None => state.push_log("Deck is empty; no card drawn.".to_string()),
    }
}

/// Property landing: purchase, rent, or a logged pass.
fn resolve_property(state: &mut GameState, space: &BoardSpace) {
    let Some(details) = space.property else {
        // Catalog data bug; treat as blank rather than invent terms.
        debug_assert!(false, "property space without property details");
        return;
    };

    let payer_id = state.active_player().id;
    let payer_name = state.active_player().name.clone();

    match state.property_owner(space.id) {
        None => {
            let (job_protected, can_afford) = {
                let player = state.active_player();
                (player.job_protected, player.rubbies >= details.price)
            };

            if job_protected {
                state.push_log(format!(
                    "{} is job-protected and cannot buy {}.",
                    payer_name, space.name
                ));
            } else if can_afford {
                let player = state.active_player_mut();
                player.rubbies -= details.price;
                player.record_purchase(space.id, details.price);
                state.push_log(format!(
                    "{} bought {} for {} rubbies.",
                    payer_name, space.name, details.price
                ));
            } else {
                state.push_log(format!(
                    "{} cannot afford {} ({} rubbies).",
                    payer_name, space.name, details.price
                ));
            }
        }
        Some(owner) if owner == payer_id => {
            state.push_log(format!("{} rests easy on their own {}.", payer_name, space.name));
        }
        Some(owner) => {
            if state.active_player().job_protected {
                state.push_log(format!(
                    "{} is job-protected; rent on {} is skipped.",
                    payer_name, space.name
                ));
                return;
            }

            let rent = details.effective_rent();
            let paid = rent.min(state.active_player().rubbies);

            state.active_player_mut().rubbies -= paid;
            state.player_mut(owner).rubbies += paid;

            let owner_name = state.player(owner).map(|p| p.name.clone()).unwrap_or_default();
            state.push_log(format!(
                "{} paid {} rubbies rent to {} for {}.",
                payer_name, paid, owner_name, space.name
            ));

            if paid < rent {
                bankrupt_active(state, "rent they could not cover");
            }
        }
    }
}

/// Dispatch the landed space's effect against the active player.
///
/// Leaves `state.go_lotto` populated when the space opened (or chained
/// into) the lotto sub-flow; the caller picks the next phase.
pub(crate) fn resolve_active_space(state: &mut GameState) {
    let space = state.active_space().clone();
    let name = state.active_player().name.clone();

    match space.kind {
        SpaceKind::Go => {
            state.go_lotto = Some(GoLottoState::choose());
            state.push_log(format!(
                "{} stands on {} and eyes the jackpot.",
                name, space.name
            ));
        }

        SpaceKind::Property => resolve_property(state, &space),

        SpaceKind::Tax => {
            if let Some(delta) = space.rubby_delta {
                if delta < 0 {
                    charge_active(state, -delta, true, "an unpayable tax");
                } else {
                    state.active_player_mut().rubbies += delta;
                }
            }
        }

        SpaceKind::Church => {
            if let Some(cost) = space.indulgence_cost {
                state.active_player_mut().indulgences += 1;
                state.push_log(format!(
                    "{} bought an indulgence for {} rubbies.",
                    name, cost
                ));
                charge_active(state, cost, false, "an unpayable church tithe");
            }
        }

        SpaceKind::Draw => draw_card(state),

        SpaceKind::Job => {
            if let Some(delta) = space.rubby_delta {
                state.active_player_mut().rubbies += delta.max(0);
            }
            state.active_player_mut().job_protected = true;
            state.push_log(format!(
                "{} took a job; rent and purchases are off until GO.",
                name
            ));
        }

        SpaceKind::HellGate => send_active_to_hell(state),

        SpaceKind::Teleport => {
            if let Some(target) = space.send_to {
                state.active_player_mut().location = target;
                let board_name = state.board(target.board).name.clone();
                state.push_log(format!("{} warped to {}.", name, board_name));

                // A teleport onto the GO space chains into the lotto.
                if state.active_space().kind == SpaceKind::Go {
                    state.go_lotto = Some(GoLottoState::choose());
                    state.push_log(format!("{} arrives right on GO.", name));
                }
            }
        }

        SpaceKind::Blank => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::catalog;
    use crate::cards::{CardId, CardKind};
    use crate::core::player::{PlayerId, PlayerState};
    use crate::core::{GameConfig, GameState};

    fn two_player_state() -> GameState {
        let start = catalog::SURFACE_START;
        GameState::new(
            GameConfig::default(),
            catalog::default_boards(),
            crate::cards::default_deck(),
            vec![
                PlayerState::new(PlayerId::new(0), "Whiskers", start, 300),
                PlayerState::new(PlayerId::new(1), "Scabbers", start, 300),
            ],
        )
    }

    #[test]
    fn test_win_precedence_last_rat_over_wealth() {
        let mut state = two_player_state();
        // One survivor who also passes the wealth goal.
        state.player_mut(PlayerId::new(1)).alive = false;
        state.player_mut(PlayerId::new(0)).rubbies = 5000;

        check_win_conditions(&mut state);

        assert_eq!(
            state.status,
            GameStatus::Over(Some(WinRecord {
                winner: PlayerId::new(0),
                reason: WinReason::LastRat,
            }))
        );
    }

    #[test]
    fn test_win_by_indulgences_beats_wealth() {
        let mut state = two_player_state();
        state.player_mut(PlayerId::new(0)).rubbies = 5000;
        state.player_mut(PlayerId::new(1)).indulgences = 3;

        check_win_conditions(&mut state);

        assert_eq!(
            state.status,
            GameStatus::Over(Some(WinRecord {
                winner: PlayerId::new(1),
                reason: WinReason::Indulgences,
            }))
        );
    }

    #[test]
    fn test_win_check_is_permanent() {
        let mut state = two_player_state();
        state.player_mut(PlayerId::new(1)).alive = false;
        check_win_conditions(&mut state);
        let frozen = state.clone();

        state.player_mut(PlayerId::new(0)).rubbies = 9999;
        check_win_conditions(&mut state);

        assert_eq!(state.status, frozen.status);
    }

    #[test]
    fn test_charge_with_shortfall_bankrupts() {
        let mut state = two_player_state();
        state.active_player_mut().rubbies = 100;
        state.active_player_mut().indulgences = 2;
        state
            .active_player_mut()
            .record_purchase(crate::boards::SpaceId::new(3), 220);

        charge_active(&mut state, 150, true, "an unpayable tax");

        let player = state.active_player();
        assert_eq!(player.rubbies, 0);
        assert_eq!(player.indulgences, 0);
        assert!(player.owned_properties.is_empty());
        // Full magnitude routed to the pot; nothing extra remained to forfeit.
        assert_eq!(state.jackpot, 150);
    }

    #[test]
    fn test_hell_preempted_by_indulgence() {
        let mut state = two_player_state();
        state.active_player_mut().indulgences = 1;

        send_active_to_hell(&mut state);

        let player = state.active_player();
        assert_eq!(player.indulgences, 0);
        assert!(!player.in_hell);
        assert_eq!(player.location, catalog::SURFACE_START);
    }

    #[test]
    fn test_hell_without_indulgence() {
        let mut state = two_player_state();
        state.active_player_mut().job_protected = true;

        send_active_to_hell(&mut state);

        let player = state.active_player();
        assert!(player.in_hell);
        assert!(!player.job_protected);
        assert_eq!(player.location, catalog::HELL_START);
    }

    #[test]
    fn test_draw_from_empty_deck_logs() {
        let mut state = two_player_state();
        state.deck = im::Vector::new();

        draw_card(&mut state);

        assert!(state.log.iter().any(|l| l.contains("Deck is empty")));
        assert!(state.pending_card.is_none());
    }

    #[test]
    fn test_draw_moves_card_to_discard() {
        let mut state = two_player_state();
        let before = state.deck_size();

        draw_card(&mut state);

        assert_eq!(state.deck_size(), before - 1);
        assert_eq!(state.discard.len(), 1);
        assert!(state.pending_card.is_some());
    }

    #[test]
    fn test_hell_card_preemptible() {
        let mut state = two_player_state();
        state.deck = im::Vector::from(vec![CardDefinition::new(
            CardId::new(99),
            CardKind::Hell,
            "Down you go.",
        )
        .with_send_to_hell()]);
        state.active_player_mut().indulgences = 1;

        draw_card(&mut state);

        assert!(!state.active_player().in_hell);
        assert_eq!(state.active_player().indulgences, 0);
    }

    #[test]
    fn test_property_purchase() {
        let mut state = two_player_state();
        // Trash Palace: surface index 3, price 220.
        state.active_player_mut().location = Location::new(catalog::SURFACE, 3);

        resolve_active_space(&mut state);

        let player = state.active_player();
        assert_eq!(player.rubbies, 80);
        assert!(player.owns(crate::boards::SpaceId::new(3)));
        assert_eq!(
            player.purchases[&crate::boards::SpaceId::new(3)].price_paid,
            220
        );
    }

    #[test]
    fn test_rent_with_multiplier() {
        let mut state = two_player_state();
        // Roach District: surface index 7, rent 60 x2.
        let space_id = crate::boards::SpaceId::new(7);
        state.player_mut(PlayerId::new(1)).record_purchase(space_id, 180);
        state.active_player_mut().location = Location::new(catalog::SURFACE, 7);

        resolve_active_space(&mut state);

        assert_eq!(state.active_player().rubbies, 300 - 120);
        assert_eq!(state.player(PlayerId::new(1)).unwrap().rubbies, 300 + 120);
    }

    #[test]
    fn test_rent_clamped_and_bankrupts() {
        let mut state = two_player_state();
        let space_id = crate::boards::SpaceId::new(3);
        state.player_mut(PlayerId::new(1)).record_purchase(space_id, 220);
        state.active_player_mut().location = Location::new(catalog::SURFACE, 3);
        state.active_player_mut().rubbies = 90;
        state.active_player_mut().indulgences = 1;

        resolve_active_space(&mut state);

        // Owner got only the 90 the payer had; payer is cleaned out.
        assert_eq!(state.player(PlayerId::new(1)).unwrap().rubbies, 390);
        assert_eq!(state.active_player().rubbies, 0);
        assert_eq!(state.active_player().indulgences, 0);
    }

    #[test]
    fn test_job_protection_skips_rent() {
        let mut state = two_player_state();
        let space_id = crate::boards::SpaceId::new(3);
        state.player_mut(PlayerId::new(1)).record_purchase(space_id, 220);
        state.active_player_mut().location = Location::new(catalog::SURFACE, 3);
        state.active_player_mut().job_protected = true;

        resolve_active_space(&mut state);

        assert_eq!(state.active_player().rubbies, 300);
        assert_eq!(state.player(PlayerId::new(1)).unwrap().rubbies, 300);
        assert!(state.log.iter().any(|l| l.contains("skipped")));
    }

    #[test]
    fn test_teleport_chains_into_lotto() {
        let mut state = two_player_state();
        // Subsurface exit teleports straight onto GO.
        state.active_player_mut().location = Location::new(catalog::SUBSURFACE, 4);

        resolve_active_space(&mut state);

        assert_eq!(state.active_player().location, catalog::SURFACE_START);
        assert_eq!(state.go_lotto, Some(GoLottoState::choose()));
    }

    #[test]
    fn test_tax_feeds_jackpot() {
        let mut state = two_player_state();
        state.active_player_mut().location = Location::new(catalog::SURFACE, 2);

        resolve_active_space(&mut state);

        assert_eq!(state.active_player().rubbies, 150);
        assert_eq!(state.jackpot, 150);
    }

    #[test]
    fn test_job_space_grants_protection_and_stipend() {
        let mut state = two_player_state();
        state.active_player_mut().location = Location::new(catalog::SURFACE, 5);

        resolve_active_space(&mut state);

        assert!(state.active_player().job_protected);
        assert_eq!(state.active_player().rubbies, 400);
    }
}
