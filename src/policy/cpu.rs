//! The automated player.
//!
//! `decide` looks at a snapshot and produces a `Decision` for the
//! current phase without touching the state; `apply_decision` feeds
//! that decision through exactly the operations a human-driven caller
//! would use. All randomness comes from the caller's `GameRng`, so CPU
//! turns replay like everything else.
//!
//! The roll heuristic scores each possible die face by the danger of
//! the space it would land on. The scored winner is advisory only - it
//! goes into `preferred_die` and the notes, while the die actually fed
//! to the engine comes from the RNG.

use crate::boards::{BoardSpace, SpaceKind};
use crate::core::{GameRng, GameState, PlayerState, TurnPhase};
use crate::engine;

use super::decision::{Decision, DecisionKind, LottoCall};

/// How much a space frightens the policy.
fn evaluate_space_danger(space: &BoardSpace) -> f64 {
    let mut danger = 0.0;

    if space.kind == SpaceKind::HellGate {
        danger += 600.0;
    }
    if let Some(delta) = space.rubby_delta {
        if delta < 0 {
            danger += (-delta) as f64;
        }
    }
    if space.kind == SpaceKind::Property {
        if let Some(property) = space.property {
            danger += property.effective_rent() as f64;
        }
    }
    if space.kind == SpaceKind::Tax {
        danger += 120.0;
    }
    if let Some(cost) = space.indulgence_cost {
        danger += cost as f64 / 2.0;
    }

    danger
}

/// The space a given roll would land the player on.
fn predict_landing<'a>(state: &'a GameState, player: &PlayerState, roll: u8) -> &'a BoardSpace {
    let board = state.board(player.location.board);
    board.space((player.location.index + roll as usize) % board.len())
}

/// Score all six faces and pick the most desirable landing.
///
/// Ties go to the lowest face.
fn choose_preferred_roll(state: &GameState, player: &PlayerState) -> (u8, String) {
    let mut best_roll = 1;
    let mut best_score = f64::NEG_INFINITY;
    let mut best_name = String::new();

    for roll in 1..=6u8 {
        let space = predict_landing(state, player, roll);
        let danger = evaluate_space_danger(space);
        let mut desirability = 10.0 - danger * 0.05;

        match space.kind {
            SpaceKind::Draw => {
                desirability += if state.jackpot > 300 { 4.0 } else { 2.0 };
            }
            SpaceKind::Go => desirability += 3.0,
            SpaceKind::Job => desirability += 1.5,
            _ => {}
        }

        if desirability > best_score {
            best_score = desirability;
            best_roll = roll;
            best_name = space.name.clone();
        }
    }

    let note = format!(
        "Would pick a {} targeting {} (desirability {:.1})",
        best_roll, best_name, best_score
    );
    (best_roll, note)
}

/// Pay the premium only when under-stocked and still solvent after.
fn should_buy_indulgence(player: &PlayerState, space: &BoardSpace) -> bool {
    let Some(cost) = space.indulgence_cost else {
        return false;
    };
    if player.indulgences >= 2 {
        return false;
    }
    player.rubbies - cost >= 100
}

/// Advisory repayment figure; nothing in the core consumes it.
fn plan_debt_repayment(player: &PlayerState) -> i64 {
    if player.rubbies < 150 {
        return 0;
    }
    player.rubbies / 5
}

/// Advisory auction figure; nothing in the core consumes it.
fn plan_auction_bid(player: &PlayerState) -> i64 {
    if player.rubbies > 300 {
        (player.rubbies / 4).min(200)
    } else {
        0
    }
}

/// Wager appetite scales with the pot.
fn plan_lotto_risk(state: &GameState) -> LottoCall {
    if state.jackpot >= 400 {
        LottoCall::Aggressive
    } else {
        LottoCall::Conservative
    }
}

/// Produce the CPU's decision for the current phase.
///
/// Pure with respect to the snapshot; dice and called faces are drawn
/// from the supplied RNG.
#[must_use]
pub fn decide(state: &GameState, rng: &mut GameRng) -> Decision {
    let player = state.active_player();

    match state.phase {
        TurnPhase::PreMove => {
            Decision::new(DecisionKind::FinishPreMove).with_note("Clearing pre-move checks")
        }

        TurnPhase::HellEscape => {
            let mut decision =
                Decision::new(DecisionKind::HellEscape).with_note("In hell - prioritizing survival");
            decision.die = Some(rng.roll_die());
            decision.survive_firing_squad = Some(player.hell_escapes >= 2);
            decision
        }

        TurnPhase::Roll => {
            let (preferred, note) = choose_preferred_roll(state, player);
            let mut decision = Decision::new(DecisionKind::Roll)
                .with_note("Rent avoidance and lotto risk tuning")
                .with_note(note);
            decision.die = Some(rng.roll_die());
            decision.preferred_die = Some(preferred);
            decision.lotto_call = Some(plan_lotto_risk(state));
            decision
        }

        TurnPhase::Move => Decision::new(DecisionKind::Move).with_note("Advance to landing space"),

        TurnPhase::Resolve => {
            let space = state.active_space();
            let buy = should_buy_indulgence(player, space);
            let mut decision =
                Decision::new(DecisionKind::Resolve).with_note("Resolve current space effects");
            if buy {
                decision = decision.with_note("Buying indulgence to hedge against penalties");
            }
            let repayment = plan_debt_repayment(player);
            if repayment > 0 {
                decision =
                    decision.with_note(format!("Repaying {} rubbies if debt exists", repayment));
            }
            decision.buy_indulgence = buy;
            decision.debt_repayment = repayment;
            decision.auction_bid = plan_auction_bid(player);
            decision
        }

        TurnPhase::GoLotto => {
            let risk = plan_lotto_risk(state);
            if risk == LottoCall::Aggressive || state.jackpot >= 200 {
                let face = rng.roll_die();
                let mut decision = Decision::new(DecisionKind::GoWager)
                    .with_note("Gambling GO payout on lotto")
                    .with_note(format!("Calling {}", face));
                decision.called_face = Some(face);
                decision
            } else {
                Decision::new(DecisionKind::GoPayout)
                    .with_note("Taking safe 200 rubbies from GO")
            }
        }

        TurnPhase::GoLottoRoll => {
            let mut decision =
                Decision::new(DecisionKind::GoRoll).with_note("Rolling for GO lotto jackpot");
            decision.die = Some(rng.roll_die());
            decision
        }

        TurnPhase::AfterEffects => {
            Decision::new(DecisionKind::AfterEffects).with_note("Wrapping up turn")
        }

        TurnPhase::GameOver => Decision::new(DecisionKind::Begin),
    }
}

/// Append the rationale notes and run the decided operation.
///
/// Operations missing their die (a hand-built decision) fall back to a
/// 1, the most conservative face.
#[must_use]
pub fn apply_decision(state: &GameState, decision: &Decision) -> GameState {
    if state.is_over() {
        return state.clone();
    }

    let mut base = state.clone();
    if !decision.notes.is_empty() {
        let name = base.active_player().name.clone();
        let joined = decision.notes.join(" | ");
        base.push_log(format!("{} (CPU): {}", name, joined));
    }

    let die = decision.die.unwrap_or(1);
    match decision.kind {
        DecisionKind::Begin => engine::begin_pre_move(&base),
        DecisionKind::FinishPreMove => engine::finish_pre_move(&base),
        DecisionKind::HellEscape => engine::resolve_hell_escape(
            &base,
            die,
            decision.survive_firing_squad.unwrap_or(false),
        ),
        DecisionKind::Roll => engine::record_roll(&base, die),
        DecisionKind::Move => engine::apply_movement(&base),
        DecisionKind::Resolve => engine::resolve_current_space(&base),
        DecisionKind::GoPayout => engine::take_go_payout(&base),
        DecisionKind::GoWager => engine::place_go_wager(&base, decision.called_face.unwrap_or(1)),
        DecisionKind::GoRoll => engine::resolve_go_lotto_roll(&base, die),
        DecisionKind::AfterEffects => engine::apply_after_effects(&base),
    }
}

/// A one-line persona for the presentation layer.
#[must_use]
pub fn describe_role(state: &GameState) -> &'static str {
    let player = state.active_player();
    if player.in_hell {
        "Survival mode"
    } else if player.rubbies < 150 {
        "Frugal rat"
    } else if player.indulgences > 0 {
        "Indulgent raider"
    } else {
        "Balanced opportunist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{catalog, Location};
    use crate::engine::SessionBuilder;

    fn fresh_state() -> GameState {
        SessionBuilder::new()
            .participant("Whiskers")
            .participant("Scabbers")
            .build()
    }

    #[test]
    fn test_decide_pre_move() {
        let state = fresh_state();
        let decision = decide(&state, &mut GameRng::new(1));

        assert_eq!(decision.kind, DecisionKind::FinishPreMove);
        assert!(!decision.notes.is_empty());
    }

    #[test]
    fn test_decide_is_pure() {
        let state = fresh_state();
        let snapshot = state.clone();
        let _ = decide(&state, &mut GameRng::new(1));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_roll_decision_carries_both_dice() {
        let state = engine::finish_pre_move(&fresh_state());
        let decision = decide(&state, &mut GameRng::new(1));

        assert_eq!(decision.kind, DecisionKind::Roll);
        assert!((1..=6).contains(&decision.die.unwrap()));
        assert!((1..=6).contains(&decision.preferred_die.unwrap()));
        assert!(decision.lotto_call.is_some());
    }

    #[test]
    fn test_preferred_roll_avoids_the_hell_gate() {
        let mut state = fresh_state();
        // From index 0 a roll of 6 would land on the hell gate; the
        // heuristic should prefer anything else.
        state.active_player_mut().location = Location::new(catalog::SURFACE, 0);
        state.phase = TurnPhase::Roll;

        let decision = decide(&state, &mut GameRng::new(1));
        assert_ne!(decision.preferred_die, Some(6));
    }

    #[test]
    fn test_hell_escape_decision() {
        let mut state = fresh_state();
        state.active_player_mut().enter_hell(catalog::HELL_START);
        state.active_player_mut().hell_escapes = 2;
        state.phase = TurnPhase::HellEscape;

        let decision = decide(&state, &mut GameRng::new(1));

        assert_eq!(decision.kind, DecisionKind::HellEscape);
        assert_eq!(decision.survive_firing_squad, Some(true));

        state.active_player_mut().hell_escapes = 1;
        let early = decide(&state, &mut GameRng::new(1));
        assert_eq!(early.survive_firing_squad, Some(false));
    }

    #[test]
    fn test_lotto_wagers_on_big_jackpot() {
        let mut state = fresh_state();
        state.jackpot = 450;
        state.go_lotto = Some(crate::core::GoLottoState::choose());
        state.phase = TurnPhase::GoLotto;

        let decision = decide(&state, &mut GameRng::new(1));
        assert_eq!(decision.kind, DecisionKind::GoWager);
        assert!(decision.called_face.is_some());
    }

    #[test]
    fn test_lotto_plays_safe_on_small_jackpot() {
        let mut state = fresh_state();
        state.jackpot = 50;
        state.go_lotto = Some(crate::core::GoLottoState::choose());
        state.phase = TurnPhase::GoLotto;

        let decision = decide(&state, &mut GameRng::new(1));
        assert_eq!(decision.kind, DecisionKind::GoPayout);
    }

    #[test]
    fn test_resolve_decision_indulgence_budget() {
        let mut state = fresh_state();
        // Church: costs 300; balance 300 leaves 0 < 100, so no buy.
        state.active_player_mut().location = Location::new(catalog::SURFACE, 1);
        state.phase = TurnPhase::Resolve;

        let decision = decide(&state, &mut GameRng::new(1));
        assert!(!decision.buy_indulgence);

        state.active_player_mut().rubbies = 500;
        let flush = decide(&state, &mut GameRng::new(1));
        assert!(flush.buy_indulgence);
    }

    #[test]
    fn test_apply_decision_appends_notes_then_acts() {
        let state = fresh_state();
        let decision = decide(&state, &mut GameRng::new(1));
        let after = apply_decision(&state, &decision);

        assert_eq!(after.phase, TurnPhase::Roll);
        assert!(after.log.iter().any(|l| l.contains("(CPU)")));
    }

    #[test]
    fn test_apply_decision_when_over_is_identity() {
        let mut state = fresh_state();
        state.status = crate::core::GameStatus::Over(None);
        state.phase = TurnPhase::GameOver;

        let decision = Decision::new(DecisionKind::AfterEffects).with_note("too late");
        let after = apply_decision(&state, &decision);

        assert_eq!(after, state);
    }

    #[test]
    fn test_describe_role() {
        let mut state = fresh_state();
        assert_eq!(describe_role(&state), "Balanced opportunist");

        state.active_player_mut().rubbies = 100;
        assert_eq!(describe_role(&state), "Frugal rat");

        state.active_player_mut().rubbies = 400;
        state.active_player_mut().indulgences = 1;
        assert_eq!(describe_role(&state), "Indulgent raider");

        state.active_player_mut().in_hell = true;
        assert_eq!(describe_role(&state), "Survival mode");
    }
}
