//! Advisor integration tests: snapshots in, ranked moves and hints out.

use hanafuda_advisor::cards::{parse_cards, Card};
use hanafuda_advisor::core::{AdvisorConfig, Dealer, GameState, RuleVariant};
use hanafuda_advisor::roles::{detect_holo_roles, HoloRoleId};
use hanafuda_advisor::rules::ProgressHint;
use hanafuda_advisor::strategy::{best_combination_hints, rank_moves, Advisor, MoveNote};

fn cards(tokens: &[&str]) -> Vec<Card> {
    parse_cards(tokens).expect("valid tokens")
}

// =============================================================================
// Snapshot Tests
// =============================================================================

#[test]
fn test_suggest_from_json_record() {
    let json = r#"{
        "hand": ["8:bright", "6:kasu", "12:kasu"],
        "field": ["8:kasu", "6:ribbon", "6:animal", "4:kasu"],
        "captured_self": ["1:bright", "3:bright"],
        "captured_opp": ["2:ribbon"]
    }"#;
    let state = GameState::from_json(json).unwrap();
    let advisor = Advisor::new(state.config().clone());

    let moves = advisor.suggest(&state);
    assert_eq!(moves.len(), 4);

    assert_eq!(moves[0].play, cards(&["8:bright"])[0]);
    assert_eq!(moves[0].score_delta, 5);
    assert_eq!(moves[0].note, MoveNote::YakuIncrease);

    assert_eq!(moves[1].note, MoveNote::DeniesOpponent);
    assert_eq!(moves[2].note, MoveNote::DeniesOpponent);

    assert_eq!(moves[3].capture, None);
    assert_eq!(moves[3].note, MoveNote::NoCapture);

    let hints = advisor.suggest_hints(&state);
    assert_eq!(hints[0], ProgressHint::PrioritizeBright { month: 8 });
}

#[test]
fn test_snapshot_config_selects_variant() {
    let base = r#""captured_self": ["1:kasu","2:kasu","3:kasu","4:kasu","5:kasu","6:kasu","7:kasu","8:kasu","9:kasu","9:animal-sake"]"#;

    let holo = GameState::from_json(&format!("{{{}}}", base)).unwrap();
    assert_eq!(holo.points(), 1);

    let classic = GameState::from_json(&format!(r#"{{{}, "config": {{"variant": "classic"}}}}"#, base)).unwrap();
    assert_eq!(classic.config().variant, RuleVariant::Classic);
    assert_eq!(classic.points(), 0);
}

// =============================================================================
// Ranking Rules
// =============================================================================

#[test]
fn test_two_field_matches_always_offer_denial() {
    let hand = cards(&["10:kasu"]);
    let field = cards(&["10:animal", "10:ribbon", "1:kasu"]);

    let moves = rank_moves(&hand, &field, &[], &[]);
    assert!(moves.iter().any(|m| m.denial_bonus == 1 && m.score_delta >= 1));
}

#[test]
fn test_single_match_has_no_denial() {
    let moves = rank_moves(&cards(&["10:kasu"]), &cards(&["10:animal"]), &[], &[]);
    assert_eq!(moves[0].denial_bonus, 0);
    assert_eq!(moves[0].note, MoveNote::StandardCapture);
}

#[test]
fn test_opponent_captures_do_not_change_ranking() {
    let hand = cards(&["3:bright", "7:kasu"]);
    let field = cards(&["3:kasu", "7:animal", "7:ribbon"]);
    let own = cards(&["1:bright", "8:bright"]);

    let without = rank_moves(&hand, &field, &own, &[]);
    let with = rank_moves(&hand, &field, &own, &cards(&["11:bright", "12:bright"]));
    assert_eq!(without, with);
}

#[test]
fn test_hints_front_load_capturable_bright() {
    let hand = cards(&["11:bright-rain", "2:kasu"]);
    let field = cards(&["11:kasu"]);

    let hints = best_combination_hints(&hand, &field, &[]);
    assert_eq!(hints.len(), 5);
    assert_eq!(hints[0].to_string(), "Prioritize the month 11 bright to aim for sanko/shiko/gokou");
}

// =============================================================================
// Dealt Rounds
// =============================================================================

#[test]
fn test_dealt_rounds_are_reproducible() {
    let config = AdvisorConfig::default();
    let advisor = Advisor::new(config.clone());

    let state_a = Dealer::new(2024).deal().into_state(config.clone());
    let state_b = Dealer::new(2024).deal().into_state(config);

    assert_eq!(state_a, state_b);
    assert_eq!(advisor.suggest(&state_a), advisor.suggest(&state_b));
}

#[test]
fn test_every_dealt_round_yields_moves() {
    let mut dealer = Dealer::new(1);
    let advisor = Advisor::default();

    for _ in 0..50 {
        let state = dealer.deal().into_state(AdvisorConfig::default());
        let moves = advisor.suggest(&state);
        assert!(!moves.is_empty());
        assert!(moves.len() <= 5);
    }
}

// =============================================================================
// Holo Roles
// =============================================================================

#[test]
fn test_holo_roles_alongside_yaku() {
    let captured = cards(&["8:bright-moon", "9:ribbon-blue", "12:ribbon-plain", "9:animal-sake"]);

    let roles = detect_holo_roles(&captured);
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id, HoloRoleId::Gamers);

    let state = GameState::default().with_captured_self(captured);
    assert_eq!(state.points(), 5); // tsukimi-zake
}
