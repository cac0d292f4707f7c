use super::*;
use crate::error::TournamentError;
use crate::settings::SimulationConfig;
use pairing_core::TeamStatus;

fn series(is_bo3: bool) -> Match {
    let a = Team::new("a", 1, SWISS_EVENT);
    let b = Team::new("b", 2, SWISS_EVENT);
    Match::pairing(1, "0-0", &a, &b, is_bo3)
}

fn seeded_settings(rng_seed: u64) -> Settings {
    Settings {
        simulation: SimulationConfig {
            rng_seed: Some(rng_seed),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_best_of_three_needs_two_maps() {
    let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(1), EloTracker::new());

    for _ in 0..20 {
        let (winner, score) = simulator.play_series(&series(true)).unwrap();
        let winner_maps = if winner.as_str() == "a" { score.a_maps } else { score.b_maps };
        assert_eq!(winner_maps, 2);
        assert!((2..=3).contains(&score.total_maps()));
    }
}

#[test]
fn test_best_of_one_is_single_map() {
    let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(2), EloTracker::new());

    let (_, score) = simulator.play_series(&series(false)).unwrap();

    assert_eq!(score.total_maps(), 1);
    assert_eq!(simulator.elo().history.len(), 1);
}

#[test]
fn test_series_without_both_sides_is_skipped() {
    let mut simulator = MatchSimulator::new(StdRng::seed_from_u64(3), EloTracker::new());
    let mut half = series(true);
    half.team_b_id = None;

    assert!(simulator.play_series(&half).is_none());
}

#[test]
fn test_default_event_crowns_a_champion() {
    let summary = simulate_event(&seeded_settings(7)).unwrap();

    assert!(summary.swiss.is_complete());
    assert!(summary.playoffs.is_complete());
    assert_eq!(summary.playoffs.matches().len(), 7);
    let champion = summary.champion.expect("final was played");
    assert!(summary
        .playoffs
        .teams()
        .iter()
        .any(|t| t.id == champion && t.status == TeamStatus::Advanced));
    assert!(summary.warnings.iter().all(|w| matches!(w, Warning::RematchFallback { .. })));
}

#[test]
fn test_same_seed_same_event() {
    let first = simulate_event(&seeded_settings(11)).unwrap();
    let second = simulate_event(&seeded_settings(11)).unwrap();

    assert_eq!(first.champion, second.champion);
    assert_eq!(first.swiss.matches(), second.swiss.matches());
}

#[test]
fn test_small_field_cannot_fill_bracket() {
    let mut settings = seeded_settings(5);
    settings.simulation.teams = 4;
    settings.pairing.wins_to_advance = 1;
    settings.pairing.losses_to_eliminate = 1;

    let summary = simulate_event(&settings).unwrap();

    assert!(summary.swiss.is_complete());
    assert!(summary.champion.is_none());
    assert!(summary
        .warnings
        .contains(&Warning::InsufficientTeams { required: 8, found: 2 }));
}

#[test]
fn test_unsupported_bracket_size_is_rejected() {
    let mut settings = seeded_settings(3);
    settings.simulation.bracket_size = 6;

    let err = simulate_event(&settings).unwrap_err();

    assert!(matches!(err, TournamentError::BracketSize { size: 6, required: 8 }));
}
