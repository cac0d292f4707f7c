use super::*;
use pairing_core::Warning;

fn swiss_stage(count: u32) -> Stage {
    let teams = (1..=count).map(|seed| Team::new(format!("t{seed}"), seed, "swiss")).collect();
    Stage::new(Snapshot::new(EventType::Swiss, teams), PairingConfig::default())
}

fn team<'a>(stage: &'a Stage, id: &str) -> &'a Team {
    stage.teams().iter().find(|t| t.id.as_str() == id).unwrap()
}

/// Finish every pending match in favour of the A side.
fn a_side_wins(stage: &mut Stage) {
    let pending: Vec<(usize, TeamId)> = stage
        .pending()
        .map(|(index, m)| (index, m.team_a_id.clone().unwrap()))
        .collect();
    for (index, winner) in pending {
        stage.record_result(index, &winner).unwrap();
    }
}

#[test]
fn test_round_refused_while_results_outstanding() {
    let mut stage = swiss_stage(4);
    let first = stage.generate_next_round().unwrap();
    assert_eq!(first.value(), &vec![0, 1]);

    let err = stage.generate_next_round().unwrap_err();
    assert!(matches!(err, TournamentError::RoundInProgress { round: 1, unfinished: 2 }));
}

#[test]
fn test_record_result_updates_both_teams() {
    let mut stage = swiss_stage(4);
    let _ = stage.generate_next_round().unwrap();

    stage.record_result(0, &TeamId::from("t1")).unwrap();

    assert_eq!((team(&stage, "t1").wins, team(&stage, "t1").losses), (1, 0));
    assert_eq!((team(&stage, "t3").wins, team(&stage, "t3").losses), (0, 1));
    assert_eq!(stage.matches()[0].winner(), Some(&TeamId::from("t1")));
}

#[test]
fn test_record_result_rejects_bad_input() {
    let mut stage = swiss_stage(4);
    let _ = stage.generate_next_round().unwrap();

    assert!(matches!(
        stage.record_result(9, &TeamId::from("t1")),
        Err(TournamentError::UnknownMatch(9))
    ));
    assert!(matches!(
        stage.record_result(0, &TeamId::from("t2")),
        Err(TournamentError::NotAParticipant { index: 0, .. })
    ));
    stage.record_result(0, &TeamId::from("t1")).unwrap();
    assert!(matches!(
        stage.record_result(0, &TeamId::from("t1")),
        Err(TournamentError::AlreadyFinished(0))
    ));
}

#[test]
fn test_swiss_stage_runs_to_completion() {
    let mut stage = swiss_stage(16);
    let mut rounds = 0;
    while !stage.is_complete() {
        let result = stage.generate_next_round().unwrap();
        assert!(
            result.warnings().iter().all(|w| matches!(w, Warning::RematchFallback { .. })),
            "{:?}",
            result.warnings()
        );
        a_side_wins(&mut stage);
        rounds += 1;
        assert!(rounds <= 5, "a 16-team 3-3 Swiss finishes in five rounds");
    }

    let advanced = stage.teams().iter().filter(|t| t.status == TeamStatus::Advanced).count();
    assert_eq!(advanced, 8);
    assert!(stage.teams().iter().all(|t| t.wins == 3 || t.losses == 3));
}

#[test]
fn test_playoffs_seeded_from_standings() {
    let mut stage = swiss_stage(16);
    while !stage.is_complete() {
        let _ = stage.generate_next_round().unwrap();
        a_side_wins(&mut stage);
    }

    let playoffs = stage.seed_playoffs(8, "playoffs");

    assert_eq!(playoffs.event_type, EventType::SingleElim);
    assert_eq!(playoffs.teams.len(), 8);
    let seeds: Vec<u32> = playoffs.teams.iter().map(|t| t.seed).collect();
    assert_eq!(seeds, (1..=8).collect::<Vec<_>>());
    // 3-0 teams lead the standings
    let top = &playoffs.teams[0].id;
    assert_eq!(team(&stage, top.as_str()).losses, 0);
    assert!(playoffs.teams.iter().all(|t| t.is_alive() && t.wins == 0 && t.event_id == "playoffs"));
}

#[test]
fn test_bracket_stage_crowns_champion() {
    let teams = (1..=8).map(|seed| Team::new(format!("s{seed}"), seed, "playoffs")).collect();
    let snapshot = Snapshot::new(EventType::SingleElim, teams);
    let mut stage = Stage::new(snapshot, PairingConfig::default());

    for expected in [4, 2, 1] {
        assert!(!stage.is_complete());
        let result = stage.generate_next_round().unwrap();
        assert!(result.is_clean());
        assert_eq!(result.value().len(), expected);
        a_side_wins(&mut stage);
    }

    assert!(stage.is_complete());
    assert_eq!(team(&stage, "s1").status, TeamStatus::Advanced);
    let eliminated = stage.teams().iter().filter(|t| t.status == TeamStatus::Eliminated).count();
    assert_eq!(eliminated, 7);
}
