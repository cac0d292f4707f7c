use super::*;

fn seeds(count: u32) -> Vec<Team> {
    // Shuffled input order; pairing must go by seed, not position
    (1..=count).rev().map(|seed| Team::new(format!("s{seed}"), seed, "playoffs")).collect()
}

fn finished(round: u32, group: &str, a: &str, b: &str, winner: Option<&str>) -> Match {
    Match {
        round,
        match_group: group.to_string(),
        team_a_id: Some(TeamId::from(a)),
        team_b_id: Some(TeamId::from(b)),
        is_bo3: true,
        is_finished: winner.is_some(),
        winner_id: winner.map(TeamId::from),
        event_id: Some("playoffs".to_string()),
    }
}

fn labelled(matches: &[Match]) -> Vec<(String, String, String)> {
    matches
        .iter()
        .map(|m| {
            let (a, b) = m.teams().unwrap();
            (m.match_group.clone(), a.to_string(), b.to_string())
        })
        .collect()
}

fn slot(group: &str, a: &str, b: &str) -> (String, String, String) {
    (group.to_string(), a.to_string(), b.to_string())
}

fn quarterfinals() -> Vec<Match> {
    vec![
        finished(1, "Q1", "s1", "s8", Some("s1")),
        finished(1, "Q2", "s4", "s5", Some("s5")),
        finished(1, "Q3", "s3", "s6", Some("s3")),
        finished(1, "Q4", "s2", "s7", Some("s7")),
    ]
}

#[test]
fn test_quarterfinal_seeding() {
    let result = pair_bracket_round(&seeds(8), &[], 1);

    assert!(result.is_clean());
    let round = result.value();
    assert_eq!(
        labelled(&round.new_matches),
        vec![
            slot("Q1", "s1", "s8"),
            slot("Q2", "s4", "s5"),
            slot("Q3", "s3", "s6"),
            slot("Q4", "s2", "s7"),
        ]
    );
    assert!(round.new_matches.iter().all(|m| m.is_bo3 && m.round == 1));
    assert_eq!(round.new_matches[0].event_id.as_deref(), Some("playoffs"));
}

#[test]
fn test_too_few_teams_is_not_ready() {
    let result = pair_bracket_round(&seeds(7), &[], 1);

    assert!(result.value().new_matches.is_empty());
    assert_eq!(result.warnings(), &[Warning::InsufficientTeams { required: 8, found: 7 }]);
}

#[test]
fn test_extra_teams_use_best_seeds() {
    let result = pair_bracket_round(&seeds(10), &[], 1);

    let round = result.value();
    assert_eq!(round.new_matches.len(), 4);
    assert!(round.new_matches.iter().all(|m| !m.involves(&TeamId::from("s9"))));
}

#[test]
fn test_semifinals_take_quarterfinal_winners() {
    let result = pair_bracket_round(&[], &quarterfinals(), 2);

    assert!(result.is_clean());
    assert_eq!(
        labelled(&result.value().new_matches),
        vec![slot("S1", "s1", "s5"), slot("S2", "s3", "s7")]
    );
    assert!(result.value().incomplete_groups.is_empty());
}

#[test]
fn test_unfinished_feeder_omits_slot() {
    let mut history = quarterfinals();
    history[2] = finished(1, "Q3", "s3", "s6", None);

    let result = pair_bracket_round(&[], &history, 2);

    let round = result.value();
    assert_eq!(labelled(&round.new_matches), vec![slot("S1", "s1", "s5")]);
    assert_eq!(round.incomplete_groups, vec!["S2".to_string()]);
    assert_eq!(
        result.warnings(),
        &[Warning::UnresolvedSlot {
            group: "S2".to_string(),
            waiting_on: vec!["Q3".to_string()],
        }]
    );
}

#[test]
fn test_winner_ignored_until_finished() {
    let mut history = quarterfinals();
    // Winner recorded but match not marked finished
    history[0].is_finished = false;

    let result = pair_bracket_round(&[], &history, 2);

    assert_eq!(result.value().incomplete_groups, vec!["S1".to_string()]);
}

#[test]
fn test_final_pairs_semifinal_winners() {
    let mut history = quarterfinals();
    history.push(finished(2, "S1", "s1", "s5", Some("s5")));
    history.push(finished(2, "S2", "s3", "s7", Some("s3")));

    let result = pair_bracket_round(&[], &history, 3);

    assert_eq!(labelled(&result.value().new_matches), vec![slot("F1", "s5", "s3")]);
    assert!(result.value().new_matches[0].is_bo3);
    assert_eq!(result.value().new_matches[0].event_id.as_deref(), Some("playoffs"));
}

#[test]
fn test_round_past_final_has_no_matches() {
    let result = pair_bracket_round(&seeds(8), &quarterfinals(), 4);

    assert!(result.value().new_matches.is_empty());
    assert_eq!(result.warnings(), &[Warning::NoSuchRound { round: 4 }]);
}
