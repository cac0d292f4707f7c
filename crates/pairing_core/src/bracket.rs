//! Single-elimination bracket pairing
//!
//! Eight seeds enter quarterfinals `Q1..Q4`; winners feed fixed slots
//! (`Q1`+`Q2` -> `S1`, `Q3`+`Q4` -> `S2`, `S1`+`S2` -> `F1`).

use tracing::{debug, warn};

use crate::diagnostics::{RoundResult, Warning};
use crate::types::{Match, Team, TeamId};

/// Teams required to seed the quarterfinals
pub const BRACKET_SIZE: usize = 8;

/// Quarterfinal slots as (label, higher seed index, lower seed index).
const QUARTERFINALS: [(&str, usize, usize); 4] =
    [("Q1", 0, 7), ("Q2", 3, 4), ("Q3", 2, 5), ("Q4", 1, 6)];

/// Later slots as (label, A-side feeder, B-side feeder), indexed by round - 2.
const FED_SLOTS: [&[(&str, &str, &str)]; 2] = [
    &[("S1", "Q1", "Q2"), ("S2", "Q3", "Q4")],
    &[("F1", "S1", "S2")],
];

/// Matches for one bracket round.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BracketRound {
    pub new_matches: Vec<Match>,
    /// Slots that could not be filled yet because a feeder has no winner
    pub incomplete_groups: Vec<String>,
}

/// Pair a single-elimination round.
///
/// An empty round is "not ready", never an error: round 1 with too few teams
/// and later rounds with unfinished feeders both return fewer matches plus a
/// warning saying why.
pub fn pair_bracket_round(
    teams: &[Team],
    previous_matches: &[Match],
    current_round: u32,
) -> RoundResult<BracketRound> {
    match current_round {
        1 => seed_quarterfinals(teams),
        2 | 3 => advance_winners(previous_matches, current_round),
        round => {
            warn!(round, "bracket has no such round");
            RoundResult::from_parts(BracketRound::default(), vec![Warning::NoSuchRound { round }])
        }
    }
}

fn seed_quarterfinals(teams: &[Team]) -> RoundResult<BracketRound> {
    if teams.len() < BRACKET_SIZE {
        warn!(found = teams.len(), "not enough teams to seed bracket");
        return RoundResult::from_parts(
            BracketRound::default(),
            vec![Warning::InsufficientTeams {
                required: BRACKET_SIZE,
                found: teams.len(),
            }],
        );
    }

    let mut seeded: Vec<&Team> = teams.iter().collect();
    seeded.sort_by_key(|team| team.seed);
    seeded.truncate(BRACKET_SIZE);

    let new_matches = QUARTERFINALS
        .iter()
        .map(|&(label, high, low)| Match::pairing(1, label, seeded[high], seeded[low], true))
        .collect();

    RoundResult::Ok(BracketRound {
        new_matches,
        incomplete_groups: Vec::new(),
    })
}

fn advance_winners(previous_matches: &[Match], round: u32) -> RoundResult<BracketRound> {
    let mut result = BracketRound::default();
    let mut warnings = Vec::new();

    for &(label, feeder_a, feeder_b) in FED_SLOTS[round as usize - 2] {
        let winners = (
            slot_winner(previous_matches, feeder_a),
            slot_winner(previous_matches, feeder_b),
        );
        match winners {
            (Some(a), Some(b)) => {
                let next = fed_match(round, label, a, b, previous_matches);
                result.new_matches.push(next);
            }
            (a, b) => {
                let waiting_on: Vec<String> = [(feeder_a, a), (feeder_b, b)]
                    .into_iter()
                    .filter(|(_, winner)| winner.is_none())
                    .map(|(feeder, _)| feeder.to_string())
                    .collect();
                debug!(slot = label, ?waiting_on, "bracket slot not ready");
                result.incomplete_groups.push(label.to_string());
                warnings.push(Warning::UnresolvedSlot {
                    group: label.to_string(),
                    waiting_on,
                });
            }
        }
    }

    RoundResult::from_parts(result, warnings)
}

/// Winner of the finished match tagged `group`, if any.
fn slot_winner<'a>(matches: &'a [Match], group: &str) -> Option<&'a TeamId> {
    matches
        .iter()
        .filter(|m| m.match_group == group)
        .find_map(Match::winner)
}

fn fed_match(
    round: u32,
    label: &str,
    team_a: &TeamId,
    team_b: &TeamId,
    previous: &[Match],
) -> Match {
    // Carry the event forward from the feeder matches.
    let event_id = previous
        .iter()
        .find(|m| m.involves(team_a))
        .and_then(|m| m.event_id.clone());
    Match {
        round,
        match_group: label.to_string(),
        team_a_id: Some(team_a.clone()),
        team_b_id: Some(team_b.clone()),
        is_bo3: true,
        is_finished: false,
        winner_id: None,
        event_id,
    }
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
