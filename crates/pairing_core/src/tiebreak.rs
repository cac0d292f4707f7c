//! Buchholz tiebreak calculation

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Match, Team, TeamId, TiebreakRecord};

/// Tiebreak records keyed by team.
pub type TiebreakTable = BTreeMap<TeamId, TiebreakRecord>;

/// Compute a [`TiebreakRecord`] for every team.
///
/// An opponent relationship exists as soon as two teams share a match, finished
/// or not, so a pairing that has been generated but not yet played still blocks
/// a rematch. Buchholz sums `wins - losses` over every distinct opponent using
/// the opponent's current record. Opponents missing from `teams` contribute 0.
pub fn compute_buchholz(teams: &[Team], matches: &[Match]) -> TiebreakTable {
    let mut table: TiebreakTable = teams
        .iter()
        .map(|team| {
            (
                team.id.clone(),
                TiebreakRecord {
                    wins: team.wins,
                    losses: team.losses,
                    seed: team.seed,
                    buchholz: 0,
                    opponents: BTreeSet::new(),
                },
            )
        })
        .collect();

    for (a, b) in matches.iter().filter_map(Match::teams) {
        if let Some(record) = table.get_mut(a) {
            record.opponents.insert(b.clone());
        }
        if let Some(record) = table.get_mut(b) {
            record.opponents.insert(a.clone());
        }
    }

    let net: BTreeMap<&TeamId, i64> = teams.iter().map(|team| (&team.id, team.net())).collect();
    for record in table.values_mut() {
        record.buchholz = record
            .opponents
            .iter()
            .filter_map(|opponent| net.get(opponent))
            .sum();
    }

    table
}

#[cfg(test)]
#[path = "tiebreak_tests.rs"]
mod tiebreak_tests;
