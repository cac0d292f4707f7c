//! Swiss score groups

use std::cmp::Reverse;

use crate::types::Team;

/// Teams sharing one win-loss record.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGroup<'a> {
    /// `"{wins}-{losses}"`
    pub key: String,
    pub net: i64,
    pub teams: Vec<&'a Team>,
}

/// Partition the ALIVE teams by record, strongest group first.
///
/// Groups with equal net score keep the order in which their first team
/// appears in `teams`; teams inside a group keep input order.
pub fn build_groups(teams: &[Team]) -> Vec<ScoreGroup<'_>> {
    let mut groups: Vec<ScoreGroup<'_>> = Vec::new();

    for team in teams.iter().filter(|team| team.is_alive()) {
        let key = team.record_key();
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.teams.push(team),
            None => groups.push(ScoreGroup {
                key,
                net: team.net(),
                teams: vec![team],
            }),
        }
    }

    groups.sort_by_key(|group| Reverse(group.net));
    groups
}

#[cfg(test)]
#[path = "score_groups_tests.rs"]
mod score_groups_tests;
