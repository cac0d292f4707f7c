//! Stage standings

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::tiebreak::compute_buchholz;
use crate::types::{Match, Team, TeamId, TeamStatus};

/// One row of a standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-based position
    pub rank: usize,
    pub team_id: TeamId,
    pub seed: u32,
    pub wins: u32,
    pub losses: u32,
    pub buchholz: i64,
    pub status: TeamStatus,
}

/// Rank every team: net score, then wins, then Buchholz, then seed.
pub fn standings(teams: &[Team], matches: &[Match]) -> Vec<Standing> {
    let stats = compute_buchholz(teams, matches);
    let mut rows: Vec<Standing> = teams
        .iter()
        .map(|team| Standing {
            rank: 0,
            team_id: team.id.clone(),
            seed: team.seed,
            wins: team.wins,
            losses: team.losses,
            buchholz: stats.get(&team.id).map_or(0, |record| record.buchholz),
            status: team.status,
        })
        .collect();

    rows.sort_by_key(|row| {
        (
            Reverse(i64::from(row.wins) - i64::from(row.losses)),
            Reverse(row.wins),
            Reverse(row.buchholz),
            row.seed,
        )
    });
    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = index + 1;
    }
    rows
}
