//! Swiss-system pairing
//!
//! Each score group is paired on its own:
//! - Round 1 splits the seeded group in half (1v9, 2v10, ... for 16 teams).
//! - Later rounds run a backtracking search that pairs the highest-ranked
//!   remaining team with the lowest-ranked team it has not yet faced.
//! - When no rematch-free matching exists the group is force-paired high-low
//!   and a [`Warning::RematchFallback`] is returned with the round.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::config::PairingConfig;
use crate::diagnostics::{RoundResult, Warning};
use crate::score_groups::{build_groups, ScoreGroup};
use crate::tiebreak::{compute_buchholz, TiebreakTable};
use crate::types::{Match, Team, TeamId};

/// Index pair into a ranked group; the first index is the A side.
type RankPair = (usize, usize);

/// Matches for one Swiss round plus the tiebreak table they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SwissRound {
    pub new_matches: Vec<Match>,
    pub updated_stats: TiebreakTable,
}

/// Pair the next Swiss round with the default 3-win/3-loss configuration.
pub fn pair_swiss_round(
    teams: &[Team],
    previous_matches: &[Match],
    next_round: u32,
) -> RoundResult<SwissRound> {
    pair_swiss_round_with(teams, previous_matches, next_round, &PairingConfig::default())
}

/// Pair the next Swiss round.
///
/// Only ALIVE teams are paired. Inputs are never mutated; the returned matches
/// are unfinished and unpersisted.
pub fn pair_swiss_round_with(
    teams: &[Team],
    previous_matches: &[Match],
    next_round: u32,
    config: &PairingConfig,
) -> RoundResult<SwissRound> {
    let stats = compute_buchholz(teams, previous_matches);
    let mut new_matches = Vec::new();
    let mut warnings = Vec::new();

    for group in build_groups(teams) {
        let ranked = rank_group(&group, &stats, next_round, config);
        let pairs = if next_round <= 1 {
            split_seed_pairs(ranked.len())
        } else {
            let has_faced = |a: usize, b: usize| {
                stats
                    .get(&ranked[a].id)
                    .is_some_and(|record| record.has_faced(&ranked[b].id))
            };
            // An odd group never has a complete matching
            let found = if ranked.len() % 2 == 0 {
                let pool: Vec<usize> = (0..ranked.len()).collect();
                find_rematch_free(&pool, &has_faced)
            } else {
                None
            };
            match found {
                Some(pairs) => pairs,
                None => {
                    let pairs = high_low_pairs(ranked.len());
                    let repeated: Vec<(TeamId, TeamId)> = pairs
                        .iter()
                        .filter(|&&(a, b)| has_faced(a, b))
                        .map(|&(a, b)| (ranked[a].id.clone(), ranked[b].id.clone()))
                        .collect();
                    if ranked.len() % 2 == 0 || !repeated.is_empty() {
                        warn!(
                            group = %group.key,
                            repeated = repeated.len(),
                            "rematch-free pairing exhausted, forcing high-low"
                        );
                        warnings.push(Warning::RematchFallback {
                            group: group.key.clone(),
                            repeated,
                        });
                    }
                    pairs
                }
            }
        };

        if let Some(unpaired) = unpaired_rank(ranked.len(), &pairs) {
            warn!(group = %group.key, team = %ranked[unpaired].id, "odd score group");
            warnings.push(Warning::OddGroup {
                group: group.key.clone(),
                unpaired: ranked[unpaired].id.clone(),
            });
        }

        debug!(group = %group.key, teams = ranked.len(), pairs = pairs.len(), "paired score group");
        new_matches.extend(
            pairs
                .into_iter()
                .map(|(a, b)| swiss_match(next_round, &group.key, ranked[a], ranked[b], config)),
        );
    }

    RoundResult::from_parts(
        SwissRound {
            new_matches,
            updated_stats: stats,
        },
        warnings,
    )
}

/// Order a group best-first. Buchholz (descending) leads once it is
/// meaningful; seed (ascending) decides everything else.
fn rank_group<'a>(
    group: &ScoreGroup<'a>,
    stats: &TiebreakTable,
    round: u32,
    config: &PairingConfig,
) -> Vec<&'a Team> {
    let buchholz = |team: &Team| stats.get(&team.id).map_or(0, |record| record.buchholz);
    let mut ranked = group.teams.clone();
    if config.uses_tiebreak(round) {
        ranked.sort_by(|a, b| match buchholz(b).cmp(&buchholz(a)) {
            Ordering::Equal => a.seed.cmp(&b.seed),
            other => other,
        });
    } else {
        ranked.sort_by_key(|team| team.seed);
    }
    ranked
}

/// Position `i` against `i + n/2`.
fn split_seed_pairs(count: usize) -> Vec<RankPair> {
    let half = count / 2;
    (0..half).map(|i| (i, i + half)).collect()
}

/// Position `i` against `count - 1 - i`, rematches allowed.
fn high_low_pairs(count: usize) -> Vec<RankPair> {
    (0..count / 2).map(|i| (i, count - 1 - i)).collect()
}

/// Backtracking search for a complete matching with no repeated opponents.
///
/// The head of `pool` is paired with candidates from the tail upward; the
/// first candidate whose remainder can also be fully matched wins.
fn find_rematch_free(
    pool: &[usize],
    has_faced: &impl Fn(usize, usize) -> bool,
) -> Option<Vec<RankPair>> {
    let Some((&high, rest)) = pool.split_first() else {
        return Some(Vec::new());
    };

    for (pos, &candidate) in rest.iter().enumerate().rev() {
        if has_faced(high, candidate) {
            continue;
        }
        let remainder: Vec<usize> = rest
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != pos)
            .map(|(_, &rank)| rank)
            .collect();
        if let Some(mut pairs) = find_rematch_free(&remainder, has_faced) {
            pairs.insert(0, (high, candidate));
            return Some(pairs);
        }
    }

    None
}

fn unpaired_rank(count: usize, pairs: &[RankPair]) -> Option<usize> {
    (0..count).find(|rank| !pairs.iter().any(|&(a, b)| a == *rank || b == *rank))
}

fn swiss_match(
    round: u32,
    group: &str,
    team_a: &Team,
    team_b: &Team,
    config: &PairingConfig,
) -> Match {
    // Decider status is read from the A side only.
    let is_bo3 = config.is_decider(team_a.wins, team_a.losses);
    Match::pairing(round, group, team_a, team_b, is_bo3)
}

#[cfg(test)]
#[path = "swiss_tests.rs"]
mod swiss_tests;
