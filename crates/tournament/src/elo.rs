//! Elo ratings for simulated teams

use pairing_core::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rating of the top seed
pub const DEFAULT_ELO: f64 = 1500.0;

/// Rating gap between consecutive seeds
pub const SEED_STEP: f64 = 25.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Starting rating implied by a seed
pub fn rating_for_seed(seed: u32) -> f64 {
    DEFAULT_ELO - SEED_STEP * f64::from(seed.saturating_sub(1))
}

/// Map score of a series from team A's side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesScore {
    pub a_maps: u32,
    pub b_maps: u32,
}

impl SeriesScore {
    pub fn total_maps(&self) -> u32 {
        self.a_maps + self.b_maps
    }

    /// Share of maps won by team A (0.5 for an empty series)
    pub fn score(&self) -> f64 {
        let total = self.total_maps() as f64;
        if total == 0.0 {
            return 0.5;
        }
        self.a_maps as f64 / total
    }
}

/// Record of a single series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub score: SeriesScore,
    pub elo_change: f64,
}

/// Tracks team strength across a simulated event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    pub ratings: HashMap<TeamId, f64>,
    pub maps_played: HashMap<TeamId, u32>,
    pub history: Vec<SeriesRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed-based ratings for a roster
    pub fn from_seeds<'a>(teams: impl IntoIterator<Item = &'a pairing_core::Team>) -> Self {
        let mut tracker = Self::new();
        for team in teams {
            tracker.ratings.insert(team.id.clone(), rating_for_seed(team.seed));
        }
        tracker
    }

    pub fn rating(&self, team: &TeamId) -> f64 {
        self.ratings.get(team).copied().unwrap_or(DEFAULT_ELO)
    }

    /// Expected score of `a` against `b`
    pub fn expected_score(&self, a: &TeamId, b: &TeamId) -> f64 {
        let ra = self.rating(a);
        let rb = self.rating(b);
        1.0 / (1.0 + 10.0_f64.powf((rb - ra) / 400.0))
    }

    /// Update both ratings after a series
    pub fn update_ratings(&mut self, a: &TeamId, b: &TeamId, score: SeriesScore) {
        let expected = self.expected_score(a, b);
        let maps = score.total_maps() as f64;
        let elo_change = K_FACTOR * maps * (score.score() - expected);

        let ra = self.rating(a);
        let rb = self.rating(b);
        self.ratings.insert(a.clone(), ra + elo_change);
        self.ratings.insert(b.clone(), rb - elo_change);

        *self.maps_played.entry(a.clone()).or_insert(0) += score.total_maps();
        *self.maps_played.entry(b.clone()).or_insert(0) += score.total_maps();

        self.history.push(SeriesRecord {
            team_a: a.clone(),
            team_b: b.clone(),
            score,
            elo_change,
        });
    }

    /// Teams sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(TeamId, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(team, &rating)| {
                let maps = self.maps_played.get(team).copied().unwrap_or(0);
                (team.clone(), rating, maps)
            })
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
