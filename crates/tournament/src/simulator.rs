//! Simulated match results for driving stages end to end

use pairing_core::{EventType, Match, PairingConfig, Team, TeamId, Warning};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::elo::{EloTracker, SeriesScore};
use crate::error::Result;
use crate::settings::Settings;
use crate::snapshot::Snapshot;
use crate::stage::Stage;

/// Event id of the Swiss stage in simulated events
pub const SWISS_EVENT: &str = "swiss";
/// Event id of the playoff bracket in simulated events
pub const PLAYOFF_EVENT: &str = "playoffs";

/// Plays series between teams using Elo win probabilities
pub struct MatchSimulator<R: Rng> {
    rng: R,
    elo: EloTracker,
}

impl MatchSimulator<StdRng> {
    /// Reproducible simulator when `seed` is set, entropy-seeded otherwise
    pub fn seeded(seed: Option<u64>, elo: EloTracker) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, elo)
    }
}

impl<R: Rng> MatchSimulator<R> {
    pub fn new(rng: R, elo: EloTracker) -> Self {
        Self { rng, elo }
    }

    pub fn elo(&self) -> &EloTracker {
        &self.elo
    }

    /// Play one series and update ratings.
    ///
    /// Returns the winner and the map score from team A's side, or None when
    /// the match is missing a side.
    pub fn play_series(&mut self, m: &Match) -> Option<(TeamId, SeriesScore)> {
        let (a, b) = m.teams()?;
        let maps_to_win = if m.is_bo3 { 2 } else { 1 };
        let p_a = self.elo.expected_score(a, b);

        let mut score = SeriesScore::default();
        while score.a_maps < maps_to_win && score.b_maps < maps_to_win {
            if self.rng.gen_bool(p_a) {
                score.a_maps += 1;
            } else {
                score.b_maps += 1;
            }
        }

        self.elo.update_ratings(a, b, score);
        let winner = if score.a_maps == maps_to_win { a.clone() } else { b.clone() };
        Some((winner, score))
    }

    /// Generate and play rounds until the stage completes or `max_rounds`
    /// rounds have been generated. Returns every pairing warning raised.
    pub fn play_stage(&mut self, stage: &mut Stage, max_rounds: u32) -> Result<Vec<Warning>> {
        let mut warnings = Vec::new();
        let mut rounds = 0;

        while !stage.is_complete() && rounds < max_rounds {
            let (indices, round_warnings) = stage.generate_next_round()?.into_parts();
            warnings.extend(round_warnings);
            if indices.is_empty() {
                break;
            }

            for index in indices {
                let m = stage.matches()[index].clone();
                if let Some((winner, score)) = self.play_series(&m) {
                    info!(
                        round = m.round,
                        group = %m.match_group,
                        winner = %winner,
                        maps = %format!("{}-{}", score.a_maps, score.b_maps),
                        "series finished"
                    );
                    stage.record_result(index, &winner)?;
                }
            }
            rounds += 1;
        }

        Ok(warnings)
    }
}

/// Outcome of a simulated Swiss stage followed by a playoff bracket
#[derive(Debug, Clone)]
pub struct EventSummary {
    pub swiss: Stage,
    pub playoffs: Stage,
    pub champion: Option<TeamId>,
    pub warnings: Vec<Warning>,
    pub elo: EloTracker,
}

/// Seeded Swiss roster of `count` teams
pub fn swiss_roster(count: usize) -> Vec<Team> {
    (1..=count as u32)
        .map(|seed| Team::new(format!("team{seed:02}"), seed, SWISS_EVENT))
        .collect()
}

/// Run a full simulated event with the given settings
pub fn simulate_event(settings: &Settings) -> Result<EventSummary> {
    let sim = &settings.simulation;
    let pairing: &PairingConfig = &settings.pairing;
    sim.validate()?;

    let roster = swiss_roster(sim.teams);
    let mut simulator = MatchSimulator::seeded(sim.rng_seed, EloTracker::from_seeds(&roster));

    let mut swiss = Stage::new(Snapshot::new(EventType::Swiss, roster), pairing.clone());
    let mut warnings = simulator.play_stage(&mut swiss, sim.max_swiss_rounds)?;
    info!(rounds = swiss.snapshot().next_round() - 1, "swiss stage finished");

    let bracket = swiss.seed_playoffs(sim.bracket_size, PLAYOFF_EVENT);
    let mut playoffs = Stage::new(bracket, pairing.clone());
    warnings.extend(simulator.play_stage(&mut playoffs, 3)?);

    let champion = playoffs
        .matches()
        .iter()
        .find(|m| m.match_group == "F1")
        .and_then(Match::winner)
        .cloned();
    if let Some(champion) = &champion {
        info!(%champion, "playoffs finished");
    }

    Ok(EventSummary {
        swiss,
        playoffs,
        champion,
        warnings,
        elo: simulator.elo().clone(),
    })
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;
