//! Stage driver
//!
//! A [`Stage`] is the single writer for one stage's teams and matches. Round
//! generation goes through `&mut self` and is refused while results are still
//! outstanding, so two rounds can never be derived from the same snapshot.

use pairing_core::{
    generate_round, standings, EventType, Match, PairingConfig, RoundResult, Standing, Team,
    TeamId, TeamStatus,
};
use tracing::{debug, info};

use crate::error::{Result, TournamentError};
use crate::snapshot::Snapshot;

/// Label of the bracket final
const FINAL_GROUP: &str = "F1";

#[derive(Debug, Clone)]
pub struct Stage {
    snapshot: Snapshot,
    config: PairingConfig,
}

impl Stage {
    pub fn new(snapshot: Snapshot, config: PairingConfig) -> Self {
        Self { snapshot, config }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    pub fn teams(&self) -> &[Team] {
        &self.snapshot.teams
    }

    pub fn matches(&self) -> &[Match] {
        &self.snapshot.matches
    }

    /// Matches still waiting for a result, with their indices
    pub fn pending(&self) -> impl Iterator<Item = (usize, &Match)> + '_ {
        self.snapshot.matches.iter().enumerate().filter(|(_, m)| !m.is_finished)
    }

    /// Generate and store the next round.
    ///
    /// Returns the indices of the stored matches together with any pairing
    /// warnings.
    pub fn generate_next_round(&mut self) -> Result<RoundResult<Vec<usize>>> {
        let unfinished = self.pending().count();
        if unfinished > 0 {
            return Err(TournamentError::RoundInProgress {
                round: self.snapshot.next_round() - 1,
                unfinished,
            });
        }

        let round = self.snapshot.next_round();
        let result = generate_round(
            self.snapshot.event_type,
            round,
            &self.snapshot.teams,
            &self.snapshot.matches,
            &self.config,
        );

        let start = self.snapshot.matches.len();
        let result = result.map(|generated| {
            self.snapshot.matches.extend(generated.into_matches());
            (start..self.snapshot.matches.len()).collect()
        });
        debug!(round, stored = self.snapshot.matches.len() - start, "stored round");
        Ok(result)
    }

    /// Record the winner of a stored match and update both teams.
    pub fn record_result(&mut self, index: usize, winner: &TeamId) -> Result<()> {
        let m = self
            .snapshot
            .matches
            .get_mut(index)
            .ok_or(TournamentError::UnknownMatch(index))?;
        if m.is_finished {
            return Err(TournamentError::AlreadyFinished(index));
        }
        let loser = match m.teams() {
            Some((a, b)) if a == winner => b.clone(),
            Some((a, b)) if b == winner => a.clone(),
            _ => {
                return Err(TournamentError::NotAParticipant {
                    index,
                    winner: winner.clone(),
                })
            }
        };
        m.is_finished = true;
        m.winner_id = Some(winner.clone());
        let is_final = m.match_group == FINAL_GROUP;

        let event_type = self.snapshot.event_type;
        for team in &mut self.snapshot.teams {
            if &team.id == winner {
                team.wins += 1;
                match event_type {
                    EventType::Swiss if team.wins >= self.config.wins_to_advance => {
                        team.status = TeamStatus::Advanced;
                    }
                    EventType::SingleElim if is_final => team.status = TeamStatus::Advanced,
                    _ => {}
                }
            } else if team.id == loser {
                team.losses += 1;
                match event_type {
                    EventType::Swiss if team.losses >= self.config.losses_to_eliminate => {
                        team.status = TeamStatus::Eliminated;
                    }
                    EventType::SingleElim => team.status = TeamStatus::Eliminated,
                    _ => {}
                }
            }
        }

        info!(match_index = index, %winner, %loser, "recorded result");
        Ok(())
    }

    /// Whether the stage has nothing left to play
    pub fn is_complete(&self) -> bool {
        match self.snapshot.event_type {
            EventType::Swiss => !self.snapshot.teams.iter().any(Team::is_alive),
            EventType::SingleElim => self
                .snapshot
                .matches
                .iter()
                .any(|m| m.match_group == FINAL_GROUP && m.winner().is_some()),
        }
    }

    pub fn standings(&self) -> Vec<Standing> {
        standings(&self.snapshot.teams, &self.snapshot.matches)
    }

    /// Seed a playoff bracket from the ADVANCED teams, best standing first.
    pub fn seed_playoffs(&self, bracket_size: usize, event_id: &str) -> Snapshot {
        let teams = self
            .standings()
            .into_iter()
            .filter(|row| row.status == TeamStatus::Advanced)
            .take(bracket_size)
            .zip(1..)
            .map(|(row, seed)| Team::new(row.team_id.0, seed, event_id))
            .collect();
        Snapshot::new(EventType::SingleElim, teams)
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod stage_tests;
