//! Pairing configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Knobs for the Swiss stage. Defaults describe the 16-team, 3-win/3-loss
/// format the engine targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PairingConfig {
    /// Wins needed to leave the stage as ADVANCED
    pub wins_to_advance: u32,
    /// Losses that leave the stage as ELIMINATED
    pub losses_to_eliminate: u32,
    /// First round whose in-group ordering uses Buchholz
    pub tiebreak_from_round: u32,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            wins_to_advance: 3,
            losses_to_eliminate: 3,
            tiebreak_from_round: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: u32,
        value: u32,
    },
}

impl PairingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("wins_to_advance", self.wins_to_advance, 1),
            ("losses_to_eliminate", self.losses_to_eliminate, 1),
            ("tiebreak_from_round", self.tiebreak_from_round, 1),
        ];
        for (field, value, min) in checks {
            if value < min {
                return Err(ConfigError::TooSmall { field, min, value });
            }
        }
        Ok(())
    }

    /// Whether a Swiss match whose A side holds this record decides
    /// promotion or elimination.
    pub fn is_decider(&self, wins: u32, losses: u32) -> bool {
        wins + 1 == self.wins_to_advance || losses + 1 == self.losses_to_eliminate
    }

    /// Whether Buchholz participates in group ordering for this round.
    pub fn uses_tiebreak(&self, round: u32) -> bool {
        round >= self.tiebreak_from_round
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
