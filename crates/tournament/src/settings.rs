//! Tournament settings loaded from TOML
//!
//! ```toml
//! [pairing]
//! wins_to_advance = 3
//! losses_to_eliminate = 3
//!
//! [simulation]
//! teams = 16
//! rng_seed = 7
//! ```

use pairing_core::{PairingConfig, BRACKET_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TournamentError};

/// Default settings file, read from the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "tournament.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pairing: PairingConfig,
    pub simulation: SimulationConfig,
}

/// Parameters of a simulated Swiss-into-playoffs event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Teams entering the Swiss stage
    pub teams: usize,
    /// Teams carried into the playoff bracket; the bracket takes exactly eight
    pub bracket_size: usize,
    /// Fixed RNG seed for reproducible runs (None = random)
    pub rng_seed: Option<u64>,
    /// Stop the Swiss stage after this many rounds even if teams remain ALIVE
    pub max_swiss_rounds: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            teams: 16,
            bracket_size: BRACKET_SIZE,
            rng_seed: None,
            max_swiss_rounds: 10,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bracket_size != BRACKET_SIZE {
            return Err(TournamentError::BracketSize {
                size: self.bracket_size,
                required: BRACKET_SIZE,
            });
        }
        Ok(())
    }
}

impl Settings {
    /// Parse settings and validate both sections.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.pairing.validate()?;
        settings.simulation.validate()?;
        Ok(settings)
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(TournamentError::io(path, e)),
        }
    }
}
