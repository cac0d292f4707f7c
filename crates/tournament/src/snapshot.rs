//! Stage snapshots: the teams and matches of one stage, persisted as JSON

use pairing_core::{EventType, Match, Team};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TournamentError};

/// Everything the pairing engine needs to know about a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub event_type: EventType,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Snapshot {
    pub fn new(event_type: EventType, teams: Vec<Team>) -> Self {
        Self {
            event_type,
            teams,
            matches: Vec::new(),
        }
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the snapshot as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Highest stored round plus one
    pub fn next_round(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0) + 1
    }
}
