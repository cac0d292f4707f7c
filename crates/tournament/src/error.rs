//! Errors raised around the pairing engine: file I/O, parsing and stage misuse

use std::path::PathBuf;

use pairing_core::{ConfigError, TeamId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid pairing configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("bracket_size must be {required}, got {size}")]
    BracketSize { size: usize, required: usize },

    #[error("no match at index {0}")]
    UnknownMatch(usize),

    #[error("match {0} is already finished")]
    AlreadyFinished(usize),

    #[error("{winner} did not play in match {index}")]
    NotAParticipant { index: usize, winner: TeamId },

    #[error("round {round} still has {unfinished} unfinished match(es)")]
    RoundInProgress { round: u32, unfinished: usize },
}

impl TournamentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TournamentError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TournamentError>;
