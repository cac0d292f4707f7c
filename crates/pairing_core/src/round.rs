//! Format dispatch for round generation

use tracing::{info, warn};

use crate::bracket::{pair_bracket_round, BracketRound};
use crate::config::PairingConfig;
use crate::diagnostics::{RoundResult, Warning};
use crate::swiss::{pair_swiss_round_with, SwissRound};
use crate::types::{EventType, Match, Team};

/// A generated round of either format.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedRound {
    Swiss(SwissRound),
    Bracket(BracketRound),
}

impl GeneratedRound {
    pub fn new_matches(&self) -> &[Match] {
        match self {
            GeneratedRound::Swiss(round) => &round.new_matches,
            GeneratedRound::Bracket(round) => &round.new_matches,
        }
    }

    pub fn into_matches(self) -> Vec<Match> {
        match self {
            GeneratedRound::Swiss(round) => round.new_matches,
            GeneratedRound::Bracket(round) => round.new_matches,
        }
    }
}

/// Generate `round` for a stage of the given format.
pub fn generate_round(
    event_type: EventType,
    round: u32,
    teams: &[Team],
    previous_matches: &[Match],
    config: &PairingConfig,
) -> RoundResult<GeneratedRound> {
    if round == 0 {
        warn!(%event_type, "rounds are numbered from 1");
        let empty = match event_type {
            EventType::Swiss => GeneratedRound::Swiss(SwissRound {
                new_matches: Vec::new(),
                updated_stats: Default::default(),
            }),
            EventType::SingleElim => GeneratedRound::Bracket(BracketRound::default()),
        };
        return RoundResult::OkWithWarnings(empty, vec![Warning::NoSuchRound { round }]);
    }

    let result = match event_type {
        EventType::Swiss => pair_swiss_round_with(teams, previous_matches, round, config)
            .map(GeneratedRound::Swiss),
        EventType::SingleElim => {
            pair_bracket_round(teams, previous_matches, round).map(GeneratedRound::Bracket)
        }
    };

    info!(
        %event_type,
        round,
        matches = result.value().new_matches().len(),
        warnings = result.warnings().len(),
        "generated round"
    );
    result
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
