//! Non-fatal pairing diagnostics.
//!
//! Nothing in the pairing engine aborts. When a round cannot be produced the
//! ideal way, the best achievable round is still returned and the reason is
//! attached as a [`Warning`] inside a [`RoundResult`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TeamId;

/// Why a generated round deviates from a clean, complete pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    /// Rematch-free search was exhausted; a forced high-low pairing was used.
    #[error(
        "group {group}: no rematch-free pairing exists, forced high-low pairing repeats {} matchup(s)",
        .repeated.len()
    )]
    RematchFallback {
        group: String,
        repeated: Vec<(TeamId, TeamId)>,
    },

    /// A score group had an odd number of teams; one team was left unpaired.
    #[error("group {group}: odd team count, {unpaired} left unpaired")]
    OddGroup { group: String, unpaired: TeamId },

    /// Not enough teams to seed the bracket.
    #[error("bracket needs {required} seeded teams, found {found}")]
    InsufficientTeams { required: usize, found: usize },

    /// A bracket slot could not be filled because a feeder match has no winner yet.
    #[error("slot {group} waiting on {}", .waiting_on.join(", "))]
    UnresolvedSlot {
        group: String,
        waiting_on: Vec<String>,
    },

    /// The format has no round with this number.
    #[error("no round {round} in this format")]
    NoSuchRound { round: u32 },
}

/// Outcome of a round generation: always carries a value, optionally with
/// the warnings explaining why it is degraded.
#[must_use = "a round may carry warnings that the caller must surface"]
#[derive(Debug, Clone, PartialEq)]
pub enum RoundResult<T> {
    Ok(T),
    OkWithWarnings(T, Vec<Warning>),
}

impl<T> RoundResult<T> {
    /// Build from a value and whatever warnings were collected.
    pub fn from_parts(value: T, warnings: Vec<Warning>) -> Self {
        if warnings.is_empty() {
            RoundResult::Ok(value)
        } else {
            RoundResult::OkWithWarnings(value, warnings)
        }
    }

    pub fn value(&self) -> &T {
        match self {
            RoundResult::Ok(value) | RoundResult::OkWithWarnings(value, _) => value,
        }
    }

    pub fn warnings(&self) -> &[Warning] {
        match self {
            RoundResult::Ok(_) => &[],
            RoundResult::OkWithWarnings(_, warnings) => warnings,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, RoundResult::Ok(_))
    }

    pub fn into_parts(self) -> (T, Vec<Warning>) {
        match self {
            RoundResult::Ok(value) => (value, Vec::new()),
            RoundResult::OkWithWarnings(value, warnings) => (value, warnings),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RoundResult<U> {
        match self {
            RoundResult::Ok(value) => RoundResult::Ok(f(value)),
            RoundResult::OkWithWarnings(value, warnings) => {
                RoundResult::OkWithWarnings(f(value), warnings)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_without_warnings_is_clean() {
        let result = RoundResult::from_parts(3, Vec::new());
        assert!(result.is_clean());
        assert_eq!(result, RoundResult::Ok(3));
    }

    #[test]
    fn test_map_keeps_warnings() {
        let warning = Warning::NoSuchRound { round: 4 };
        let result = RoundResult::from_parts(2, vec![warning.clone()]).map(|n| n * 10);
        assert_eq!(result.into_parts(), (20, vec![warning]));
    }

    #[test]
    fn test_warning_serializes_with_kind_tag() {
        let warning = Warning::OddGroup {
            group: "1-1".to_string(),
            unpaired: TeamId::from("t7"),
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "oddGroup", "group": "1-1", "unpaired": "t7"}));
        assert_eq!(warning.to_string(), "group 1-1: odd team count, t7 left unpaired");
    }
}
