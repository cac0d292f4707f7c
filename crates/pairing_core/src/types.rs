//! Entity shapes shared with the external tournament system.
//!
//! Field names serialize in camelCase so persisted snapshots line up with the
//! records the surrounding platform stores (`teamAId`, `matchGroup`, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque team identifier, unique within an event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Participation state of a team within its stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamStatus {
    Alive,
    Eliminated,
    Advanced,
}

/// Competition format of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Swiss,
    SingleElim,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Swiss => f.write_str("SWISS"),
            EventType::SingleElim => f.write_str("SINGLE_ELIM"),
        }
    }
}

/// A team as handed to the pairing engine. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    /// 1 = strongest; fixed for the life of the stage
    pub seed: u32,
    pub wins: u32,
    pub losses: u32,
    pub status: TeamStatus,
    pub event_id: String,
}

impl Team {
    /// Fresh, ALIVE team with an empty record.
    pub fn new(id: impl Into<String>, seed: u32, event_id: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(id),
            seed,
            wins: 0,
            losses: 0,
            status: TeamStatus::Alive,
            event_id: event_id.into(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == TeamStatus::Alive
    }

    /// Net score used to order Swiss groups
    pub fn net(&self) -> i64 {
        i64::from(self.wins) - i64::from(self.losses)
    }

    /// Score group key, the literal `"{wins}-{losses}"`
    pub fn record_key(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

/// A match record, either from history or freshly generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub round: u32,
    /// Bracket slot (`Q1`, `S2`, `F1`) or Swiss bucket (`2-0`)
    pub match_group: String,
    #[serde(rename = "teamAId")]
    pub team_a_id: Option<TeamId>,
    #[serde(rename = "teamBId")]
    pub team_b_id: Option<TeamId>,
    pub is_bo3: bool,
    pub is_finished: bool,
    #[serde(default)]
    pub winner_id: Option<TeamId>,
    #[serde(default)]
    pub event_id: Option<String>,
}

impl Match {
    /// A new, unplayed pairing of `team_a` against `team_b`.
    pub fn pairing(
        round: u32,
        match_group: impl Into<String>,
        team_a: &Team,
        team_b: &Team,
        is_bo3: bool,
    ) -> Self {
        Self {
            round,
            match_group: match_group.into(),
            team_a_id: Some(team_a.id.clone()),
            team_b_id: Some(team_b.id.clone()),
            is_bo3,
            is_finished: false,
            winner_id: None,
            event_id: Some(team_a.event_id.clone()),
        }
    }

    /// Both sides, if the match has both team references.
    pub fn teams(&self) -> Option<(&TeamId, &TeamId)> {
        match (&self.team_a_id, &self.team_b_id) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        self.team_a_id.as_ref() == Some(team) || self.team_b_id.as_ref() == Some(team)
    }

    /// Winner, only once the match is finished
    pub fn winner(&self) -> Option<&TeamId> {
        if self.is_finished {
            self.winner_id.as_ref()
        } else {
            None
        }
    }

    /// The side that did not win, once the match is finished.
    pub fn loser(&self) -> Option<&TeamId> {
        let winner = self.winner()?;
        let (a, b) = self.teams()?;
        if a == winner {
            Some(b)
        } else if b == winner {
            Some(a)
        } else {
            None
        }
    }
}

/// Per-team tiebreak snapshot derived from match history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiebreakRecord {
    pub wins: u32,
    pub losses: u32,
    pub seed: u32,
    pub buchholz: i64,
    /// Every team previously paired against this one in the stage
    pub opponents: BTreeSet<TeamId>,
}

impl TiebreakRecord {
    pub fn has_faced(&self, other: &TeamId) -> bool {
        self.opponents.contains(other)
    }
}
