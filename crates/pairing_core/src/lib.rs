//! Pairing engine for esports tournament stages
//!
//! Given a roster of teams and the matches already generated for a stage,
//! this crate produces the matches of the next round:
//! - Swiss stages pair teams within identical win-loss groups, avoiding
//!   rematches through a backtracking search and ordering groups by Buchholz.
//! - Single-elimination stages seed eight teams into fixed quarterfinal slots
//!   and advance finished winners into semifinals and the final.
//!
//! Everything here is pure: inputs are snapshots, outputs are new, unpersisted
//! match records. Callers must serialise round generation per stage.
//!
//! # Usage
//!
//! ```
//! use pairing_core::{generate_round, EventType, PairingConfig, Team};
//!
//! let teams: Vec<Team> = (1..=16)
//!     .map(|seed| Team::new(format!("team{seed}"), seed, "major"))
//!     .collect();
//! let round = generate_round(EventType::Swiss, 1, &teams, &[], &PairingConfig::default());
//! assert_eq!(round.value().new_matches().len(), 8);
//! ```

pub mod bracket;
pub mod config;
pub mod diagnostics;
pub mod round;
pub mod score_groups;
pub mod standings;
pub mod swiss;
pub mod tiebreak;
pub mod types;

pub use bracket::{pair_bracket_round, BracketRound, BRACKET_SIZE};
pub use config::{ConfigError, PairingConfig};
pub use diagnostics::{RoundResult, Warning};
pub use round::{generate_round, GeneratedRound};
pub use score_groups::{build_groups, ScoreGroup};
pub use standings::{standings, Standing};
pub use swiss::{pair_swiss_round, pair_swiss_round_with, SwissRound};
pub use tiebreak::{compute_buchholz, TiebreakTable};
pub use types::*;
