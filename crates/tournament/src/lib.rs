//! Tournament driver around the pairing engine
//!
//! This crate plays the part of the system that owns a stage:
//! - Persisting stage snapshots (teams and matches) as JSON
//! - Applying results and generating one round at a time per stage
//! - Simulating whole events with Elo-weighted outcomes
//! - Rendering rounds, standings and brackets as text
//!
//! # Usage
//!
//! ```bash
//! # Generate the next round for a stored stage
//! cargo run -p tournament -- pair stage.json --write
//!
//! # Simulate a 16-team Swiss stage followed by an 8-team bracket
//! cargo run -p tournament -- simulate --seed 7
//! ```

mod elo;
mod error;
mod report;
mod settings;
mod simulator;
mod snapshot;
mod stage;

pub use elo::*;
pub use error::*;
pub use report::*;
pub use settings::*;
pub use simulator::*;
pub use snapshot::*;
pub use stage::*;
