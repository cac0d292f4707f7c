//! Tournament CLI
//!
//! Generate rounds for stored stages, inspect standings, or simulate events.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pairing_core::{generate_round, GeneratedRound, Match, TiebreakTable, Warning};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tournament::{
    event_report, round_report, simulate_event, standings_report, Settings, Snapshot, Stage,
    DEFAULT_SETTINGS_FILE,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "Esports round generation and simulation")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Log pairing decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the next round of a stage snapshot
    Pair {
        /// Stage snapshot (JSON)
        snapshot: PathBuf,
        /// Round to generate (defaults to the round after the last stored one)
        #[arg(long)]
        round: Option<u32>,
        /// Append the new matches to the snapshot file
        #[arg(long, conflicts_with = "round")]
        write: bool,
        /// Write the generated round as JSON
        #[arg(long, conflicts_with = "write")]
        out: Option<PathBuf>,
    },
    /// Print standings with Buchholz for a stage snapshot
    Standings {
        snapshot: PathBuf,
    },
    /// Simulate a Swiss stage followed by a playoff bracket
    Simulate {
        /// Teams entering the Swiss stage
        #[arg(short, long)]
        teams: Option<usize>,
        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// JSON shape of a generated round
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundOutput<'a> {
    round: u32,
    new_matches: &'a [Match],
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_stats: Option<&'a TiebreakTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    incomplete_groups: Option<&'a [String]>,
    warnings: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_round(
    path: &Path,
    round: u32,
    generated: &GeneratedRound,
    warnings: &[Warning],
) -> Result<()> {
    let (updated_stats, incomplete_groups) = match generated {
        GeneratedRound::Swiss(swiss) => (Some(&swiss.updated_stats), None),
        GeneratedRound::Bracket(bracket) => (None, Some(bracket.incomplete_groups.as_slice())),
    };
    let output = RoundOutput {
        round,
        new_matches: generated.new_matches(),
        updated_stats,
        incomplete_groups,
        warnings: warnings.iter().map(ToString::to_string).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn run_pair(
    settings: &Settings,
    path: &Path,
    round: Option<u32>,
    write: bool,
    out: Option<&Path>,
) -> Result<()> {
    let snapshot = Snapshot::load(path)?;

    if write {
        let mut stage = Stage::new(snapshot, settings.pairing.clone());
        let round = stage.snapshot().next_round();
        let (indices, warnings) = stage.generate_next_round()?.into_parts();
        let stored = &stage.matches()[indices.first().copied().unwrap_or(stage.matches().len())..];
        println!("{}", round_report(round, stored, &warnings));
        stage.snapshot().save(path)?;
        println!("Stored {} match(es) in {}", indices.len(), path.display());
        return Ok(());
    }

    let round = round.unwrap_or_else(|| snapshot.next_round());
    let (generated, warnings) = generate_round(
        snapshot.event_type,
        round,
        &snapshot.teams,
        &snapshot.matches,
        &settings.pairing,
    )
    .into_parts();
    println!("{}", round_report(round, generated.new_matches(), &warnings));

    if let Some(out) = out {
        write_round(out, round, &generated, &warnings)?;
        println!("Round written to {}", out.display());
    }
    Ok(())
}

fn run_standings(settings: &Settings, path: &Path) -> Result<()> {
    let stage = Stage::new(Snapshot::load(path)?, settings.pairing.clone());
    println!("{}", standings_report(&stage.standings()));
    Ok(())
}

fn run_simulate(mut settings: Settings, teams: Option<usize>, seed: Option<u64>) -> Result<()> {
    if let Some(teams) = teams {
        settings.simulation.teams = teams;
    }
    if seed.is_some() {
        settings.simulation.rng_seed = seed;
    }

    println!(
        "=== Simulating {} teams (first to {} wins / {} losses) ===\n",
        settings.simulation.teams,
        settings.pairing.wins_to_advance,
        settings.pairing.losses_to_eliminate
    );
    let summary = simulate_event(&settings)?;
    println!("{}", event_report(&summary));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(&cli.config)
        .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;

    match cli.command {
        Command::Pair {
            snapshot,
            round,
            write,
            out,
        } => run_pair(&settings, &snapshot, round, write, out.as_deref()),
        Command::Standings { snapshot } => run_standings(&settings, &snapshot),
        Command::Simulate { teams, seed } => run_simulate(settings, teams, seed),
    }
}
