//! Text reports for rounds, standings and simulated events

use pairing_core::{Match, Standing, TeamStatus, Warning};
use std::fmt::Write;

use crate::simulator::EventSummary;

fn status_label(status: TeamStatus) -> &'static str {
    match status {
        TeamStatus::Alive => "alive",
        TeamStatus::Eliminated => "out",
        TeamStatus::Advanced => "through",
    }
}

fn side(id: Option<&pairing_core::TeamId>) -> &str {
    id.map_or("TBD", |id| id.as_str())
}

/// List the matches of one round, grouped as generated
pub fn round_report(round: u32, matches: &[Match], warnings: &[Warning]) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "=== Round {} ===", round);
    let _ = writeln!(report, "{:<6} {:<20} vs {:<20} {:>4}", "Group", "Team A", "Team B", "Fmt");
    report.push_str(&"-".repeat(56));
    report.push('\n');

    for m in matches {
        let _ = writeln!(
            report,
            "{:<6} {:<20} vs {:<20} {:>4}",
            m.match_group,
            side(m.team_a_id.as_ref()),
            side(m.team_b_id.as_ref()),
            if m.is_bo3 { "BO3" } else { "BO1" }
        );
    }

    if !warnings.is_empty() {
        report.push_str("\nWarnings:\n");
        for warning in warnings {
            let _ = writeln!(report, "  ! {}", warning);
        }
    }

    report
}

/// Standings table with Buchholz
pub fn standings_report(rows: &[Standing]) -> String {
    let mut report = String::new();
    let _ = writeln!(
        report,
        "{:>4} {:<20} {:>4} {:>5} {:>9} {:>8}",
        "#", "Team", "Seed", "W-L", "Buchholz", "Status"
    );
    report.push_str(&"-".repeat(55));
    report.push('\n');

    for row in rows {
        let _ = writeln!(
            report,
            "{:>4} {:<20} {:>4} {:>5} {:>9} {:>8}",
            row.rank,
            row.team_id.as_str(),
            row.seed,
            format!("{}-{}", row.wins, row.losses),
            row.buchholz,
            status_label(row.status)
        );
    }

    report
}

/// Finished bracket matches by slot
pub fn bracket_report(matches: &[Match]) -> String {
    let mut report = String::new();
    for m in matches {
        let result = match m.winner() {
            Some(winner) => format!("-> {}", winner),
            None => "(pending)".to_string(),
        };
        let _ = writeln!(
            report,
            "{:<3} {:<20} vs {:<20} {}",
            m.match_group,
            side(m.team_a_id.as_ref()),
            side(m.team_b_id.as_ref()),
            result
        );
    }
    report
}

/// Full summary of a simulated event
pub fn event_report(summary: &EventSummary) -> String {
    let mut report = String::new();
    report.push_str("=== Swiss Stage ===\n\n");
    report.push_str(&standings_report(&summary.swiss.standings()));

    report.push_str("\n=== Playoffs ===\n\n");
    report.push_str(&bracket_report(summary.playoffs.matches()));

    match &summary.champion {
        Some(champion) => {
            let _ = writeln!(report, "\nChampion: {}", champion);
        }
        None => report.push_str("\nNo champion: playoffs could not be completed\n"),
    }

    if !summary.warnings.is_empty() {
        report.push_str("\nPairing warnings:\n");
        for warning in &summary.warnings {
            let _ = writeln!(report, "  ! {}", warning);
        }
    }

    report.push_str("\n=== Final Ratings ===\n");
    let _ = writeln!(report, "{:<20} {:>8} {:>6}", "Team", "Elo", "Maps");
    for (team, rating, maps) in summary.elo.leaderboard() {
        let _ = writeln!(report, "{:<20} {:>8.1} {:>6}", team.as_str(), rating, maps);
    }

    report
}
