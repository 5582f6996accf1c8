use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::matching::{default_eligible_statuses, rank, RankedSuspect};
use matcher::models::{AgeRange, MatchCriteria, Suspect};
use matcher::seed;

#[derive(Parser, Debug)]
#[command(
    name = "matcher",
    about = "Rank suspects from the investigation tracker against match criteria",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run suspect matching against the roster
    Match(MatchArgs),
    /// List the suspect roster
    Roster(RosterArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// M.O. pattern to search for (repeatable)
    #[arg(long = "mo", value_name = "PATTERN", required = true)]
    mo_patterns: Vec<String>,

    /// Free-text location filter (case-insensitive substring)
    #[arg(long)]
    location: Option<String>,

    /// Lower age bound (accepted, not scored)
    #[arg(long)]
    age_min: Option<u32>,

    /// Upper age bound (accepted, not scored)
    #[arg(long)]
    age_max: Option<u32>,

    /// Crime category filter (accepted, not scored)
    #[arg(long)]
    category: Option<String>,

    /// Roster JSON file; falls back to MATCHER_ROSTER, then the embedded demo roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Maximum matches to display; falls back to MATCHER_DISPLAY_LIMIT (default 5)
    #[arg(long)]
    limit: Option<usize>,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RosterArgs {
    /// Roster JSON file; falls back to MATCHER_ROSTER, then the embedded demo roster
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Match(args) => run_match(args, &config),
        Command::Roster(args) => run_roster(args, &config),
    }
}

fn run_match(args: MatchArgs, config: &Config) -> Result<()> {
    let roster = load_roster(args.roster.as_ref().or(config.roster_path.as_ref()))?;
    let criteria = build_criteria(&args);
    let limit = args.limit.unwrap_or(config.display_limit);

    info!(
        patterns = criteria.mo_patterns.len(),
        roster = roster.len(),
        "Running suspect matching"
    );

    let ranked = rank(&roster, &criteria, &default_eligible_statuses())?;
    // Truncation is a display concern — the pipeline returns every match.
    let shown: Vec<&RankedSuspect> = ranked.iter().take(limit).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No matches among eligible suspects.");
        return Ok(());
    }

    println!(
        "Top {} of {} match(es) for: {}",
        shown.len(),
        ranked.len(),
        criteria.mo_patterns.join(", ")
    );
    for (position, entry) in shown.iter().enumerate() {
        let b = &entry.result.breakdown;
        println!(
            "\n#{}  {} ({}) — {}/100",
            position + 1,
            entry.suspect.name,
            entry.suspect.id,
            entry.result.score
        );
        println!(
            "    M.O. {} | Location {} | History {} | Risk {}",
            b.mo_pattern, b.location, b.criminal_history, b.risk_profile
        );
        for line in &entry.result.reasoning {
            println!("    - {line}");
        }
    }

    Ok(())
}

fn run_roster(args: RosterArgs, config: &Config) -> Result<()> {
    let roster = load_roster(args.roster.as_ref().or(config.roster_path.as_ref()))?;

    println!("{} suspect(s) on roster:", roster.len());
    for suspect in &roster {
        println!(
            "  {}  {:<20} {:<18} {:<14} {}",
            suspect.id,
            suspect.name,
            suspect.status.label(),
            suspect.risk_level.label(),
            suspect.last_known_city.as_deref().unwrap_or("—"),
        );
    }

    Ok(())
}

fn load_roster(path: Option<&PathBuf>) -> Result<Vec<Suspect>> {
    let roster = match path {
        Some(path) => seed::load_roster(path)?,
        None => seed::builtin_roster()?,
    };
    Ok(roster)
}

/// Upper bound substituted when only `--age-min` is given.
const OPEN_AGE_UPPER_BOUND: u32 = 120;

fn build_criteria(args: &MatchArgs) -> MatchCriteria {
    let age_range = match (args.age_min, args.age_max) {
        (None, None) => None,
        (min, max) => Some(AgeRange {
            min: min.unwrap_or(0),
            max: max.unwrap_or(OPEN_AGE_UPPER_BOUND),
        }),
    };

    MatchCriteria {
        mo_patterns: args.mo_patterns.clone(),
        location: args.location.clone(),
        age_range,
        category: args.category.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args(mo_patterns: &[&str]) -> MatchArgs {
        MatchArgs {
            mo_patterns: mo_patterns.iter().map(|s| s.to_string()).collect(),
            location: None,
            age_min: None,
            age_max: None,
            category: None,
            roster: None,
            limit: None,
            json: false,
        }
    }

    #[test]
    fn test_no_age_flags_means_no_age_range() {
        let criteria = build_criteria(&make_args(&["arson"]));
        assert!(criteria.age_range.is_none());
    }

    #[test]
    fn test_single_age_flag_fills_open_bound() {
        let mut args = make_args(&["arson"]);
        args.age_min = Some(30);
        let criteria = build_criteria(&args);
        assert_eq!(criteria.age_range, Some(AgeRange { min: 30, max: 120 }));
    }

    #[test]
    fn test_both_age_flags_carry_through() {
        let mut args = make_args(&["arson"]);
        args.age_min = Some(25);
        args.age_max = Some(40);
        let criteria = build_criteria(&args);
        assert_eq!(criteria.age_range, Some(AgeRange { min: 25, max: 40 }));
    }
}
