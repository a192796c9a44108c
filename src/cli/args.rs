//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Waypoint - Navigation trails, migration links and step wizards.
#[derive(Debug, Parser)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides default .waypoint/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a breadcrumb trail from path segments
    Trail(TrailArgs),

    /// Inspect and edit a migration links file
    Links(LinksArgs),

    /// Run a wizard described in YAML
    Wizard(WizardArgs),

    /// Show resolved settings
    Config(ConfigArgs),
}

/// Arguments for the `trail` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TrailArgs {
    /// Path segments, outermost first
    #[arg(required = true)]
    pub segments: Vec<String>,

    /// Collapse the middle of the trail beyond this many items
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Do not prepend the home item
    #[arg(long)]
    pub no_home: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `links` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LinksArgs {
    #[command(subcommand)]
    pub action: LinksAction,
}

/// Operations on a links file.
#[derive(Debug, Clone, Subcommand)]
pub enum LinksAction {
    /// Show link statistics
    Stats {
        /// Links file (JSON array of pairs)
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Link an old record to a new one (creates the file if needed)
    Add {
        /// Links file (JSON array of pairs)
        file: PathBuf,

        /// Id in the old record set
        #[arg(long = "old")]
        old_id: String,

        /// Id in the new record set
        #[arg(long = "new")]
        new_id: String,

        /// Match confidence between 0 and 1
        #[arg(long, value_parser = parse_confidence)]
        confidence: Option<f64>,
    },

    /// Remove a link
    Remove {
        /// Links file (JSON array of pairs)
        file: PathBuf,

        /// Id in the old record set
        #[arg(long = "old")]
        old_id: String,

        /// Id in the new record set
        #[arg(long = "new")]
        new_id: String,
    },
}

/// Arguments for the `wizard` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WizardArgs {
    /// Wizard definition file (YAML)
    pub definition: PathBuf,

    /// Answer steps from a YAML file instead of prompting
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Print the collected data as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_confidence(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("confidence must be between 0 and 1, got {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trail_segments() {
        let cli = Cli::parse_from(["waypoint", "trail", "Docs", "Guides", "--max-items", "3"]);
        let Commands::Trail(args) = cli.command else {
            panic!("Expected trail command");
        };
        assert_eq!(args.segments, vec!["Docs", "Guides"]);
        assert_eq!(args.max_items, Some(3));
    }

    #[test]
    fn parses_links_add() {
        let cli = Cli::parse_from([
            "waypoint", "links", "add", "links.json", "--old", "7", "--new", "a7",
            "--confidence", "0.9",
        ]);
        let Commands::Links(LinksArgs {
            action: LinksAction::Add { old_id, confidence, .. },
        }) = cli.command
        else {
            panic!("Expected links add");
        };
        assert_eq!(old_id, "7");
        assert_eq!(confidence, Some(0.9));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let result = Cli::try_parse_from([
            "waypoint", "links", "add", "links.json", "--old", "a", "--new", "b",
            "--confidence", "1.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["waypoint", "config", "--json", "--quiet"]);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Config(ConfigArgs { json: true })));
    }

    #[test]
    fn parse_confidence_bounds() {
        assert_eq!(parse_confidence("0"), Ok(0.0));
        assert_eq!(parse_confidence("1"), Ok(1.0));
        assert!(parse_confidence("-0.1").is_err());
        assert!(parse_confidence("high").is_err());
    }
}
