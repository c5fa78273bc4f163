//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Casual FIFA league manager
#[derive(Parser, Debug)]
#[command(name = "league", version, about = "Casual FIFA league manager")]
pub struct Cli {
    /// Configuration file [default: league.toml, if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Tournament data file, overriding the configured one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a player
    AddPlayer { name: String },

    /// Enter a team for a player
    AddTeam {
        name: String,

        /// The player who controls the team
        #[arg(long)]
        owner: String,
    },

    /// Show players and teams
    Teams,

    /// Replace the schedule with a new double round robin
    Generate {
        /// Seed for a reproducible fixture order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Record the final score of a match
    Record {
        match_id: String,

        #[arg(allow_hyphen_values = true)]
        home: String,

        #[arg(allow_hyphen_values = true)]
        away: String,

        /// Comma separated goal scorers, one entry per goal
        #[arg(long, default_value = "")]
        scorers: String,
    },

    /// List the schedule in order
    Matches {
        /// Only matches still to be played
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Only finished matches, most recent first
        #[arg(long)]
        completed: bool,

        /// Only matches involving this team id
        #[arg(long)]
        team: Option<String>,
    },

    /// Print the league table
    Standings {
        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the leading goal scorers
    Scorers {
        /// How many to show [default: from config]
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Write the tournament snapshot as JSON
    ExportJson {
        /// Output file [default: stdout]
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write the standings as plain text
    ExportTxt {
        /// Output file [default: stdout]
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace the tournament with a JSON snapshot
    Import { file: PathBuf },

    /// Discard all tournament data
    Reset,
}
