//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ridehail CLI
#[derive(Debug, Parser)]
#[command(name = "ridehail")]
#[command(author, version, about = "Ride-hailing front-end in the terminal", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (default: ./ridehail.toml if present)
    #[arg(short, long, env = "RIDEHAIL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the app: splash screen, then the interactive home screen
    Run,

    /// Look up address suggestions once
    ///
    /// Example: ridehail search "Koramangala, Bengaluru"
    Search {
        /// Free-text address query
        query: String,

        /// Maximum number of suggestions (default from config)
        #[arg(short, long)]
        limit: Option<u8>,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Print the ride catalog
    Rides {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Subcommand to run; `run` when none is given
    #[must_use]
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}

/// Log filter for a `-v` count; no flag keeps the configured filter
#[must_use]
pub fn log_filter_from_verbosity(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
