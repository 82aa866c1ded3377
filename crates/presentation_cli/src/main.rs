//! ridehail CLI
//!
//! Entry point: configuration, logging, then the chosen command.

use clap::Parser;
use infrastructure::{AppConfig, init_telemetry};
use presentation_cli::app;
use presentation_cli::cli::{Cli, Commands, log_filter_from_verbosity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.telemetry.log_filter =
        log_filter_from_verbosity(cli.verbose, &config.telemetry.log_filter);
    init_telemetry(&config.telemetry)?;

    match cli.into_command() {
        Commands::Run => app::run_app(&config).await,
        Commands::Search { query, limit, json } => {
            app::run_search(&config, &query, limit, json).await
        },
        Commands::Rides { json } => app::run_rides(json),
    }
}
