//! Logwarden CLI entry point
//!
//! Parses arguments, loads configuration, initializes logging,
//! then dispatches to the subcommand handler. Exit codes come
//! from [`error::CliError::exit_code`].

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use tracing::info;

use logwarden_core::config::WardenConfig;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // AlertsFound is an expected outcome, not a failure; the report
        // was already rendered, so only the exit code matters.
        if !matches!(e, CliError::AlertsFound(_)) {
            eprintln!("error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = WardenConfig::load_or_default(&cli.config).await?;
    if let Some(level) = &cli.log_level {
        config.general.log_level = level.clone();
    }

    logging::init_tracing(&config.general).map_err(|e| CliError::Command(e.to_string()))?;
    info!(config = %cli.config.display(), "logwarden starting");

    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, &config, &writer).await,
        Commands::Rules => commands::rules::execute(&writer),
    }
}
