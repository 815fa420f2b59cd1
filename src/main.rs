//! Baker's Dozen - terminal solitaire
//!
//! Plays in the terminal by default; `deal` prints a layout and exits.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use bakers_dozen::start_round;
use bakers_dozen_games::{
    AppConfig, Cli, Command, DealReport, init_file_logging, init_stderr_logging, run_tui,
};
use clap::Parser;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.time_limit, cli.undo_budget)
        .context("Invalid command-line override")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(config, cli.seed),
        Command::Deal { json } => print_deal(config, cli.seed, json),
    }
}

/// Run the terminal UI
fn play(config: AppConfig, seed: Option<u64>) -> Result<()> {
    init_file_logging(config.ui().log_file()).with_context(|| {
        format!(
            "Failed to open log file {}",
            config.ui().log_file().display()
        )
    })?;
    run_tui(config, seed)
}

/// Deal one layout and print it
#[instrument(skip(config))]
fn print_deal(config: AppConfig, seed: Option<u64>, json: bool) -> Result<()> {
    init_stderr_logging();

    let round = start_round(*config.round(), *config.geometry(), seed).context("Deal failed")?;
    let report = DealReport::from_round(&round);
    info!(seed = ?report.seed, "Dealt layout");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
