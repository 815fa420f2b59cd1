//! Command-line interface for bakers_dozen.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Baker's Dozen - timed solitaire in the terminal
#[derive(Parser, Debug)]
#[command(name = "bakers_dozen")]
#[command(about = "Baker's Dozen solitaire with mouse drag-and-drop", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to bakers_dozen.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Deal from this seed instead of a random one
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Round time limit in seconds
    #[arg(long, global = true)]
    pub time_limit: Option<u64>,

    /// Undos allowed per round
    #[arg(long, global = true)]
    pub undo_budget: Option<u32>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Print a dealt layout and exit
    Deal {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
