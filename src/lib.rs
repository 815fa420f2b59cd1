//! Baker's Dozen in the terminal.
//!
//! This crate is the shell around the [`bakers_dozen`] game core: command
//! line, configuration, logging, input polling, rendering, and the outer
//! Menu / Round / RoundEnd state machine.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides ([`AppConfig`])
//! - **Input**: crossterm mouse and key events ([`poll_input_events`])
//! - **Render**: an explicit [`RenderContext`] per frame
//! - **Lobby**: [`LobbyController`] runs the single event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod deal_report;
mod input;
mod lobby;
mod logging;
mod render;
mod stats;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, UiConfig};
pub use deal_report::DealReport;
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Terminal collaborators
pub use input::{InputEvent, PointerEvent, PointerKind, poll_input_events, translate};
pub use render::{RenderContext, TableRenderer};

// Crate-level exports - Outer state machine
pub use lobby::{
    LobbyController, MenuScreen, RoundEndScreen, RoundProgress, RoundScreen, Screen,
    ScreenTransition,
};
pub use stats::SessionStats;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

/// Runs the terminal UI until the player quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: AppConfig, seed: Option<u64>) -> anyhow::Result<()> {
    info!("Starting Baker's Dozen TUI");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = LobbyController::new(config, seed);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(stats = ?controller.stats(), "Session over");
    res
}
