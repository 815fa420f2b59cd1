//! Tracing setup for the terminal UI.

use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `log_file`, since stdout belongs to the UI.
///
/// `RUST_LOG` selects the filter, falling back to `info`. A subscriber that
/// is already installed is left in place.
pub fn init_file_logging(log_file: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %log_file.display(), "Logging initialized");
    Ok(())
}

/// Sends tracing output to stderr for one-shot commands.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
