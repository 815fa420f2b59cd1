//! Application configuration loaded from TOML.

use bakers_dozen::{MAX_FOUNDATION_SCORE, MAX_UNDO_BUDGET, RoundConfig, TableGeometry};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "bakers_dozen.toml";

/// Everything the binary can be configured with.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Round rules: time limit, undo budget, points per foundation card.
    round: RoundConfig,
    /// Table layout in terminal cells.
    geometry: TableGeometry,
    /// Event loop and logging settings.
    ui: UiConfig,
}

/// Event loop and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame pacing in milliseconds.
    #[serde(default = "default_frame_ms")]
    frame_ms: u64,

    /// Input events handled per frame at most.
    #[serde(default = "default_max_events_per_tick")]
    max_events_per_tick: usize,

    /// Window for two presses to count as a double click.
    #[serde(default = "default_double_click_ms")]
    double_click_ms: u64,

    /// Where tracing output goes while the terminal UI owns stdout.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_frame_ms() -> u64 {
    33
}

fn default_max_events_per_tick() -> usize {
    32
}

fn default_double_click_ms() -> u64 {
    bakers_dozen::interaction::DEFAULT_DOUBLE_CLICK_MS
}

fn default_log_file() -> PathBuf {
    PathBuf::from("bakers_dozen.log")
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            max_events_per_tick: default_max_events_per_tick(),
            double_click_ms: default_double_click_ms(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    ///
    /// An explicitly named file that is missing is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        time_limit_secs: Option<u64>,
        undo_budget: Option<u32>,
    ) -> Result<Self, ConfigError> {
        if let Some(secs) = time_limit_secs {
            self.round = self.round.with_time_limit_secs(secs);
        }
        if let Some(budget) = undo_budget {
            self.round = self.round.with_undo_budget(budget);
        }
        self.validate()?;
        Ok(self)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.round.time_limit().is_zero() {
            return Err(ConfigError::new("round.time_limit_secs must be positive".to_string()));
        }
        if self.round.undo_budget() > MAX_UNDO_BUDGET {
            return Err(ConfigError::new(format!(
                "round.undo_budget must be at most {}",
                MAX_UNDO_BUDGET
            )));
        }
        if self.round.foundation_score() > MAX_FOUNDATION_SCORE {
            return Err(ConfigError::new(format!(
                "round.foundation_score must be at most {}",
                MAX_FOUNDATION_SCORE
            )));
        }
        if self.ui.frame_ms == 0 {
            return Err(ConfigError::new("ui.frame_ms must be positive".to_string()));
        }
        if self.ui.max_events_per_tick == 0 {
            return Err(ConfigError::new(
                "ui.max_events_per_tick must be positive".to_string(),
            ));
        }
        if *self.geometry.card_width() <= 0 || *self.geometry.card_height() <= 0 {
            return Err(ConfigError::new("geometry card size must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
