//! Per-round tunables.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Points awarded for each card moved to a foundation.
pub const DEFAULT_FOUNDATION_SCORE: u32 = 50;

/// Undos available per round.
pub const DEFAULT_UNDO_BUDGET: u32 = 3;

/// Round length before the clock runs out.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 600;

/// Largest undo budget a config may ask for.
pub const MAX_UNDO_BUDGET: u32 = 1_000;

/// Largest foundation award that keeps a full 52-card score inside `u32`.
pub const MAX_FOUNDATION_SCORE: u32 = u32::MAX / 52;

/// Settings that shape a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    time_limit_secs: u64,
    undo_budget: u32,
    foundation_score: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            undo_budget: DEFAULT_UNDO_BUDGET,
            foundation_score: DEFAULT_FOUNDATION_SCORE,
        }
    }
}

impl RoundConfig {
    /// Creates a config with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Round time limit.
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }

    /// Undos available per round, and the undo history capacity.
    pub fn undo_budget(&self) -> u32 {
        self.undo_budget
    }

    /// Points per foundation move.
    pub fn foundation_score(&self) -> u32 {
        self.foundation_score
    }

    /// Returns a copy with a different time limit.
    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Returns a copy with a different undo budget.
    pub fn with_undo_budget(mut self, budget: u32) -> Self {
        self.undo_budget = budget;
        self
    }

    /// Returns a copy with a different foundation award.
    pub fn with_foundation_score(mut self, score: u32) -> Self {
        self.foundation_score = score;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::new();
        assert_eq!(config.undo_budget(), 3);
        assert_eq!(config.foundation_score(), 50);
        assert_eq!(config.time_limit(), Duration::from_secs(600));
    }

    #[test]
    fn test_builders() {
        let config = RoundConfig::new().with_time_limit_secs(30).with_undo_budget(1);
        assert_eq!(config.time_limit(), Duration::from_secs(30));
        assert_eq!(config.undo_budget(), 1);
    }

    #[test]
    fn test_largest_award_fits_a_cleared_table() {
        let config = RoundConfig::new().with_foundation_score(MAX_FOUNDATION_SCORE);
        assert!(config.foundation_score().checked_mul(52).is_some());
    }
}
