//! Countdown clock for a round.
//!
//! Elapsed time is supplied by the caller (wall-clock time since the round
//! started) and polled once per tick; the clock never reads time itself.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tracks elapsed time against a fixed limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    limit: Duration,
    elapsed: Duration,
}

impl RoundClock {
    /// A fresh clock with nothing elapsed.
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            elapsed: Duration::ZERO,
        }
    }

    /// Records the time elapsed since the round started.
    ///
    /// Elapsed time never runs backwards.
    pub fn update(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.max(elapsed);
    }

    /// Time limit for the round.
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time left, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed)
    }

    /// Whether no time remains.
    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_counts_down() {
        let mut clock = RoundClock::new(Duration::from_secs(10));
        assert_eq!(clock.remaining(), Duration::from_secs(10));
        clock.update(Duration::from_millis(2500));
        assert_eq!(clock.remaining(), Duration::from_millis(7500));
        assert!(!clock.is_expired());
    }

    #[test]
    fn test_expires_exactly_at_limit() {
        let mut clock = RoundClock::new(Duration::from_secs(1));
        clock.update(Duration::from_secs(1));
        assert!(clock.is_expired());
        clock.update(Duration::from_secs(5));
        assert_eq!(clock.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let mut clock = RoundClock::new(Duration::from_secs(10));
        clock.update(Duration::from_secs(4));
        clock.update(Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(4));
    }
}
