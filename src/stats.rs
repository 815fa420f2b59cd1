//! In-memory statistics for the current session.

use bakers_dozen::{Outcome, RoundFinished};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Tallies of finished rounds. Lost when the program exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionStats {
    played: u32,
    won: u32,
    timed_out: u32,
    stuck: u32,
    best_score: u32,
}

impl SessionStats {
    /// Empty tallies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished round.
    #[instrument(skip(self, round), fields(outcome = %round.outcome(), score = round.score()))]
    pub fn record(&mut self, round: &RoundFinished) {
        self.played += 1;
        match round.outcome() {
            Outcome::Won => self.won += 1,
            Outcome::TimedOut => self.timed_out += 1,
            Outcome::Stuck => self.stuck += 1,
        }
        self.best_score = self.best_score.max(round.score());
        debug!(played = self.played, best = self.best_score, "Session stats updated");
    }

    /// Share of played rounds that were won, in percent.
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) * 100.0 / f64::from(self.played)
        }
    }
}
