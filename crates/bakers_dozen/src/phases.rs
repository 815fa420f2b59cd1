//! Round phases and outcomes.

use serde::{Deserialize, Serialize};

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every card reached the foundations.
    Won,
    /// The clock ran out first.
    TimedOut,
    /// No legal move remained.
    Stuck,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "You won!"),
            Outcome::TimedOut => write!(f, "Time's up"),
            Outcome::Stuck => write!(f, "No moves left"),
        }
    }
}

/// Lifecycle phase of a round, for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Cards are being laid out.
    Dealing,
    /// Moves are accepted.
    Active,
    /// Finished: all cards on foundations.
    Won,
    /// Finished: clock ran out.
    TimedOut,
    /// Finished: no legal move.
    Stuck,
}

impl From<Outcome> for RoundPhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => RoundPhase::Won,
            Outcome::TimedOut => RoundPhase::TimedOut,
            Outcome::Stuck => RoundPhase::Stuck,
        }
    }
}
