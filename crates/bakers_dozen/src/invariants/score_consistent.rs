//! Score consistency: only foundation moves score.

use super::Invariant;
use crate::typestate::RoundInProgress;

/// Invariant: score equals the per-card foundation award times cards on foundations.
///
/// Holds because tableau moves are free and undo restores score with the piles.
pub struct ScoreConsistentInvariant;

impl Invariant<RoundInProgress> for ScoreConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let expected = (round.foundations().card_count() as u32)
            .saturating_mul(round.config().foundation_score());
        round.score() == expected
    }

    fn description() -> &'static str {
        "Score matches the number of cards on the foundations"
    }
}
