//! Foundation sequence: each pile is an unbroken ace-upward run of its suit.

use super::Invariant;
use crate::table::Foundations;
use crate::typestate::RoundInProgress;

/// Invariant: the pile for suit S, read bottom to top, is exactly A, 2, ... of S.
pub struct FoundationSequenceInvariant;

impl FoundationSequenceInvariant {
    /// Checks the sequence property over raw foundations.
    pub fn holds_for(foundations: &Foundations) -> bool {
        foundations.iter().all(|(suit, pile)| {
            pile.iter()
                .enumerate()
                .all(|(i, card)| card.suit() == suit && card.rank_value() as usize == i)
        })
    }
}

impl Invariant<RoundInProgress> for FoundationSequenceInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        Self::holds_for(round.foundations())
    }

    fn description() -> &'static str {
        "Each foundation is an ace-upward run of its own suit"
    }
}
