//! Conservation: all 52 cards are on the table exactly once.

use super::Invariant;
use crate::card::{Card, DECK_SIZE};
use crate::table::{Foundations, Tableau};
use crate::typestate::RoundInProgress;

/// Invariant: tableau and foundations together hold each card exactly once.
pub struct ConservationInvariant;

impl ConservationInvariant {
    /// Checks conservation over raw piles.
    pub fn holds_for(tableau: &Tableau, foundations: &Foundations) -> bool {
        let mut seen = [false; DECK_SIZE];
        let mut count = 0;
        for card in tableau.cards().chain(foundations.cards()) {
            let slot = &mut seen[card.id().index()];
            if *slot {
                return false;
            }
            *slot = true;
            count += 1;
        }
        count == DECK_SIZE
    }

    /// Cards missing from the table, in canonical order.
    pub fn missing(tableau: &Tableau, foundations: &Foundations) -> Vec<Card> {
        crate::deck::Deck::new()
            .cards()
            .iter()
            .copied()
            .filter(|card| {
                !tableau.cards().any(|c| c == *card) && !foundations.cards().any(|c| c == *card)
            })
            .collect()
    }
}

impl Invariant<RoundInProgress> for ConservationInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        Self::holds_for(round.tableau(), round.foundations())
    }

    fn description() -> &'static str {
        "Every card appears exactly once across tableau and foundations"
    }
}

impl Invariant<Tableau> for ConservationInvariant {
    fn holds(tableau: &Tableau) -> bool {
        Self::holds_for(tableau, &Foundations::new())
    }

    fn description() -> &'static str {
        "Every card appears exactly once on the tableau"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::test_support::ladder_columns;

    #[test]
    fn test_full_tableau_holds() {
        let tableau = Tableau::from_columns(ladder_columns());
        assert!(<ConservationInvariant as Invariant<Tableau>>::holds(&tableau));
        assert!(ConservationInvariant::missing(&tableau, &Foundations::new()).is_empty());
    }

    #[test]
    fn test_duplicate_violates() {
        let mut columns = ladder_columns();
        let dup = columns[0][0];
        columns[1][0] = dup;
        let tableau = Tableau::from_columns(columns);
        assert!(!ConservationInvariant::holds_for(&tableau, &Foundations::new()));
    }

    #[test]
    fn test_missing_card_violates() {
        let mut columns = ladder_columns();
        let lost = columns[5].pop().unwrap();
        let tableau = Tableau::from_columns(columns);
        assert!(!ConservationInvariant::holds_for(&tableau, &Foundations::new()));
        assert_eq!(ConservationInvariant::missing(&tableau, &Foundations::new()), vec![lost]);
    }

    #[test]
    fn test_card_on_both_tableau_and_foundation_violates() {
        let tableau = Tableau::from_columns(ladder_columns());
        let foundations = Foundations::with_heights([1, 0, 0, 0]);
        assert!(foundations.top(Suit::Hearts) == Some(Card::new(Rank::Ace, Suit::Hearts)));
        assert!(!ConservationInvariant::holds_for(&tableau, &foundations));
    }
}
