//! Deck construction and shuffling.

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::instrument;

/// An ordered sequence of cards, consumed while dealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full 52-card deck in canonical order: suit by suit, ace to king.
    #[instrument]
    pub fn new() -> Self {
        let cards = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(rank, suit)))
            .collect::<Vec<_>>();
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// Full deck in a uniformly random order.
    #[instrument(skip(rng))]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck from an explicit card order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Fisher-Yates shuffle of the remaining cards.
    #[instrument(skip(self, rng), fields(len = self.cards.len()))]
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Number of cards left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Takes every remaining card, leaving the deck empty.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_new_deck_is_canonical() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck.cards()[12], Card::new(Rank::King, Suit::Hearts));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Spades));
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id().index(), i);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        let ids: HashSet<_> = deck.cards().iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), DECK_SIZE);
        assert_ne!(deck, Deck::new());
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_drain_empties() {
        let mut deck = Deck::new();
        let cards = deck.drain();
        assert_eq!(cards.len(), DECK_SIZE);
        assert!(deck.is_empty());
    }
}
