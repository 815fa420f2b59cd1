//! Core card identity types for Baker's Dozen.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Card suit, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Position of this suit in canonical order (0-3).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Suit at the given canonical index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Single-character symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Hearts and diamonds are red.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter)]
pub enum Rank {
    /// Ace (value 0).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King (value 12).
    King,
}

impl Rank {
    /// Ordinal position in the ace-to-king sequence (ace = 0, king = 12).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given ordinal value.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::iter().nth(value as usize)
    }

    /// Short label used on card faces.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Stable identifier for one of the 52 cards.
///
/// Assigned from canonical deck order, so it is the same for a given
/// (rank, suit) in every round and every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u8);

impl CardId {
    /// Raw index (0-51).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// The card's rank.
    pub fn rank(self) -> Rank {
        self.rank
    }

    /// The card's suit.
    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Shorthand for `rank().value()`.
    pub fn rank_value(self) -> u8 {
        self.rank.value()
    }

    /// Whether this card is a king.
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Stable identifier for this card.
    pub fn id(self) -> CardId {
        CardId(self.suit.index() as u8 * RANKS_PER_SUIT + self.rank.value())
    }

    /// Rebuilds a card from its identifier.
    pub fn from_id(id: CardId) -> Option<Self> {
        let suit = Suit::from_index(id.index() / RANKS_PER_SUIT as usize)?;
        let rank = Rank::from_value(id.0 % RANKS_PER_SUIT)?;
        Some(Self::new(rank, suit))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values_ace_to_king() {
        assert_eq!(Rank::Ace.value(), 0);
        assert_eq!(Rank::Ten.value(), 9);
        assert_eq!(Rank::King.value(), 12);
        assert_eq!(Rank::iter().count(), RANKS_PER_SUIT as usize);
    }

    #[test]
    fn test_card_id_is_stable_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                let card = Card::new(rank, suit);
                assert!(seen.insert(card.id()));
                assert_eq!(Card::from_id(card.id()), Some(card));
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Q♥");
    }

    #[test]
    fn test_red_suits() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
    }
}
