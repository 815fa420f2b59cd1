//! Piles on the table: tableau columns and suit foundations.

use crate::card::{Card, RANKS_PER_SUIT, Rank, Suit};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 13;

/// Cards dealt to each column.
pub const CARDS_PER_COLUMN: usize = 4;

/// Number of king-bottom columns produced by a deal.
pub const KING_COLUMNS: usize = 4;

/// A single tableau column, bottom to top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    /// Creates an empty column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column holding the given cards, bottom first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The movable card, if any.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The first-dealt card, if any.
    pub fn bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Whether the column has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the column.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// All cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

/// The thirteen playing columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    columns: [Column; COLUMN_COUNT],
}

impl Tableau {
    /// Tableau with every column empty.
    pub fn empty() -> Self {
        Self {
            columns: std::array::from_fn(|_| Column::new()),
        }
    }

    /// Tableau from explicit columns, each listed bottom first.
    pub fn from_columns(columns: [Vec<Card>; COLUMN_COUNT]) -> Self {
        Self {
            columns: columns.map(Column::from_cards),
        }
    }

    /// Column at `index`, if in range.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// All columns, left to right.
    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.columns
    }

    /// Index of the column whose top card is `card`.
    pub fn column_with_top(&self, card: Card) -> Option<usize> {
        self.columns.iter().position(|col| col.top() == Some(card))
    }

    /// Every card on the tableau, column by column.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.columns.iter().flat_map(|col| col.cards().iter().copied())
    }

    /// Total number of cards on the tableau.
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

impl Default for Tableau {
    fn default() -> Self {
        Self::empty()
    }
}

/// Foundation piles, one per suit, each built ace upward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundations {
    piles: [Vec<Card>; 4],
}

impl Foundations {
    /// All four piles empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pile for `suit`, bottom (ace) first.
    pub fn pile(&self, suit: Suit) -> &[Card] {
        &self.piles[suit.index()]
    }

    /// Top card of the pile for `suit`.
    pub fn top(&self, suit: Suit) -> Option<Card> {
        self.piles[suit.index()].last().copied()
    }

    /// Pushes `card` onto the pile for `suit` without validation.
    ///
    /// Callers check legality first; the rule engine and move contract own that.
    pub(crate) fn push(&mut self, suit: Suit, card: Card) {
        self.piles[suit.index()].push(card);
    }

    /// Iterates `(suit, pile)` in canonical suit order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &[Card])> + '_ {
        Suit::iter().map(move |suit| (suit, self.pile(suit)))
    }

    /// Every card on the foundations.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.piles.iter().flat_map(|pile| pile.iter().copied())
    }

    /// Total number of cards on the foundations.
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }

    /// Builds foundations holding, for each suit, ace up to the given rank count.
    ///
    /// `heights[s]` is the number of cards on the pile for suit index `s`.
    pub fn with_heights(heights: [u8; 4]) -> Self {
        let mut foundations = Self::new();
        for suit in Suit::iter() {
            for value in 0..heights[suit.index()].min(RANKS_PER_SUIT) {
                if let Some(rank) = Rank::from_value(value) {
                    foundations.push(suit, Card::new(rank, suit));
                }
            }
        }
        foundations
    }
}
