//! First-class move types for Baker's Dozen.
//!
//! A move names a card and where it should go. It can be validated
//! against a table before anything is mutated.

use crate::card::{Card, Suit};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where a card is being moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A tableau column, by index.
    Column(usize),
    /// The foundation pile for a suit.
    Foundation(Suit),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Column(index) => write!(f, "column {}", index + 1),
            Destination::Foundation(suit) => write!(f, "{} foundation", suit.symbol()),
        }
    }
}

/// A request to move the top card of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The card being moved.
    pub card: Card,
    /// Target pile.
    pub destination: Destination,
}

impl Move {
    /// Creates a new move.
    #[instrument(level = "trace")]
    pub fn new(card: Card, destination: Destination) -> Self {
        Self { card, destination }
    }

    /// Move of `card` to the foundation of its own suit.
    pub fn to_foundation(card: Card) -> Self {
        Self::new(card, Destination::Foundation(card.suit()))
    }

    /// Move of `card` onto column `index`.
    pub fn to_column(card: Card, index: usize) -> Self {
        Self::new(card, Destination::Column(index))
    }

    /// Whether this move targets a foundation.
    pub fn is_foundation_move(&self) -> bool {
        matches!(self.destination, Destination::Foundation(_))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.card, self.destination)
    }
}

/// Why a move attempt was rejected.
///
/// Every variant except `InvariantViolation` is an ordinary illegal move:
/// the card snaps back and nothing else changes.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The card is not the top card of any column.
    #[display("{} is not on top of a column", _0)]
    NotMovable(#[error(not(source))] Card),

    /// Empty columns cannot be filled.
    #[display("Column {} is empty", _0 + 1)]
    EmptyColumn(#[error(not(source))] usize),

    /// Column index out of range.
    #[display("No column {}", _0 + 1)]
    NoSuchColumn(#[error(not(source))] usize),

    /// Source and destination are the same column.
    #[display("{} is already in column {}", card, column + 1)]
    SameColumn {
        /// The card.
        card: Card,
        /// Its column.
        column: usize,
    },

    /// Tableau building must go down by exactly one rank.
    #[display("{} cannot go on {}", card, target)]
    NotOneLower {
        /// The card being moved.
        card: Card,
        /// Top card of the destination column.
        target: Card,
    },

    /// The card's suit does not match the foundation pile.
    #[display("{} does not belong on the {:?} foundation", card, pile)]
    WrongSuit {
        /// The card being moved.
        card: Card,
        /// Suit of the targeted pile.
        pile: Suit,
    },

    /// The card is not the next one up on its foundation.
    #[display("{} is not next on its foundation", _0)]
    OutOfSequence(#[error(not(source))] Card),

    /// The round is no longer accepting moves.
    #[display("Round is over")]
    RoundOver,

    /// A postcondition failed; indicates a bug, never an ordinary illegal move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
