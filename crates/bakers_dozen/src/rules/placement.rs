//! Move legality: where a single card may be placed.

use crate::action::{Destination, Move, MoveError};
use crate::card::{Card, Rank};
use crate::table::{Column, Foundations, Tableau};
use tracing::instrument;

/// Whether `card` may be placed on top of `destination`.
///
/// Empty columns never accept a card. Otherwise the card must be exactly
/// one rank below the column's top card; suit does not matter.
pub fn is_valid_tableau_move(card: Card, destination: &Column) -> bool {
    match destination.top() {
        None => false,
        Some(top) => card.rank_value() + 1 == top.rank_value(),
    }
}

/// Whether `card` may be placed on `pile`.
///
/// An empty pile accepts only an ace. A non-empty pile accepts the next
/// rank of the same suit.
pub fn is_valid_foundation_move(card: Card, pile: &[Card]) -> bool {
    match pile.last() {
        None => card.rank() == Rank::Ace,
        Some(top) => card.suit() == top.suit() && card.rank_value() == top.rank_value() + 1,
    }
}

/// Full legality check for a move, naming the reason on rejection.
///
/// Returns the index of the source column on success. Only the top card of
/// a column is ever a legal source.
#[instrument(level = "debug", skip(tableau, foundations), fields(mv = %mv))]
pub fn check_move(tableau: &Tableau, foundations: &Foundations, mv: &Move) -> Result<usize, MoveError> {
    let source = tableau
        .column_with_top(mv.card)
        .ok_or(MoveError::NotMovable(mv.card))?;

    match mv.destination {
        Destination::Column(index) => {
            let column = tableau.column(index).ok_or(MoveError::NoSuchColumn(index))?;
            if index == source {
                return Err(MoveError::SameColumn {
                    card: mv.card,
                    column: index,
                });
            }
            match column.top() {
                None => Err(MoveError::EmptyColumn(index)),
                Some(target) if !is_valid_tableau_move(mv.card, column) => {
                    Err(MoveError::NotOneLower {
                        card: mv.card,
                        target,
                    })
                }
                Some(_) => Ok(source),
            }
        }
        Destination::Foundation(suit) => {
            if mv.card.suit() != suit {
                return Err(MoveError::WrongSuit {
                    card: mv.card,
                    pile: suit,
                });
            }
            if is_valid_foundation_move(mv.card, foundations.pile(suit)) {
                Ok(source)
            } else {
                Err(MoveError::OutOfSequence(mv.card))
            }
        }
    }
}
