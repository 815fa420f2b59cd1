//! Whether a round can still make progress.

use crate::action::Move;
use crate::rules::placement::{is_valid_foundation_move, is_valid_tableau_move};
use crate::table::{Foundations, Tableau};
use tracing::instrument;

/// Every legal move from the current column tops.
///
/// Foundation moves come first for each source column, then tableau moves
/// left to right.
#[instrument(level = "trace", skip_all)]
pub fn legal_moves(tableau: &Tableau, foundations: &Foundations) -> Vec<Move> {
    let mut moves = Vec::new();
    for (source, column) in tableau.columns().iter().enumerate() {
        let Some(card) = column.top() else { continue };

        if is_valid_foundation_move(card, foundations.pile(card.suit())) {
            moves.push(Move::to_foundation(card));
        }

        for (target, destination) in tableau.columns().iter().enumerate() {
            if target != source && is_valid_tableau_move(card, destination) {
                moves.push(Move::to_column(card, target));
            }
        }
    }
    moves
}

/// Whether any column top can move anywhere.
///
/// Same answer as `!legal_moves(..).is_empty()`, without building the list.
#[instrument(level = "trace", skip_all)]
pub fn has_any_legal_move(tableau: &Tableau, foundations: &Foundations) -> bool {
    tableau.columns().iter().enumerate().any(|(source, column)| {
        column.top().is_some_and(|card| {
            is_valid_foundation_move(card, foundations.pile(card.suit()))
                || tableau
                    .columns()
                    .iter()
                    .enumerate()
                    .any(|(target, destination)| {
                        target != source && is_valid_tableau_move(card, destination)
                    })
        })
    })
}
