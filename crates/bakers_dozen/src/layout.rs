//! Initial deal: thirteen columns of four, kings isolated at the bottom.
//!
//! Four columns, chosen uniformly at random, get a king as their first
//! card. Every other card is shuffled again and fills the remaining slots,
//! three more on king columns and four on the rest.

use crate::card::Card;
use crate::deck::Deck;
use crate::invariants::{DealInvariants, InvariantSet, describe};
use crate::table::{CARDS_PER_COLUMN, COLUMN_COUNT, KING_COLUMNS, Tableau};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// The deal produced something other than a valid starting layout.
///
/// Only reachable through a bug or a malformed input deck.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DealError {
    /// The input deck did not hold exactly four kings and 48 other cards.
    #[display("Deck holds {} kings and {} other cards", kings, others)]
    MalformedDeck {
        /// Kings found.
        kings: usize,
        /// Non-king cards found.
        others: usize,
    },
    /// The dealt layout broke a deal invariant.
    #[display("Deal invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Deals `deck` into a fresh tableau, draining the deck.
#[instrument(skip(deck, rng), fields(cards = deck.len()))]
pub fn deal<R: Rng + ?Sized>(deck: &mut Deck, rng: &mut R) -> Result<Tableau, DealError> {
    let (kings, mut others): (Vec<Card>, Vec<Card>) =
        deck.drain().into_iter().partition(|card| card.is_king());

    let needed_others = COLUMN_COUNT * CARDS_PER_COLUMN - KING_COLUMNS;
    if kings.len() != KING_COLUMNS || others.len() != needed_others {
        return Err(DealError::MalformedDeck {
            kings: kings.len(),
            others: others.len(),
        });
    }

    let mut king_columns = rand::seq::index::sample(rng, COLUMN_COUNT, KING_COLUMNS).into_vec();
    king_columns.sort_unstable();
    debug!(?king_columns, "Chose king columns");

    others.shuffle(rng);

    let mut kings = kings.into_iter();
    let mut others = others.into_iter();
    let mut columns: [Vec<Card>; COLUMN_COUNT] =
        std::array::from_fn(|_| Vec::with_capacity(CARDS_PER_COLUMN));

    for (index, column) in columns.iter_mut().enumerate() {
        if king_columns.binary_search(&index).is_ok() {
            column.extend(kings.next());
        }
        while column.len() < CARDS_PER_COLUMN {
            match others.next() {
                Some(card) => column.push(card),
                None => break,
            }
        }
    }

    let tableau = Tableau::from_columns(columns);
    DealInvariants::check_all(&tableau)
        .map_err(|violations| DealError::InvariantViolation(describe(&violations)))?;

    Ok(tableau)
}
