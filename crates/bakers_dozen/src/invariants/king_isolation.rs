//! King isolation: a fresh deal has kings at the bottom of exactly four columns.

use super::Invariant;
use crate::table::{KING_COLUMNS, Tableau};

/// Invariant: exactly four columns have a king as their first-dealt card.
pub struct KingIsolationInvariant;

impl KingIsolationInvariant {
    /// Indices of columns whose bottom card is a king.
    pub fn king_columns(tableau: &Tableau) -> Vec<usize> {
        tableau
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, column)| column.bottom().is_some_and(|card| card.is_king()))
            .map(|(index, _)| index)
            .collect()
    }
}

impl Invariant<Tableau> for KingIsolationInvariant {
    fn holds(tableau: &Tableau) -> bool {
        Self::king_columns(tableau).len() == KING_COLUMNS
    }

    fn description() -> &'static str {
        "Exactly four columns have a king at the bottom"
    }
}
