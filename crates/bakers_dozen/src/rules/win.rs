//! Win detection for Baker's Dozen.

use crate::table::Tableau;
use tracing::instrument;

/// A round is won once every column is empty.
///
/// With cards conserved, an empty tableau means all 52 cards are on the
/// foundations.
#[instrument(level = "trace", skip_all)]
pub fn is_won(tableau: &Tableau) -> bool {
    tableau.columns().iter().all(|column| column.is_empty())
}
