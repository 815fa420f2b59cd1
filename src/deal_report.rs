//! Printable view of a freshly dealt round, for the `deal` command.

use bakers_dozen::{RoundInProgress, invariants::KingIsolationInvariant};
use serde::Serialize;
use std::fmt;

/// A dealt layout as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealReport {
    /// Seed the layout was dealt from.
    pub seed: Option<u64>,
    /// Columns left to right, each bottom card first.
    pub columns: Vec<Vec<String>>,
    /// Columns with a king at the bottom.
    pub king_columns: Vec<usize>,
}

impl DealReport {
    /// Captures the layout of `round`.
    pub fn from_round(round: &RoundInProgress) -> Self {
        let columns = round
            .tableau()
            .columns()
            .iter()
            .map(|column| column.cards().iter().map(ToString::to_string).collect())
            .collect();
        Self {
            seed: round.seed(),
            columns,
            king_columns: KingIsolationInvariant::king_columns(round.tableau()),
        }
    }
}

impl fmt::Display for DealReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.seed {
            Some(seed) => writeln!(f, "Seed {}", seed)?,
            None => writeln!(f, "Unseeded layout")?,
        }
        for (index, column) in self.columns.iter().enumerate() {
            let marker = if self.king_columns.contains(&index) { '*' } else { ' ' };
            writeln!(f, "{:>2}{} {}", index + 1, marker, column.join(" "))?;
        }
        Ok(())
    }
}
