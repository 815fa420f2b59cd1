//! Baker's Dozen solitaire: the pure game core.
//!
//! Everything here is deterministic given a seed and free of terminal,
//! file and clock access. A shell drives it by dealing a round, feeding
//! gestures through an [`InteractionController`], and ticking the round
//! with elapsed wall-clock time.
//!
//! # Architecture
//!
//! - **Cards**: [`Card`], [`Deck`] and the stable [`CardId`]
//! - **Layout**: [`deal`] places four kings at the bottom of random columns
//! - **Rules**: pure legality checks in [`rules`]
//! - **Rounds**: typestate phases [`RoundSetup`] → [`RoundInProgress`] → [`RoundFinished`]
//! - **Undo**: budgeted snapshots in [`UndoManager`]
//!
//! # Example
//!
//! ```
//! use bakers_dozen::{RoundConfig, TableGeometry, TickResult, start_round};
//! use std::time::Duration;
//!
//! let mut round = start_round(RoundConfig::new(), TableGeometry::default(), Some(7))?;
//! if let Some(mv) = round.legal_moves().first().copied() {
//!     round.try_move(mv)?;
//! }
//! match round.tick(Duration::from_secs(1)) {
//!     TickResult::InProgress(round) => assert!(round.score() <= 50),
//!     TickResult::Finished(done) => println!("{}", done.outcome()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod card;
mod clock;
mod config;
mod contracts;
mod deck;
mod geometry;
pub mod interaction;
pub mod invariants;
mod layout;
mod phases;
pub mod rules;
mod table;
mod typestate;
mod undo;

// Crate-level exports - Cards
pub use card::{Card, CardId, DECK_SIZE, RANKS_PER_SUIT, Rank, Suit};
pub use deck::Deck;

// Crate-level exports - Table
pub use geometry::{Point, Rect, TableGeometry, VisualPlacement};
pub use layout::{DealError, deal};
pub use table::{CARDS_PER_COLUMN, COLUMN_COUNT, Column, Foundations, KING_COLUMNS, Tableau};

// Crate-level exports - Moves and contracts
pub use action::{Destination, Move, MoveError};
pub use contracts::{ClockRunning, Contract, LegalPlacement, MoveContract, ScoreNonDecreasing};

// Crate-level exports - Round lifecycle
pub use clock::RoundClock;
pub use config::{
    DEFAULT_FOUNDATION_SCORE, DEFAULT_TIME_LIMIT_SECS, DEFAULT_UNDO_BUDGET, MAX_FOUNDATION_SCORE,
    MAX_UNDO_BUDGET, RoundConfig,
};
pub use phases::{Outcome, RoundPhase};
pub use typestate::{
    MoveReport, RoundFinished, RoundInProgress, RoundSetup, TickResult, start_round,
};
pub use undo::{Snapshot, UndoError, UndoManager};

// Crate-level exports - Interaction
pub use interaction::{ClickTracker, DragState, Gesture, GestureOutcome, InteractionController};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        COLUMN_COUNT, Card, Foundations, RoundConfig, RoundInProgress, Rank, Suit, TableGeometry,
        Tableau,
    };

    /// Column `r` holds the four cards of rank value `r`, spades at the
    /// bottom and hearts on top.
    pub(crate) fn ladder_columns() -> [Vec<Card>; COLUMN_COUNT] {
        std::array::from_fn(|value| {
            let rank = Rank::from_value(value as u8).unwrap();
            [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts]
                .into_iter()
                .map(|suit| Card::new(rank, suit))
                .collect()
        })
    }

    /// Active round over the ladder layout with default settings.
    pub(crate) fn ladder_round() -> RoundInProgress {
        RoundInProgress::from_layout(
            RoundConfig::new(),
            TableGeometry::default(),
            Tableau::from_columns(ladder_columns()),
            Foundations::new(),
        )
        .unwrap()
    }
}
