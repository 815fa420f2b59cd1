//! Snapshot-based undo with a per-round budget.
//!
//! A snapshot is captured before every move attempt. It waits in a pending
//! slot until the attempt resolves: a legal move commits it to the bounded
//! history, an illegal one discards it. Rejected attempts therefore never
//! become undoable events and never evict older history.

use crate::geometry::VisualPlacement;
use crate::table::{Foundations, Tableau};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Owned copy of everything undo restores.
///
/// Every field is a plain value, so a snapshot never shares state with the
/// live round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tableau columns.
    pub tableau: Tableau,
    /// Foundation piles.
    pub foundations: Foundations,
    /// Score at capture time.
    pub score: u32,
    /// Where every card was drawn.
    pub placement: VisualPlacement,
}

/// Why an undo request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum UndoError {
    /// Every undo for this round has been spent.
    #[display("No undos left")]
    BudgetExhausted,
    /// There is no move to take back.
    #[display("Nothing to undo")]
    EmptyHistory,
}

/// Bounded undo history plus the remaining undo budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndoManager {
    history: VecDeque<Snapshot>,
    pending: Option<Snapshot>,
    capacity: usize,
    budget: u32,
}

impl UndoManager {
    /// Creates a manager whose history holds at most `budget` snapshots.
    #[instrument]
    pub fn new(budget: u32) -> Self {
        Self {
            history: VecDeque::new(),
            pending: None,
            capacity: budget as usize,
            budget,
        }
    }

    /// Holds `snapshot` as the pre-move state of the attempt in progress.
    ///
    /// Replaces any earlier pending snapshot.
    #[instrument(level = "debug", skip_all)]
    pub fn begin_speculative(&mut self, snapshot: Snapshot) {
        self.pending = Some(snapshot);
    }

    /// Drops the pending snapshot; the attempt was rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn discard_speculative(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Moves the pending snapshot onto the history; the attempt succeeded.
    ///
    /// The oldest entry is dropped when the history is full.
    #[instrument(level = "debug", skip(self))]
    pub fn commit_speculative(&mut self) -> bool {
        let Some(snapshot) = self.pending.take() else {
            return false;
        };
        if self.capacity == 0 {
            return false;
        }
        while self.history.len() >= self.capacity {
            self.history.pop_front();
            debug!("Dropped oldest undo snapshot");
        }
        self.history.push_back(snapshot);
        true
    }

    /// Pops the most recent snapshot and spends one undo.
    ///
    /// Leaves history and budget untouched when the budget is spent or
    /// the history is empty. Any pending snapshot is cleared either way.
    #[instrument(skip(self), fields(budget = self.budget, depth = self.history.len()))]
    pub fn undo(&mut self) -> Result<Snapshot, UndoError> {
        self.pending = None;
        if self.budget == 0 {
            return Err(UndoError::BudgetExhausted);
        }
        let snapshot = self.history.pop_back().ok_or(UndoError::EmptyHistory)?;
        self.budget -= 1;
        Ok(snapshot)
    }

    /// Undos left this round.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Stored snapshots.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Maximum stored snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether an attempt is awaiting its outcome.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `undo` would currently succeed.
    pub fn can_undo(&self) -> bool {
        self.budget > 0 && !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(score: u32) -> Snapshot {
        Snapshot {
            tableau: Tableau::empty(),
            foundations: Foundations::new(),
            score,
            placement: VisualPlacement::default(),
        }
    }

    #[test]
    fn test_committed_snapshots_undo_in_reverse() {
        let mut undo = UndoManager::new(3);
        for score in [0, 50, 100] {
            undo.begin_speculative(snapshot(score));
            assert!(undo.commit_speculative());
        }
        assert_eq!(undo.undo().map(|s| s.score), Ok(100));
        assert_eq!(undo.undo().map(|s| s.score), Ok(50));
        assert_eq!(undo.undo().map(|s| s.score), Ok(0));
        assert_eq!(undo.budget(), 0);
    }

    #[test]
    fn test_fourth_undo_is_noop() {
        let mut undo = UndoManager::new(3);
        for score in 0..5 {
            undo.begin_speculative(snapshot(score));
            undo.commit_speculative();
        }
        for _ in 0..3 {
            assert!(undo.undo().is_ok());
        }
        let depth = undo.depth();
        assert_eq!(undo.undo(), Err(UndoError::BudgetExhausted));
        assert_eq!(undo.depth(), depth);
        assert_eq!(undo.budget(), 0);
    }

    #[test]
    fn test_discarded_attempt_is_not_undoable() {
        let mut undo = UndoManager::new(3);
        undo.begin_speculative(snapshot(0));
        assert!(undo.discard_speculative());
        assert_eq!(undo.depth(), 0);
        assert_eq!(undo.undo(), Err(UndoError::EmptyHistory));
        assert_eq!(undo.budget(), 3);
    }

    #[test]
    fn test_discard_does_not_evict_when_full() {
        let mut undo = UndoManager::new(2);
        for score in [10, 20] {
            undo.begin_speculative(snapshot(score));
            undo.commit_speculative();
        }
        undo.begin_speculative(snapshot(30));
        undo.discard_speculative();
        assert_eq!(undo.depth(), 2);
        assert_eq!(undo.undo().map(|s| s.score), Ok(20));
        assert_eq!(undo.undo().map(|s| s.score), Ok(10));
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let mut undo = UndoManager::new(3);
        for score in 0..10 {
            undo.begin_speculative(snapshot(score));
            undo.commit_speculative();
            assert!(undo.depth() <= undo.capacity());
        }
        // Oldest dropped first: the newest three remain.
        assert_eq!(undo.undo().map(|s| s.score), Ok(9));
        assert_eq!(undo.undo().map(|s| s.score), Ok(8));
        assert_eq!(undo.undo().map(|s| s.score), Ok(7));
    }

    #[test]
    fn test_zero_budget_stores_nothing() {
        let mut undo = UndoManager::new(0);
        undo.begin_speculative(snapshot(0));
        assert!(!undo.commit_speculative());
        assert_eq!(undo.depth(), 0);
        assert_eq!(undo.undo(), Err(UndoError::BudgetExhausted));
    }

    #[test]
    fn test_huge_budget_grows_history_on_demand() {
        let mut undo = UndoManager::new(u32::MAX);
        assert_eq!(undo.capacity(), u32::MAX as usize);
        undo.begin_speculative(snapshot(7));
        assert!(undo.commit_speculative());
        assert_eq!(undo.depth(), 1);
        assert_eq!(undo.undo().map(|s| s.score), Ok(7));
    }

    #[test]
    fn test_commit_without_pending_is_noop() {
        let mut undo = UndoManager::new(3);
        assert!(!undo.commit_speculative());
        assert!(!undo.can_undo());
    }
}
