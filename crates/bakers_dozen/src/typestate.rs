//! Phase-specific typestate structs for a Baker's Dozen round.
//!
//! Each phase is its own type: a `RoundSetup` has nothing dealt, a
//! `RoundInProgress` accepts moves, and a `RoundFinished` always carries
//! an outcome.

use crate::action::{Destination, Move, MoveError};
use crate::card::Card;
use crate::clock::RoundClock;
use crate::config::RoundConfig;
use crate::contracts::{Contract, MoveContract};
use crate::deck::Deck;
use crate::geometry::{Point, TableGeometry, VisualPlacement};
use crate::invariants::{ConservationInvariant, FoundationSequenceInvariant};
use crate::layout::{DealError, deal};
use crate::phases::{Outcome, RoundPhase};
use crate::rules;
use crate::table::{Foundations, Tableau};
use crate::undo::{Snapshot, UndoError, UndoManager};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round about to be dealt.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    config: RoundConfig,
    geometry: TableGeometry,
    seed: u64,
}

impl RoundSetup {
    /// Creates a setup with a freshly drawn seed.
    #[instrument]
    pub fn new(config: RoundConfig, geometry: TableGeometry) -> Self {
        Self::with_seed(config, geometry, rand::rng().random())
    }

    /// Creates a setup that will deal the layout for `seed`.
    #[instrument]
    pub fn with_seed(config: RoundConfig, geometry: TableGeometry, seed: u64) -> Self {
        Self {
            config,
            geometry,
            seed,
        }
    }

    /// Seed the deal will use.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Always `Dealing`.
    pub fn phase(&self) -> RoundPhase {
        RoundPhase::Dealing
    }

    /// Shuffles and deals, consuming the setup.
    #[instrument(skip(self), fields(seed = self.seed))]
    pub fn deal(self) -> Result<RoundInProgress, DealError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut deck = Deck::shuffled(&mut rng);
        let tableau = deal(&mut deck, &mut rng)?;
        info!("Round dealt");
        Ok(RoundInProgress::new(
            self.config,
            self.geometry,
            Some(self.seed),
            tableau,
            Foundations::new(),
        ))
    }
}

/// Deals a new round, with `seed` if given or a random one otherwise.
#[instrument]
pub fn start_round(
    config: RoundConfig,
    geometry: TableGeometry,
    seed: Option<u64>,
) -> Result<RoundInProgress, DealError> {
    match seed {
        Some(seed) => RoundSetup::with_seed(config, geometry, seed),
        None => RoundSetup::new(config, geometry),
    }
    .deal()
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Report of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The applied move.
    pub mv: Move,
    /// Column the card left.
    pub source_column: usize,
    /// Points awarded (zero for tableau moves).
    pub points: u32,
}

/// Active round: accepts moves, undo and ticks.
#[derive(Debug, Clone)]
pub struct RoundInProgress {
    config: RoundConfig,
    geometry: TableGeometry,
    seed: Option<u64>,
    tableau: Tableau,
    foundations: Foundations,
    score: u32,
    clock: RoundClock,
    undo: UndoManager,
    placement: VisualPlacement,
    moves_made: u32,
}

impl RoundInProgress {
    fn new(
        config: RoundConfig,
        geometry: TableGeometry,
        seed: Option<u64>,
        tableau: Tableau,
        foundations: Foundations,
    ) -> Self {
        let placement = VisualPlacement::from_layout(&geometry, &tableau, &foundations);
        let score = (foundations.card_count() as u32).saturating_mul(config.foundation_score());
        Self {
            clock: RoundClock::new(config.time_limit()),
            undo: UndoManager::new(config.undo_budget()),
            config,
            geometry,
            seed,
            tableau,
            foundations,
            score,
            placement,
            moves_made: 0,
        }
    }

    /// Starts an active round from an explicit layout.
    ///
    /// The layout must hold every card exactly once and foundations must
    /// be in sequence. Score starts at the award for cards already on the
    /// foundations.
    #[instrument(skip(tableau, foundations))]
    pub fn from_layout(
        config: RoundConfig,
        geometry: TableGeometry,
        tableau: Tableau,
        foundations: Foundations,
    ) -> Result<Self, DealError> {
        if !ConservationInvariant::holds_for(&tableau, &foundations) {
            return Err(DealError::InvariantViolation(format!(
                "layout does not hold every card exactly once (missing {:?})",
                ConservationInvariant::missing(&tableau, &foundations)
            )));
        }
        if !FoundationSequenceInvariant::holds_for(&foundations) {
            return Err(DealError::InvariantViolation(
                "foundations are not ace-upward runs".to_string(),
            ));
        }
        Ok(Self::new(config, geometry, None, tableau, foundations))
    }

    /// Tableau columns.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Foundation piles.
    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Round settings.
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Table geometry used for placement and hit-testing.
    pub fn geometry(&self) -> &TableGeometry {
        &self.geometry
    }

    /// Seed of the deal, if the round was dealt from one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The round clock.
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    /// Undos left.
    pub fn undo_budget(&self) -> u32 {
        self.undo.budget()
    }

    /// Whether undo would currently change anything.
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    /// Undo bookkeeping.
    pub fn undo_manager(&self) -> &UndoManager {
        &self.undo
    }

    /// Where each card is drawn.
    pub fn placement(&self) -> &VisualPlacement {
        &self.placement
    }

    /// Number of moves applied, net of undos.
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Always `Active`.
    pub fn phase(&self) -> RoundPhase {
        RoundPhase::Active
    }

    /// Every legal move from the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.tableau, &self.foundations)
    }

    /// Deep copy of the undoable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tableau: self.tableau.clone(),
            foundations: self.foundations.clone(),
            score: self.score,
            placement: self.placement.clone(),
        }
    }

    /// Captures the pre-move state before a gesture tries a move.
    #[instrument(level = "debug", skip(self))]
    pub fn begin_speculative_move(&mut self) {
        let snapshot = self.snapshot();
        self.undo.begin_speculative(snapshot);
    }

    /// Drops the snapshot of a rejected attempt.
    #[instrument(level = "debug", skip(self))]
    pub fn discard_speculative(&mut self) {
        self.undo.discard_speculative();
    }

    /// Validates and applies a move.
    ///
    /// On success the card moves, foundation moves score, and any pending
    /// snapshot becomes undoable. On failure nothing changes.
    #[instrument(skip(self), fields(mv = %mv, score = self.score))]
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let source_column = MoveContract::pre(self, &mv)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let card = self
            .tableau
            .column_mut(source_column)
            .and_then(|column| column.pop())
            .ok_or(MoveError::NotMovable(mv.card))?;

        let points = match mv.destination {
            Destination::Column(index) => {
                if let Some(column) = self.tableau.column_mut(index) {
                    column.push(card);
                }
                0
            }
            Destination::Foundation(suit) => {
                self.foundations.push(suit, card);
                self.config.foundation_score()
            }
        };
        self.score = self.score.saturating_add(points);
        self.moves_made += 1;
        self.placement
            .relayout(&self.geometry, &self.tableau, &self.foundations);

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            tracing::warn!(error = %e, "Move broke an invariant; rolling back");
            *self = before;
            return Err(e);
        }

        self.undo.commit_speculative();
        debug!(points, score = self.score, "Move applied");

        Ok(MoveReport {
            mv,
            source_column,
            points,
        })
    }

    /// Captures a snapshot, applies `mv`, and discards the snapshot if illegal.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn try_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        self.begin_speculative_move();
        let result = self.apply_move(mv);
        if result.is_err() {
            self.discard_speculative();
        }
        result
    }

    /// Restores the most recent snapshot, spending one undo.
    #[instrument(skip(self), fields(budget = self.undo.budget()))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        let snapshot = self.undo.undo()?;
        self.tableau = snapshot.tableau;
        self.foundations = snapshot.foundations;
        self.score = snapshot.score;
        self.placement = snapshot.placement;
        self.moves_made = self.moves_made.saturating_sub(1);
        info!(score = self.score, budget = self.undo.budget(), "Undo applied");
        Ok(())
    }

    /// Draws `card` at `at` while it is dragged.
    pub fn set_card_position(&mut self, card: Card, at: Point) {
        self.placement.set_position(card, at);
    }

    /// Records wall-clock time since the round started.
    pub fn record_elapsed(&mut self, elapsed: Duration) {
        self.clock.update(elapsed);
    }

    /// Terminal outcome the round has reached, if any.
    ///
    /// Checked in priority order: time out, then win, then stuck.
    #[instrument(level = "trace", skip(self))]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.clock.is_expired() {
            Some(Outcome::TimedOut)
        } else if rules::is_won(&self.tableau) {
            Some(Outcome::Won)
        } else if !rules::has_any_legal_move(&self.tableau, &self.foundations) {
            Some(Outcome::Stuck)
        } else {
            None
        }
    }

    /// Advances the clock and checks for the end of the round.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(mut self, elapsed: Duration) -> TickResult {
        self.record_elapsed(elapsed);
        match self.outcome() {
            None => TickResult::InProgress(self),
            Some(outcome) => {
                info!(%outcome, score = self.score, "Round finished");
                TickResult::Finished(self.finish(outcome))
            }
        }
    }

    /// Ends the round early with the given outcome.
    fn finish(self, outcome: Outcome) -> RoundFinished {
        RoundFinished {
            config: self.config,
            geometry: self.geometry,
            seed: self.seed,
            tableau: self.tableau,
            foundations: self.foundations,
            score: self.score,
            elapsed: self.clock.elapsed(),
            moves_made: self.moves_made,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round over; the outcome is always present.
#[derive(Debug, Clone)]
pub struct RoundFinished {
    config: RoundConfig,
    geometry: TableGeometry,
    seed: Option<u64>,
    tableau: Tableau,
    foundations: Foundations,
    score: u32,
    elapsed: Duration,
    moves_made: u32,
    outcome: Outcome,
}

impl RoundFinished {
    /// How the round ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Final score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Time played.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Moves applied, net of undos.
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Seed of the deal, if known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Final tableau.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Final foundations.
    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    /// Terminal phase matching the outcome.
    pub fn phase(&self) -> RoundPhase {
        self.outcome.into()
    }

    /// A new round with a fresh seed (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        RoundSetup::new(self.config, self.geometry)
    }

    /// The same deal again, when the seed is known.
    #[instrument(skip(self))]
    pub fn replay(self) -> Option<RoundSetup> {
        let seed = self.seed?;
        Some(RoundSetup::with_seed(self.config, self.geometry, seed))
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of a tick.
#[derive(Debug)]
pub enum TickResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::test_support::ladder_round;

    fn in_progress(result: TickResult) -> RoundInProgress {
        match result {
            TickResult::InProgress(round) => round,
            TickResult::Finished(finished) => panic!("round ended: {}", finished.outcome()),
        }
    }

    fn finished(result: TickResult) -> RoundFinished {
        match result {
            TickResult::Finished(finished) => finished,
            TickResult::InProgress(_) => panic!("round still in progress"),
        }
    }

    #[test]
    fn test_seeded_setup_deals_active_round() {
        let setup = RoundSetup::with_seed(RoundConfig::new(), TableGeometry::default(), 5);
        assert_eq!(setup.phase(), RoundPhase::Dealing);
        let round = setup.deal().unwrap();
        assert_eq!(round.phase(), RoundPhase::Active);
        assert_eq!(round.seed(), Some(5));
        assert_eq!(round.score(), 0);
        assert_eq!(round.tableau().card_count(), 52);
        assert_eq!(round.placement().len(), 52);
    }

    #[test]
    fn test_foundation_move_scores_fifty() {
        let mut round = ladder_round();
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let report = round.apply_move(Move::to_foundation(ace)).unwrap();
        assert_eq!(report.points, 50);
        assert_eq!(report.source_column, 0);
        assert_eq!(round.score(), 50);
        assert_eq!(round.foundations().top(Suit::Hearts), Some(ace));
    }

    #[test]
    fn test_tableau_move_is_free() {
        let mut round = ladder_round();
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let report = round.apply_move(Move::to_column(ace, 1)).unwrap();
        assert_eq!(report.points, 0);
        assert_eq!(round.score(), 0);
        assert_eq!(round.tableau().columns()[1].top(), Some(ace));
        assert_eq!(
            round.placement().position(ace),
            Some(round.geometry().column_card_origin(1, 4))
        );
    }

    #[test]
    fn test_illegal_move_changes_nothing() {
        let mut round = ladder_round();
        let before = round.snapshot();
        let two = Card::new(Rank::Two, Suit::Hearts);
        assert!(round.try_move(Move::to_foundation(two)).is_err());
        assert_eq!(round.snapshot(), before);
        assert_eq!(round.undo_manager().depth(), 0);
        assert!(!round.undo_manager().has_pending());
    }

    #[test]
    fn test_undo_restores_piles_score_and_placement() {
        let mut round = ladder_round();
        let before = round.snapshot();
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        round.try_move(Move::to_foundation(ace)).unwrap();
        assert_eq!(round.score(), 50);
        round.undo().unwrap();
        assert_eq!(round.snapshot(), before);
        assert_eq!(round.undo_budget(), 2);
    }

    #[test]
    fn test_undo_does_not_alias_live_state() {
        let mut round = ladder_round();
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        round.try_move(Move::to_column(ace, 1)).unwrap();
        round.undo().unwrap();
        // Moving again after undo must not disturb anything still stored.
        round.try_move(Move::to_column(ace, 1)).unwrap();
        round.undo().unwrap();
        assert_eq!(round.tableau().columns()[0].top(), Some(ace));
        assert_eq!(round.tableau().columns()[1].len(), 4);
    }

    #[test]
    fn test_tick_times_out_before_win_or_stuck() {
        let round = ladder_round();
        let limit = round.clock().limit();
        let done = finished(round.tick(limit));
        assert_eq!(done.outcome(), Outcome::TimedOut);
        assert_eq!(done.phase(), RoundPhase::TimedOut);
    }

    #[test]
    fn test_tick_continues_while_moves_remain() {
        let round = ladder_round();
        let round = in_progress(round.tick(Duration::from_secs(1)));
        assert_eq!(round.clock().elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn test_full_clearance_wins() {
        let mut round = ladder_round();
        // Ladder: column r holds rank r as spades, clubs, diamonds, hearts
        // (bottom to top). Take every rank up, suit by suit from the top.
        for rank in 0..13 {
            for _ in 0..4 {
                let card = round.tableau().columns()[rank].top().unwrap();
                round.apply_move(Move::to_foundation(card)).unwrap();
            }
        }
        assert_eq!(round.score(), 52 * 50);
        let done = finished(round.tick(Duration::from_secs(1)));
        assert_eq!(done.outcome(), Outcome::Won);
        assert_eq!(done.score(), 2600);
    }

    #[test]
    fn test_replay_keeps_seed_restart_does_not_need_it() {
        let round = start_round(RoundConfig::new(), TableGeometry::default(), Some(11)).unwrap();
        let limit = round.clock().limit();
        let done = finished(round.tick(limit));
        let again = done.clone().replay().unwrap();
        assert_eq!(again.seed(), 11);
        assert_eq!(done.restart().phase(), RoundPhase::Dealing);
    }

    #[test]
    fn test_from_layout_rejects_missing_cards() {
        let result = RoundInProgress::from_layout(
            RoundConfig::new(),
            TableGeometry::default(),
            Tableau::empty(),
            Foundations::new(),
        );
        assert!(matches!(result, Err(DealError::InvariantViolation(_))));
    }

    #[test]
    fn test_move_rejected_once_clock_expires() {
        let mut round = ladder_round();
        round.record_elapsed(Duration::from_secs(10_000));
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(round.try_move(Move::to_foundation(ace)), Err(MoveError::RoundOver));
    }
}
