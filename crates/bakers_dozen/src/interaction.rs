//! Pointer gestures turned into move attempts.
//!
//! The controller owns only the drag in progress. Legality, scoring and
//! undo bookkeeping stay with [`RoundInProgress`].

use crate::action::{Destination, Move, MoveError};
use crate::card::{Card, Suit};
use crate::geometry::{Point, TableGeometry};
use crate::table::Tableau;
use crate::typestate::{MoveReport, RoundInProgress};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Default window for two presses to count as a double click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 400;

/// Pointer input in table coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    /// Button pressed.
    PointerDown(Point),
    /// Pointer moved with the button held.
    PointerMove(Point),
    /// Button released.
    PointerUp(Point),
    /// Second press on the same spot inside the double-click window.
    DoubleClick(Point),
}

/// What a gesture did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing under the pointer, or no drag to continue.
    Ignored,
    /// A top card was picked up.
    Picked(Card),
    /// The dragged card followed the pointer.
    Dragged(Card),
    /// A legal move was applied.
    Moved(MoveReport),
    /// The attempt was rejected and the card returned to its origin.
    SnappedBack {
        /// The card that returned.
        card: Card,
        /// Why the move was refused; `None` when nothing was under the drop.
        reason: Option<MoveError>,
    },
}

/// A card being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// The dragged card.
    pub card: Card,
    /// Column it was lifted from.
    pub source_column: usize,
    /// Where it was drawn before the drag.
    pub origin: Point,
    /// Pointer position relative to the card's origin.
    pub offset: Point,
}

/// Turns gestures into move attempts on a round.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    drag: Option<DragState>,
}

impl InteractionController {
    /// Controller with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The drag in progress, if any.
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Applies one gesture to `round`.
    #[instrument(skip(self, round))]
    pub fn apply(&mut self, round: &mut RoundInProgress, gesture: Gesture) -> GestureOutcome {
        match gesture {
            Gesture::PointerDown(at) => self.pointer_down(round, at),
            Gesture::PointerMove(at) => self.pointer_move(round, at),
            Gesture::PointerUp(at) => self.pointer_up(round, at),
            Gesture::DoubleClick(at) => self.double_click(round, at),
        }
    }

    /// Abandons any drag, returning the card to its origin.
    #[instrument(skip(self, round))]
    pub fn cancel(&mut self, round: &mut RoundInProgress) -> Option<Card> {
        let drag = self.drag.take()?;
        round.discard_speculative();
        round.set_card_position(drag.card, drag.origin);
        Some(drag.card)
    }

    fn pointer_down(&mut self, round: &mut RoundInProgress, at: Point) -> GestureOutcome {
        self.cancel(round);
        let Some((source_column, card, origin)) = top_card_at(round, at) else {
            return GestureOutcome::Ignored;
        };
        round.begin_speculative_move();
        self.drag = Some(DragState {
            card,
            source_column,
            origin,
            offset: at.offset_from(origin),
        });
        debug!(%card, source_column, "Picked up card");
        GestureOutcome::Picked(card)
    }

    fn pointer_move(&mut self, round: &mut RoundInProgress, at: Point) -> GestureOutcome {
        match self.drag {
            Some(drag) => {
                round.set_card_position(drag.card, at.offset_from(drag.offset));
                GestureOutcome::Dragged(drag.card)
            }
            None => GestureOutcome::Ignored,
        }
    }

    fn pointer_up(&mut self, round: &mut RoundInProgress, at: Point) -> GestureOutcome {
        let Some(drag) = self.drag.take() else {
            return GestureOutcome::Ignored;
        };
        let target = drop_target(round.geometry(), round.tableau(), at, drag.source_column);
        let Some(destination) = target else {
            return snap_back(round, drag, None);
        };
        match round.apply_move(Move::new(drag.card, destination)) {
            Ok(report) => GestureOutcome::Moved(report),
            Err(e) => snap_back(round, drag, Some(e)),
        }
    }

    fn double_click(&mut self, round: &mut RoundInProgress, at: Point) -> GestureOutcome {
        self.cancel(round);
        let Some((_, card, _)) = top_card_at(round, at) else {
            return GestureOutcome::Ignored;
        };
        match round.try_move(Move::to_foundation(card)) {
            Ok(report) => GestureOutcome::Moved(report),
            Err(e) => {
                debug!(%card, error = %e, "Double click did not reach a foundation");
                GestureOutcome::SnappedBack {
                    card,
                    reason: Some(e),
                }
            }
        }
    }
}

fn snap_back(round: &mut RoundInProgress, drag: DragState, reason: Option<MoveError>) -> GestureOutcome {
    round.discard_speculative();
    round.set_card_position(drag.card, drag.origin);
    debug!(card = %drag.card, ?reason, "Snapped back");
    GestureOutcome::SnappedBack {
        card: drag.card,
        reason,
    }
}

/// The column top card drawn under `at`, with its column and position.
pub fn top_card_at(round: &RoundInProgress, at: Point) -> Option<(usize, Card, Point)> {
    let geometry = round.geometry();
    round
        .tableau()
        .columns()
        .iter()
        .enumerate()
        .find_map(|(index, column)| {
            let card = column.top()?;
            let origin = round.placement().position(card)?;
            geometry
                .card_rect(origin)
                .contains(at)
                .then_some((index, card, origin))
        })
}

/// Pile whose home slot contains `at`.
///
/// Foundation slots win over column slots. The source column never
/// matches, so dropping a card back where it came from is not a move.
pub fn drop_target(
    geometry: &TableGeometry,
    tableau: &Tableau,
    at: Point,
    source_column: usize,
) -> Option<Destination> {
    if let Some(suit) = Suit::iter().find(|&suit| geometry.foundation_slot(suit).contains(at)) {
        return Some(Destination::Foundation(suit));
    }
    tableau
        .columns()
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != source_column)
        .find(|(index, column)| geometry.column_slot(*index, column.len()).contains(at))
        .map(|(index, _)| Destination::Column(index))
}

/// Detects double clicks from a stream of presses.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window: Duration,
    last: Option<(Point, Duration)>,
}

impl ClickTracker {
    /// Tracker treating presses `window_ms` apart or closer as a double click.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: Duration::from_millis(window_ms),
            last: None,
        }
    }

    /// Records a press at `at`, `now` after some fixed start.
    ///
    /// Returns true when it completes a double click. A completed double
    /// click is forgotten, so a third press starts over.
    pub fn press(&mut self, at: Point, now: Duration) -> bool {
        let double = self
            .last
            .is_some_and(|(point, when)| point == at && now.saturating_sub(when) <= self.window);
        self.last = if double { None } else { Some((at, now)) };
        double
    }

    /// Turns a press into the gesture it represents.
    pub fn classify(&mut self, at: Point, now: Duration) -> Gesture {
        if self.press(at, now) {
            Gesture::DoubleClick(at)
        } else {
            Gesture::PointerDown(at)
        }
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_MS)
    }
}
