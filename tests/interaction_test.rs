//! Tests for playing a round entirely through pointer gestures.

mod common;

use bakers_dozen::{
    ClickTracker, Gesture, GestureOutcome, InteractionController, Outcome, Point, RoundConfig,
    RoundInProgress, TickResult,
};
use common::ladder_round;
use std::time::Duration;

/// A point inside the drawn rect of the top card of `column`.
fn top_of(round: &RoundInProgress, column: usize) -> Point {
    let card = round.tableau().columns()[column].top().unwrap();
    let origin = round.placement().position(card).unwrap();
    Point::new(origin.x + 2, origin.y + 1)
}

#[test]
fn test_double_clicks_clear_the_table() {
    let mut round = ladder_round(RoundConfig::new());
    let mut controller = InteractionController::new();
    let mut clicks = ClickTracker::new(400);
    let mut now = Duration::ZERO;

    for column in 0..13 {
        for _ in 0..4 {
            let at = top_of(&round, column);
            // First press picks the card up; releasing in place snaps it back.
            let first = clicks.classify(at, now);
            assert_eq!(first, Gesture::PointerDown(at));
            controller.apply(&mut round, first);
            let up = controller.apply(&mut round, Gesture::PointerUp(at));
            assert!(matches!(up, GestureOutcome::SnappedBack { reason: None, .. }));

            now += Duration::from_millis(100);
            let second = clicks.classify(at, now);
            assert_eq!(second, Gesture::DoubleClick(at));
            let outcome = controller.apply(&mut round, second);
            assert!(matches!(outcome, GestureOutcome::Moved(_)), "{outcome:?}");
            now += Duration::from_millis(1000);
        }
    }

    assert_eq!(round.score(), 2600);
    // Snap-backs never became undo entries; only real moves did.
    assert_eq!(round.undo_manager().depth(), 3);
    match round.tick(Duration::from_secs(30)) {
        TickResult::Finished(done) => assert_eq!(done.outcome(), Outcome::Won),
        TickResult::InProgress(_) => panic!("cleared table should be a win"),
    }
}

#[test]
fn test_drag_between_columns_then_undo() {
    let mut round = ladder_round(RoundConfig::new());
    let mut controller = InteractionController::new();
    let before = round.snapshot();

    let from = top_of(&round, 0);
    let to = top_of(&round, 1);
    controller.apply(&mut round, Gesture::PointerDown(from));
    for step in 1..=4 {
        let at = Point::new(from.x + (to.x - from.x) * step / 4, from.y);
        assert!(matches!(
            controller.apply(&mut round, Gesture::PointerMove(at)),
            GestureOutcome::Dragged(_)
        ));
    }
    let outcome = controller.apply(&mut round, Gesture::PointerUp(to));
    assert!(matches!(outcome, GestureOutcome::Moved(report) if report.source_column == 0));
    assert_eq!(round.tableau().columns()[1].len(), 5);

    round.undo().unwrap();
    assert_eq!(round.snapshot(), before);
}

#[test]
fn test_pointer_up_without_drag_is_ignored() {
    let mut round = ladder_round(RoundConfig::new());
    let mut controller = InteractionController::new();
    let at = top_of(&round, 4);
    assert_eq!(
        controller.apply(&mut round, Gesture::PointerUp(at)),
        GestureOutcome::Ignored
    );
}
