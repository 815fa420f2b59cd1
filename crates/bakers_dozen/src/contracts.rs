//! Contract-based validation for Baker's Dozen moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, move)} apply {Q(before, after)}.

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, RoundInvariants, describe};
use crate::rules::check_move;
use crate::typestate::RoundInProgress;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a passed precondition proves, handed to the transition.
    type Proof;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Proof, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the clock has not run out.
pub struct ClockRunning;

impl ClockRunning {
    /// Rejects moves once no time remains.
    #[instrument(level = "trace", skip(round))]
    pub fn check(round: &RoundInProgress) -> Result<(), MoveError> {
        if round.clock().is_expired() {
            Err(MoveError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the card is movable and the destination accepts it.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Returns the source column when the move is legal.
    #[instrument(level = "trace", skip(round))]
    pub fn check(mv: &Move, round: &RoundInProgress) -> Result<usize, MoveError> {
        check_move(round.tableau(), round.foundations(), mv)
    }
}

/// Postcondition: score never goes down during a round.
pub struct ScoreNonDecreasing;

impl ScoreNonDecreasing {
    /// Compares score across a transition.
    pub fn holds(before: &RoundInProgress, after: &RoundInProgress) -> bool {
        let valid = after.score() >= before.score();
        if !valid {
            warn!(before = before.score(), after = after.score(), "Score decreased");
        }
        valid
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Clock still running
/// - Card on top of a column, destination accepts it
///
/// Postconditions:
/// - Cards conserved, foundations in sequence, score consistent
/// - Score did not decrease
pub struct MoveContract;

impl Contract<RoundInProgress, Move> for MoveContract {
    type Proof = usize;

    fn pre(round: &RoundInProgress, mv: &Move) -> Result<usize, MoveError> {
        ClockRunning::check(round)?;
        LegalPlacement::check(mv, round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), MoveError> {
        RoundInvariants::check_all(after).map_err(|violations| {
            MoveError::InvariantViolation(format!("Postcondition failed: {}", describe(&violations)))
        })?;
        if !ScoreNonDecreasing::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: score decreased".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ladder_round;

    #[test]
    fn test_precondition_accepts_top_card() {
        let round = ladder_round();
        let ace = round.tableau().columns()[0].top().unwrap();
        assert_eq!(MoveContract::pre(&round, &Move::to_foundation(ace)), Ok(0));
    }

    #[test]
    fn test_precondition_rejects_buried_card() {
        let round = ladder_round();
        let buried = round.tableau().columns()[0].bottom().unwrap();
        assert!(matches!(
            MoveContract::pre(&round, &Move::to_foundation(buried)),
            Err(MoveError::NotMovable(_))
        ));
    }

    #[test]
    fn test_precondition_rejects_after_time_runs_out() {
        let mut round = ladder_round();
        round.record_elapsed(round.clock().limit());
        let ace = round.tableau().columns()[0].top().unwrap();
        assert_eq!(
            MoveContract::pre(&round, &Move::to_foundation(ace)),
            Err(MoveError::RoundOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = ladder_round();
        let mut after = before.clone();
        let ace = after.tableau().columns()[0].top().unwrap();
        after.apply_move(Move::to_foundation(ace)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_lower_score() {
        let mut before = ladder_round();
        let ace = before.tableau().columns()[0].top().unwrap();
        before.apply_move(Move::to_foundation(ace)).unwrap();
        let after = ladder_round();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
