//! First-class invariants for Baker's Dozen.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are checked after every move in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so a state's invariants compose into one check.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

/// Joins violation descriptions into one message.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub mod conservation;
pub mod foundation_sequence;
pub mod king_isolation;
pub mod score_consistent;

pub use conservation::ConservationInvariant;
pub use foundation_sequence::FoundationSequenceInvariant;
pub use king_isolation::KingIsolationInvariant;
pub use score_consistent::ScoreConsistentInvariant;

/// Invariants every active round upholds after each move.
pub type RoundInvariants = (
    ConservationInvariant,
    FoundationSequenceInvariant,
    ScoreConsistentInvariant,
);

/// Invariants a freshly dealt tableau upholds.
pub type DealInvariants = (ConservationInvariant, KingIsolationInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ladder_round;
    use crate::{Move, RoundInProgress};

    #[test]
    fn test_round_invariants_hold_for_fresh_layout() {
        let round = ladder_round();
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_round_invariants_hold_after_moves() {
        let mut round = ladder_round();
        let ace = round.tableau().columns()[0].top().unwrap();
        round.apply_move(Move::to_foundation(ace)).unwrap();
        let next = round.tableau().columns()[0].top().unwrap();
        round.apply_move(Move::to_column(next, 1)).unwrap();
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let round = ladder_round();
        type TwoInvariants = (ConservationInvariant, FoundationSequenceInvariant);
        assert!(<TwoInvariants as InvariantSet<RoundInProgress>>::check_all(&round).is_ok());
    }

    #[test]
    fn test_describe_joins() {
        let text = describe(&[InvariantViolation::new("a"), InvariantViolation::new("b")]);
        assert_eq!(text, "a; b");
    }
}
