//! First-class invariants for tic-tac-toe move transitions.
//!
//! Invariants are logical properties that must hold for every accepted
//! move. They are checked in debug builds and can be tested independently.

#[cfg(kani)]
mod verification;

pub mod mark_count;
pub mod placed_on_empty;
pub mod single_cell;

pub use mark_count::MarkCountInvariant;
pub use placed_on_empty::PlacedOnEmptyInvariant;
pub use single_cell::SingleCellInvariant;

use super::{Board, Mark, Position};

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
/// Implemented for triples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// One accepted move: the board before and after `mark` went to `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Board the turn was issued over.
    pub before: Board,
    /// Board after the move.
    pub after: Board,
    /// Cell that was marked.
    pub position: Position,
    /// Mark that was placed.
    pub mark: Mark,
}

/// All placement invariants as a composable set.
pub type PlacementInvariants = (
    SingleCellInvariant,
    PlacedOnEmptyInvariant,
    MarkCountInvariant,
);

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{Column, Row};

    pub(crate) fn placement(before: Board, position: Position, mark: Mark) -> Placement {
        Placement {
            before,
            after: before.mark(position, mark),
            position,
            mark,
        }
    }

    #[test]
    fn test_invariant_set_holds_for_legal_move() {
        let pos = Position::new(Row::Second, Column::Second);
        let step = placement(Board::empty(), pos, Mark::O);
        assert!(PlacementInvariants::check_all(&step).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let pos = Position::new(Row::Second, Column::Second);
        let mut step = placement(Board::empty(), pos, Mark::O);

        // Corrupt the board
        step.after = step
            .after
            .mark(Position::new(Row::First, Column::First), Mark::X);

        let violations = PlacementInvariants::check_all(&step).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == SingleCellInvariant::description())
        );
    }
}
