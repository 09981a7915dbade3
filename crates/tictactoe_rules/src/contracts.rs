//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(turn, position)} apply {Q(placement)}`.

use super::error::MoveError;
use super::invariants::{InvariantSet, Placement, PlacementInvariants};
use super::{Position, Turn};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for a state transition.
pub trait Contract {
    /// State the action is attempted against.
    type State;
    /// Attempted action.
    type Action;
    /// Record of an applied action.
    type Outcome;

    /// Checks preconditions before applying the action.
    fn pre(state: &Self::State, action: &Self::Action) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(outcome: &Self::Outcome) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when the cell holds a mark.
    #[instrument(skip(turn))]
    pub fn check(position: Position, turn: &Turn) -> Result<(), MoveError> {
        if turn.board().is_occupied(position) {
            Err(MoveError::CellOccupied(position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a move.
///
/// Turn order needs no check: a [`Turn`] is only ever issued to the
/// player on move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(turn))]
    pub fn check(position: Position, turn: &Turn) -> Result<(), MoveError> {
        CellIsEmpty::check(position, turn)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move attempts.
///
/// Preconditions:
/// - Cell must be empty
///
/// Postconditions:
/// - Only the marked cell changed
/// - The marked cell was empty and now holds the mover's mark
/// - Mark counts moved by exactly one for the mover
pub struct MoveContract;

impl Contract for MoveContract {
    type State = Turn;
    type Action = Position;
    type Outcome = Placement;

    fn pre(turn: &Turn, position: &Position) -> Result<(), MoveError> {
        LegalMove::check(*position, turn)
    }

    fn post(step: &Placement) -> Result<(), MoveError> {
        PlacementInvariants::check_all(step).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
