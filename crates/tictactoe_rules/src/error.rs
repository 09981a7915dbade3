//! Move validation errors.

use super::Position;

/// Why a move attempt was not applied, or why a transition broke a rule.
///
/// Games never hand these to callers for occupied cells; the player is
/// simply offered the turn again. They surface through the contract checks
/// and the logs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell at the position is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// A transition broke a board invariant (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
