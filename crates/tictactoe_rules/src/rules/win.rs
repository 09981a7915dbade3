//! Win detection logic for tic-tac-toe.

use super::super::{Board, Column, Player, Position, Row};
use tracing::instrument;

const fn at(row: Row, column: Column) -> Position {
    Position::new(row, column)
}

/// The 8 lines that win when all three cells hold the same mark.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [
        at(Row::First, Column::First),
        at(Row::First, Column::Second),
        at(Row::First, Column::Third),
    ],
    [
        at(Row::Second, Column::First),
        at(Row::Second, Column::Second),
        at(Row::Second, Column::Third),
    ],
    [
        at(Row::Third, Column::First),
        at(Row::Third, Column::Second),
        at(Row::Third, Column::Third),
    ],
    // Columns
    [
        at(Row::First, Column::First),
        at(Row::Second, Column::First),
        at(Row::Third, Column::First),
    ],
    [
        at(Row::First, Column::Second),
        at(Row::Second, Column::Second),
        at(Row::Third, Column::Second),
    ],
    [
        at(Row::First, Column::Third),
        at(Row::Second, Column::Third),
        at(Row::Third, Column::Third),
    ],
    // Diagonals
    [
        at(Row::First, Column::First),
        at(Row::Second, Column::Second),
        at(Row::Third, Column::Third),
    ],
    [
        at(Row::First, Column::Third),
        at(Row::Second, Column::Second),
        at(Row::Third, Column::First),
    ],
];

/// Returns the first completed line and the player who owns it.
#[instrument]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Player)> {
    WINNING_LINES
        .into_iter()
        .find_map(|line| owner(board, line).map(|player| (line, player)))
}

fn owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Some(mark) if board.get(b) == Some(mark) && board.get(c) == Some(mark) => {
            Some(Player::from(mark))
        }
        _ => None,
    }
}

/// Returns a completed line that passes through `position`, with its owner.
///
/// After a move this is the line the move finished, if any, regardless of
/// lines that were already on the board.
#[instrument]
pub fn winning_line_through(
    board: &Board,
    position: Position,
) -> Option<([Position; 3], Player)> {
    WINNING_LINES
        .into_iter()
        .filter(|line| line.contains(&position))
        .find_map(|line| owner(board, line).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}
