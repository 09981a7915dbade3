//! One-shot summaries for the `replay` and `show` commands.

use crate::config::Settings;
use crate::view::render_board;
use std::io::{self, Write};
use tictactoe_rules::{Board, GameState, Turn, rules};

/// Writes the board a replay stopped on, then who won or who moves next.
pub fn write_replay<W: Write>(
    state: &GameState,
    settings: &Settings,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{}", render_board(state.board(), settings))?;
    match state {
        GameState::Ended { winner, .. } => writeln!(out, "{} wins.", winner),
        GameState::AwaitingMove(turn) => writeln!(out, "{} to move.", turn.player()),
    }
}

/// Writes `board`, then the owner of a completed line or who moves next.
pub fn write_position<W: Write>(
    board: &Board,
    settings: &Settings,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "{}", render_board(board, settings))?;
    match rules::winner(board) {
        Some(winner) => writeln!(out, "{} has three in a row.", winner),
        None => writeln!(out, "{} to move.", Turn::opening(*board).player()),
    }
}
