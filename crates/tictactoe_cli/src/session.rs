//! Hot-seat play over a line-oriented terminal.
//!
//! The game reports into a channel and this loop owns the receiving end:
//! it renders what the game announces, and answers each announced turn
//! with the next position read from input.

use crate::config::Settings;
use crate::report::write_position;
use crate::view::render_board;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use tictactoe_rules::{Board, Game, GameEvent, Player, Position, Turn, rules};
use tracing::{debug, info, instrument};

/// How a hot-seat session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player completed a line.
    Won(Player),
    /// Every cell is marked and nobody won.
    NoMovesLeft,
    /// Input ran out before the game finished.
    InputClosed,
}

/// Plays a game from `board`, reading positions from `input`.
///
/// A board that already holds a completed line is shown and ends the
/// session without prompting.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    board: Board,
    settings: &Settings,
    mut input: R,
    output: &mut W,
) -> Result<SessionEnd> {
    if let Some(winner) = rules::winner(&board) {
        info!(%winner, "Board already decided");
        write_position(&board, settings, output)?;
        return Ok(SessionEnd::Won(winner));
    }

    let (tx, rx) = mpsc::channel();
    let mut game = Game::new(tx);
    game.start(board);

    let mut line = String::new();
    let mut attempted: Option<Position> = None;
    loop {
        let (pending, board_changed) = drain(&rx, settings, output)?;
        let turn = match pending {
            Pending::Turn(turn) => turn,
            Pending::Ended(winner) => {
                info!(%winner, "Session finished");
                return Ok(SessionEnd::Won(winner));
            }
        };

        if let Some(position) = attempted.take().filter(|_| !board_changed) {
            writeln!(output, "{} is already taken.", position)?;
        }

        if turn.open_positions().is_empty() {
            writeln!(output, "No moves remain.")?;
            return Ok(SessionEnd::NoMovesLeft);
        }

        let position = loop {
            write!(output, "{} to move (1-9 or a label like 'top left'): ", turn.player())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(SessionEnd::InputClosed);
            }

            match Position::from_label_or_number(&line) {
                Some(position) => break position,
                None => writeln!(output, "'{}' is not a cell.", line.trim())?,
            }
        };

        debug!(%position, "Playing move");
        attempted = Some(position);
        game.play(turn, position);
    }
}

enum Pending {
    Turn(Turn),
    Ended(Player),
}

/// Renders queued events and returns whatever the game is waiting on,
/// plus whether any board change was among them.
fn drain<W: Write>(
    rx: &Receiver<GameEvent>,
    settings: &Settings,
    output: &mut W,
) -> Result<(Pending, bool)> {
    let mut pending = None;
    let mut board_changed = false;
    for event in rx.try_iter() {
        match event {
            GameEvent::BoardChanged(board) => {
                board_changed = true;
                writeln!(output, "{}", render_board(&board, settings))?;
            }
            GameEvent::NextTurn(turn) => pending = Some(Pending::Turn(turn)),
            GameEvent::Ended(winner) => {
                writeln!(output, "{} wins!", winner)?;
                pending = Some(Pending::Ended(winner));
            }
        }
    }
    let pending =
        pending.ok_or_else(|| anyhow::anyhow!("game announced neither a turn nor a winner"))?;
    Ok((pending, board_changed))
}
