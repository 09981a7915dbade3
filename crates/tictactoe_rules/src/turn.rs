//! Turns as move capabilities, and the pure transition function.
//!
//! A [`Turn`] is the only way to attempt a move. It is bound to the player
//! on move and the board it was issued over, and it is consumed by the
//! attempt. [`Turn::apply`] is a pure function from that state and a
//! position to the next [`GameState`] plus the events an observer should
//! see, in order.

use super::contracts::{Contract, MoveContract};
use super::{Board, Player, Position, rules};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Capability for one player to attempt one move against one board.
///
/// Only the rules core can mint a turn, always for the player whose move
/// it is. Cloning is allowed so observers may keep snapshots; a stale turn
/// still plays against its own board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    player: Player,
    board: Board,
}

impl Turn {
    pub(crate) fn new(player: Player, board: Board) -> Self {
        Self { player, board }
    }

    /// Opens play on `board` for whichever player is to move.
    ///
    /// See [`rules::player_to_move`].
    pub fn opening(board: Board) -> Self {
        Self::new(rules::player_to_move(&board), board)
    }

    /// Returns the player on move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the board this turn plays against.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Positions this turn can mark.
    pub fn open_positions(&self) -> Vec<Position> {
        rules::open_positions(&self.board)
    }

    /// Attempts to mark `position`, consuming the turn.
    ///
    /// - Occupied cell: the same turn comes back unchanged, announced again.
    /// - Winning move: the game ends with the owner of the completed line.
    ///   A line finished by this move takes precedence over one already on
    ///   a resumed board.
    /// - Otherwise: the opponent gets a turn over the new board.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn apply(self, position: Position) -> Transition {
        if let Err(error) = MoveContract::pre(&self, &position) {
            debug!(%error, "Move rejected, offering the turn again");
            return Transition {
                events: vec![GameEvent::NextTurn(self.clone())],
                state: GameState::AwaitingMove(self),
            };
        }

        let mark = self.player.mark();
        let board = self.board.mark(position, mark);

        #[cfg(debug_assertions)]
        {
            let check = MoveContract::post(&super::invariants::Placement {
                before: self.board,
                after: board,
                position,
                mark,
            });
            debug_assert!(check.is_ok(), "{:?}", check);
        }

        let completed = rules::winning_line_through(&board, position)
            .or_else(|| rules::winning_line(&board));
        if let Some((_, winner)) = completed {
            info!(%winner, "Game won");
            return Transition {
                events: vec![GameEvent::BoardChanged(board), GameEvent::Ended(winner)],
                state: GameState::Ended { winner, board },
            };
        }

        debug!("Move accepted");
        let next = Turn::new(self.player.opponent(), board);
        Transition {
            events: vec![GameEvent::BoardChanged(board), GameEvent::NextTurn(next.clone())],
            state: GameState::AwaitingMove(next),
        }
    }
}

/// Where a game stands between moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameState {
    /// Waiting for the turn's player to move.
    AwaitingMove(Turn),
    /// A line was completed. Terminal.
    Ended {
        /// Owner of the completed line.
        winner: Player,
        /// Final board.
        board: Board,
    },
}

impl GameState {
    /// Returns the pending turn, if the game is still running.
    pub fn turn(&self) -> Option<&Turn> {
        match self {
            GameState::AwaitingMove(turn) => Some(turn),
            GameState::Ended { .. } => None,
        }
    }

    /// Consumes the state, returning the pending turn if any.
    pub fn into_turn(self) -> Option<Turn> {
        match self {
            GameState::AwaitingMove(turn) => Some(turn),
            GameState::Ended { .. } => None,
        }
    }

    /// Returns the winner once the game has ended.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::AwaitingMove(_) => None,
            GameState::Ended { winner, .. } => Some(*winner),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        match self {
            GameState::AwaitingMove(turn) => turn.board(),
            GameState::Ended { board, .. } => board,
        }
    }

    /// Returns true once a line has been completed.
    pub fn is_ended(&self) -> bool {
        matches!(self, GameState::Ended { .. })
    }
}

/// Notification produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// The board changed (or, at start, the initial board).
    BoardChanged(Board),
    /// A player may move.
    NextTurn(Turn),
    /// The game ended with this winner.
    Ended(Player),
}

/// Result of [`Turn::apply`]: the next state and the events that led there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    state: GameState,
    events: Vec<GameEvent>,
}

impl Transition {
    /// Returns the state after the attempt.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the events in the order observers receive them.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Consumes the transition, keeping only the state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Splits the transition into state and events.
    pub fn into_parts(self) -> (GameState, Vec<GameEvent>) {
        (self.state, self.events)
    }
}
