//! The game: turn sequencing with notifications.
//!
//! [`Game`] holds nothing but its observer. Board state lives in the
//! [`Turn`] values it hands out, so one `Game` can drive a match from any
//! starting board without tracking anything between moves.

use super::{Board, GameEvent, GameObserver, Position, Turn};
use tracing::{debug, instrument};

/// Tic-tac-toe match driver.
#[derive(Debug)]
pub struct Game<O> {
    observer: O,
}

impl<O: GameObserver> Game<O> {
    /// Creates a game that reports to `observer`.
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    /// Starts play on `board`, fresh or resumed.
    ///
    /// Announces the board first, then the opening turn, which is also
    /// returned.
    #[instrument(skip(self, board))]
    pub fn start(&mut self, board: Board) -> Turn {
        self.observer.on_board_changed(&board);
        let turn = Turn::opening(board);
        debug!(player = %turn.player(), "Game started");
        self.observer.on_next_turn(&turn);
        turn
    }

    /// Plays `turn` at `position` and announces the outcome.
    ///
    /// Returns the next turn: the same player's again if the cell was
    /// taken, the opponent's after an accepted move, or `None` once the
    /// game is won.
    #[instrument(skip(self, turn), fields(player = %turn.player()))]
    pub fn play(&mut self, turn: Turn, position: Position) -> Option<Turn> {
        let (state, events) = turn.apply(position).into_parts();
        for event in &events {
            self.dispatch(event);
        }
        state.into_turn()
    }

    fn dispatch(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BoardChanged(board) => self.observer.on_board_changed(board),
            GameEvent::NextTurn(turn) => self.observer.on_next_turn(turn),
            GameEvent::Ended(winner) => self.observer.on_ended(*winner),
        }
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the game, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
