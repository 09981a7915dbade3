//! Notification sinks for a running game.

use super::{Board, GameEvent, Player, Turn};
use std::sync::mpsc::Sender;
use tracing::warn;

/// Receives a game's notifications, synchronously and in order.
///
/// `on_board_changed` fires at start and after every accepted move.
/// `on_next_turn` fires at start and after every move that does not end the
/// game, including rejected ones. `on_ended` fires once, and nothing
/// follows it.
pub trait GameObserver {
    /// The board changed.
    fn on_board_changed(&mut self, board: &Board);

    /// A player may move.
    fn on_next_turn(&mut self, turn: &Turn);

    /// A line was completed.
    fn on_ended(&mut self, winner: Player);
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_board_changed(&mut self, board: &Board) {
        (**self).on_board_changed(board);
    }

    fn on_next_turn(&mut self, turn: &Turn) {
        (**self).on_next_turn(turn);
    }

    fn on_ended(&mut self, winner: Player) {
        (**self).on_ended(winner);
    }
}

/// Ignores every notification.
impl GameObserver for () {
    fn on_board_changed(&mut self, _board: &Board) {}

    fn on_next_turn(&mut self, _turn: &Turn) {}

    fn on_ended(&mut self, _winner: Player) {}
}

/// Records every notification as an event.
impl GameObserver for Vec<GameEvent> {
    fn on_board_changed(&mut self, board: &Board) {
        self.push(GameEvent::BoardChanged(*board));
    }

    fn on_next_turn(&mut self, turn: &Turn) {
        self.push(GameEvent::NextTurn(turn.clone()));
    }

    fn on_ended(&mut self, winner: Player) {
        self.push(GameEvent::Ended(winner));
    }
}

/// Forwards notifications to a caller-owned loop.
///
/// A dropped receiver is logged and otherwise ignored; the game itself
/// cannot fail.
impl GameObserver for Sender<GameEvent> {
    fn on_board_changed(&mut self, board: &Board) {
        forward(self, GameEvent::BoardChanged(*board));
    }

    fn on_next_turn(&mut self, turn: &Turn) {
        forward(self, GameEvent::NextTurn(turn.clone()));
    }

    fn on_ended(&mut self, winner: Player) {
        forward(self, GameEvent::Ended(winner));
    }
}

fn forward(tx: &Sender<GameEvent>, event: GameEvent) {
    if let Err(e) = tx.send(event) {
        warn!(event = ?e.0, "Game event receiver dropped");
    }
}

/// Observer built from three closures.
pub struct Callbacks<B, T, E> {
    on_board_changed: B,
    on_next_turn: T,
    on_ended: E,
}

impl<B, T, E> Callbacks<B, T, E>
where
    B: FnMut(&Board),
    T: FnMut(&Turn),
    E: FnMut(Player),
{
    /// Creates an observer from one closure per notification.
    pub fn new(on_board_changed: B, on_next_turn: T, on_ended: E) -> Self {
        Self {
            on_board_changed,
            on_next_turn,
            on_ended,
        }
    }
}

impl<B, T, E> GameObserver for Callbacks<B, T, E>
where
    B: FnMut(&Board),
    T: FnMut(&Turn),
    E: FnMut(Player),
{
    fn on_board_changed(&mut self, board: &Board) {
        (self.on_board_changed)(board);
    }

    fn on_next_turn(&mut self, turn: &Turn) {
        (self.on_next_turn)(turn);
    }

    fn on_ended(&mut self, winner: Player) {
        (self.on_ended)(winner);
    }
}

impl<B, T, E> std::fmt::Debug for Callbacks<B, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_sender_forwards_in_order() {
        let (tx, rx) = mpsc::channel();
        let mut observer = tx;

        observer.on_board_changed(&Board::empty());
        observer.on_ended(Player::O);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![GameEvent::BoardChanged(Board::empty()), GameEvent::Ended(Player::O)]
        );
    }

    #[test]
    fn test_sender_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut observer = tx;

        observer.on_ended(Player::X);
    }

    #[test]
    fn test_callbacks_route_each_notification() {
        let mut boards = 0;
        let mut winners = Vec::new();
        {
            let mut observer = Callbacks::new(|_: &Board| boards += 1, |_: &Turn| {}, |p| {
                winners.push(p)
            });
            observer.on_board_changed(&Board::empty());
            observer.on_board_changed(&Board::empty());
            observer.on_ended(Player::X);
        }
        assert_eq!(boards, 2);
        assert_eq!(winners, vec![Player::X]);
    }
}
