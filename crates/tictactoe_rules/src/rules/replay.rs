//! Replaying a sequence of move attempts.

use super::super::{Board, GameState, Position, Turn};
use tracing::{instrument, warn};

/// Replays move attempts from `board` through the pure transition function.
///
/// Attempts on occupied cells are retried by the same player, exactly as
/// in a live game. Replay stops at the first winning move; any attempts
/// after it are ignored.
#[instrument(skip(board))]
pub fn replay(board: Board, positions: &[Position]) -> GameState {
    let mut turn = Turn::opening(board);

    for (played, position) in positions.iter().enumerate() {
        match turn.apply(*position).into_state() {
            GameState::AwaitingMove(next) => turn = next,
            ended @ GameState::Ended { .. } => {
                let ignored = positions.len() - played - 1;
                if ignored > 0 {
                    warn!(ignored, "Game ended before all moves were replayed");
                }
                return ended;
            }
        }
    }

    GameState::AwaitingMove(turn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Mark, Player, Row};

    fn pos(row: Row, column: Column) -> Position {
        Position::new(row, column)
    }

    #[test]
    fn test_replay_alternates_players() {
        let state = replay(
            Board::empty(),
            &[
                pos(Row::Second, Column::Second),
                pos(Row::First, Column::First),
                pos(Row::Third, Column::Third),
            ],
        );

        let turn = state.turn().expect("game should continue");
        assert_eq!(turn.player(), Player::X);
        assert_eq!(turn.board().count(Mark::O), 2);
        assert_eq!(turn.board().count(Mark::X), 1);
    }

    #[test]
    fn test_replay_stops_at_win() {
        let state = replay(
            Board::empty(),
            &[
                pos(Row::First, Column::First),
                pos(Row::Second, Column::Second),
                pos(Row::First, Column::Second),
                pos(Row::Second, Column::Third),
                pos(Row::First, Column::Third),
                // Ignored
                pos(Row::Third, Column::Third),
            ],
        );

        assert_eq!(state.winner(), Some(Player::O));
        assert!(!state.board().is_occupied(pos(Row::Third, Column::Third)));
    }

    #[test]
    fn test_replay_retries_occupied_cell() {
        let center = pos(Row::Second, Column::Second);
        let state = replay(Board::empty(), &[center, center, center]);

        let turn = state.turn().expect("game should continue");
        assert_eq!(turn.player(), Player::X);
        assert_eq!(turn.board(), &Board::empty().mark(center, Mark::O));
    }

    #[test]
    fn test_replay_nothing_is_opening() {
        assert_eq!(
            replay(Board::empty(), &[]),
            GameState::AwaitingMove(Turn::opening(Board::empty()))
        );
    }
}
