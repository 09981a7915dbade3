//! Who moves next, and where they may move.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// Determines the player to move on `board`.
///
/// The player with fewer marks moves; O moves when counts are equal, so O
/// always opens a fresh game.
#[instrument]
pub fn player_to_move(board: &Board) -> Player {
    if board.count(Player::O.mark()) <= board.count(Player::X.mark()) {
        Player::O
    } else {
        Player::X
    }
}

/// Filters positions by board state, returning only empty cells.
#[instrument]
pub fn open_positions(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| !board.is_occupied(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Mark, Row};

    const O: Option<Mark> = Some(Mark::O);
    const X: Option<Mark> = Some(Mark::X);
    const E: Option<Mark> = None;

    #[test]
    fn test_o_opens_fresh_game() {
        assert_eq!(player_to_move(&Board::empty()), Player::O);
    }

    #[test]
    fn test_resume_picks_player_with_fewer_marks() {
        let one_o = Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]);
        assert_eq!(player_to_move(&one_o), Player::X);

        let balanced = Board::from_rows([[O, X, E], [E, E, E], [E, E, E]]);
        assert_eq!(player_to_move(&balanced), Player::O);

        let one_x = Board::from_rows([[E, X, E], [E, E, E], [E, E, E]]);
        assert_eq!(player_to_move(&one_x), Player::O);
    }

    #[test]
    fn test_open_positions_filters_occupied() {
        let board = Board::empty()
            .mark(Position::new(Row::First, Column::First), Mark::O)
            .mark(Position::new(Row::Second, Column::Second), Mark::X);

        let open = open_positions(&board);
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&Position::new(Row::First, Column::First)));
        assert!(!open.contains(&Position::new(Row::Second, Column::Second)));
        assert!(open.contains(&Position::new(Row::Third, Column::Third)));
    }

    #[test]
    fn test_open_positions_empty_board() {
        assert_eq!(open_positions(&Board::empty()), Position::ALL.to_vec());
    }
}
