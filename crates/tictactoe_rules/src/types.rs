//! Core domain types for tic-tac-toe.

use super::position::{Column, Position, Row};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol placed in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Mark {
    /// The first player's mark.
    O,
    /// The second player's mark.
    X,
}

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Player {
    /// Player O (moves first on a fresh board).
    O,
    /// Player X.
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::O => Mark::O,
            Player::X => Mark::X,
        }
    }
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::O => Player::O,
            Mark::X => Player::X,
        }
    }
}

/// Immutable 3x3 tic-tac-toe board.
///
/// Marking a cell returns a new board and leaves the receiver untouched,
/// so every board handed out is a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `[row][column]`.
    cells: [[Option<Mark>; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a board holding exactly the given cells.
    ///
    /// Any state is accepted, including ones that could not arise from
    /// legal play, so a game can be resumed from whatever a caller stored.
    pub fn from_rows(cells: [[Option<Mark>; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Returns a new board with `mark` at `position`.
    ///
    /// Occupancy is not checked here; refusing occupied cells is the
    /// game's job.
    #[must_use]
    #[instrument(skip(self))]
    pub fn mark(&self, position: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[position.row().index()][position.column().index()] = Some(mark);
        Self { cells }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells[position.row().index()][position.column().index()]
    }

    /// Checks if a cell holds a mark.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Returns the cells as rows.
    pub fn rows(&self) -> &[[Option<Mark>; 3]; 3] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Mark>)> + '_ {
        Position::ALL.into_iter().map(move |pos| (pos, self.get(pos)))
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty cells shown as their 1-9 number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in Row::ALL {
            for column in Column::ALL {
                let pos = Position::new(row, column);
                match self.get(pos) {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, "{}", pos.index() + 1)?,
                }
                if column != Column::Third {
                    f.write_str("|")?;
                }
            }
            if row != Row::Third {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
