//! Board coordinates for tic-tac-toe.
//!
//! A [`Position`] is built from a [`Row`] and a [`Column`], each of which
//! has exactly three values, so an out-of-range cell cannot be expressed.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the three board rows, top to bottom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Row {
    /// Top row.
    First,
    /// Middle row.
    Second,
    /// Bottom row.
    Third,
}

/// One of the three board columns, left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Column {
    /// Left column.
    First,
    /// Center column.
    Second,
    /// Right column.
    Third,
}

impl Row {
    /// All rows, top to bottom.
    pub const ALL: [Row; 3] = [Row::First, Row::Second, Row::Third];

    /// Zero-based index of the row.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; 3] = [Column::First, Column::Second, Column::Third];

    /// Zero-based index of the column.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column for a zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A cell on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: Row,
    column: Column,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::new(Row::First, Column::First),
        Position::new(Row::First, Column::Second),
        Position::new(Row::First, Column::Third),
        Position::new(Row::Second, Column::First),
        Position::new(Row::Second, Column::Second),
        Position::new(Row::Second, Column::Third),
        Position::new(Row::Third, Column::First),
        Position::new(Row::Third, Column::Second),
        Position::new(Row::Third, Column::Third),
    ];

    /// Creates a position from a row and a column.
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Returns the row.
    pub fn row(self) -> Row {
        self.row
    }

    /// Returns the column.
    pub fn column(self) -> Column {
        self.column
    }

    /// Row-major board index (0-8).
    pub const fn index(self) -> usize {
        self.row.index() * 3 + self.column.index()
    }

    /// Creates a position from a row-major board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Parses a 1-based cell number ("1"-"9") or a label.
    ///
    /// Labels match case-insensitively, and spaces or underscores may stand
    /// in for the hyphen: "top left", "TOP_LEFT" and "Top-left" are the same
    /// cell.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(number) = s.parse::<usize>() {
            return number.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = s.to_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.label().to_lowercase() == wanted)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_all_covers_every_row_and_column() {
        for row in Row::iter() {
            for column in Column::iter() {
                assert!(Position::ALL.contains(&Position::new(row, column)));
            }
        }
    }

    #[test]
    fn test_parse_numbers_are_one_based() {
        assert_eq!(
            Position::from_label_or_number("1"),
            Some(Position::new(Row::First, Column::First))
        );
        assert_eq!(
            Position::from_label_or_number(" 9 "),
            Some(Position::new(Row::Third, Column::Third))
        );
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("10"), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            Position::from_label_or_number("center"),
            Some(Position::new(Row::Second, Column::Second))
        );
        assert_eq!(
            Position::from_label_or_number("top center"),
            Some(Position::new(Row::First, Column::Second))
        );
        assert_eq!(
            Position::from_label_or_number("BOTTOM_RIGHT"),
            Some(Position::new(Row::Third, Column::Third))
        );
        assert_eq!(Position::from_label_or_number("corner"), None);
    }

    #[test]
    fn test_display_uses_label() {
        let pos = Position::new(Row::Second, Column::Third);
        assert_eq!(pos.to_string(), "Middle-right");
    }
}
