//! Compact board notation: `"O.X/.../..."`.
//!
//! Three rows separated by `/`, top to bottom; each row is three of
//! `O`, `X` or `.` (empty), left to right. Case is ignored.
//!
//! Move lists are cell numbers or hyphenated labels separated by commas or
//! whitespace: `"1 5 top-right"`.

use derive_more::{Display, Error};
use tictactoe_rules::{Board, Mark, Position};

/// Why a board string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NotationError {
    /// Not exactly three rows.
    #[display("expected 3 rows separated by '/', found {}", _0)]
    RowCount(#[error(not(source))] usize),

    /// A row without exactly three cells.
    #[display("row {} has {} cells, expected 3", row, len)]
    RowLength {
        /// 1-based row number.
        row: usize,
        /// Cells found.
        len: usize,
    },

    /// A character other than `O`, `X` or `.`.
    #[display("unknown symbol '{}' in row {}", symbol, row)]
    Symbol {
        /// 1-based row number.
        row: usize,
        /// Offending character.
        symbol: char,
    },

    /// A move that names no cell.
    #[display("'{}' is not a cell", _0)]
    Move(#[error(not(source))] String),
}

/// Parses a board from notation.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != 3 {
        return Err(NotationError::RowCount(rows.len()));
    }

    let mut cells = [[None; 3]; 3];
    for (r, text) in rows.iter().enumerate() {
        let symbols: Vec<char> = text.trim().chars().collect();
        if symbols.len() != 3 {
            return Err(NotationError::RowLength {
                row: r + 1,
                len: symbols.len(),
            });
        }
        for (c, symbol) in symbols.into_iter().enumerate() {
            cells[r][c] = match symbol.to_ascii_uppercase() {
                'O' => Some(Mark::O),
                'X' => Some(Mark::X),
                '.' => None,
                _ => return Err(NotationError::Symbol { row: r + 1, symbol }),
            };
        }
    }

    Ok(Board::from_rows(cells))
}

/// Formats a board as notation.
pub fn format_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(Mark::O) => 'O',
                    Some(Mark::X) => 'X',
                    None => '.',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Parses a move list.
pub fn parse_moves(s: &str) -> Result<Vec<Position>, NotationError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| NotationError::Move(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_rules::{Column, Position, Row};

    #[test]
    fn test_parse_resumed_board() {
        let board = parse_board("o.x/.../...").unwrap();
        assert_eq!(board.get(Position::new(Row::First, Column::First)), Some(Mark::O));
        assert_eq!(board.get(Position::new(Row::First, Column::Third)), Some(Mark::X));
        assert_eq!(board.count(Mark::O) + board.count(Mark::X), 2);
    }

    #[test]
    fn test_empty_notation() {
        assert_eq!(parse_board(".../.../...").unwrap(), Board::empty());
        assert_eq!(format_board(&Board::empty()), ".../.../...");
    }

    #[test]
    fn test_format_matches_parse() {
        let text = "OX./.O./..X";
        assert_eq!(format_board(&parse_board(text).unwrap()), text);
    }

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("1, 5 top-right\t9").unwrap();
        assert_eq!(
            moves,
            vec![
                Position::new(Row::First, Column::First),
                Position::new(Row::Second, Column::Second),
                Position::new(Row::First, Column::Third),
                Position::new(Row::Third, Column::Third),
            ]
        );
        assert_eq!(parse_moves("1 0"), Err(NotationError::Move("0".to_string())));
        assert_eq!(parse_moves(""), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_board("..../.../..."), Err(NotationError::RowLength { row: 1, len: 4 }));
        assert_eq!(parse_board(".../..."), Err(NotationError::RowCount(2)));
        assert_eq!(
            parse_board(".../.?./..."),
            Err(NotationError::Symbol { row: 2, symbol: '?' })
        );
    }
}
