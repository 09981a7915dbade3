//! Terminal rendering of boards.

use crate::config::Settings;
use tictactoe_rules::{Board, Column, Position, Row};

/// Renders `board` as a grid.
///
/// Empty cells show their 1-9 number when the settings ask for it, a
/// blank otherwise.
pub fn render_board(board: &Board, settings: &Settings) -> String {
    let mut out = String::new();
    for row in Row::ALL {
        out.push(' ');
        for column in Column::ALL {
            let pos = Position::new(row, column);
            match board.get(pos) {
                Some(mark) => out.push_str(&mark.to_string()),
                None if *settings.show_cell_numbers() => {
                    out.push_str(&(pos.index() + 1).to_string())
                }
                None => out.push(' '),
            }
            if column != Column::Third {
                out.push_str(" | ");
            }
        }
        out.push('\n');
        if row != Row::Third {
            out.push_str("---+---+---\n");
        }
    }
    out
}
