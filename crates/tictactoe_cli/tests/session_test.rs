//! Tests for the hot-seat loop driven by scripted input.

use std::io::Cursor;
use tictactoe_cli::{SessionEnd, Settings, parse_board, play};
use tictactoe_rules::{Board, Player};

fn run(board: Board, input: &str) -> (SessionEnd, String) {
    let mut output = Vec::new();
    let end = play(board, &Settings::default(), Cursor::new(input), &mut output)
        .expect("session should not fail");
    (end, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_o_wins_top_row() {
    let (end, output) = run(Board::empty(), "1\n5\n2\n6\n3\n");

    assert_eq!(end, SessionEnd::Won(Player::O));
    assert!(output.contains("O wins!"));
    assert!(output.contains(" O | O | O"));
}

#[test]
fn test_taken_cell_is_reported_and_retried() {
    let (end, output) = run(Board::empty(), "center\ncenter\n1\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(output.contains("Center is already taken."));
    // X retried and took the corner.
    assert!(output.contains(" X | 2 | 3"));
}

#[test]
fn test_unknown_cell_reprompts() {
    let (end, output) = run(Board::empty(), "ten\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(output.contains("'ten' is not a cell."));
    assert_eq!(output.matches("O to move").count(), 2);
}

#[test]
fn test_resumed_board_starts_with_x() {
    let board = parse_board("O../.../...").unwrap();
    let (_, output) = run(board, "");

    assert!(output.contains("X to move"));
}

#[test]
fn test_full_board_without_winner_stops() {
    // O X O / O X X / X O .  -> O to move, last cell draws
    let board = parse_board("OXO/OXX/XO.").unwrap();
    let (end, output) = run(board, "9\n");

    assert_eq!(end, SessionEnd::NoMovesLeft);
    assert!(output.contains("No moves remain."));
}

#[test]
fn test_decided_board_ends_without_prompting() {
    let board = parse_board("OOO/XX./...").unwrap();
    let (end, output) = run(board, "6\n");

    assert_eq!(end, SessionEnd::Won(Player::O));
    assert!(output.contains("O has three in a row."));
    assert!(!output.contains("to move"));
}
