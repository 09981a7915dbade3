//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards. Rules are kept apart from board storage
//! and from the turn machinery so each can be tested on its own.

pub mod replay;
pub mod turn_order;
pub mod win;

pub use replay::replay;
pub use turn_order::{open_positions, player_to_move};
pub use win::{WINNING_LINES, winner, winning_line, winning_line_through};
