//! Terminal front end for the tic-tac-toe rules core.
//!
//! Everything the rules core leaves to its embedder lives here: settings,
//! board notation, rendering, command summaries and the hot-seat input loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod notation;
pub mod report;
pub mod session;
pub mod view;

pub use config::{ConfigError, Settings};
pub use notation::{NotationError, format_board, parse_board, parse_moves};
pub use report::{write_position, write_replay};
pub use session::{SessionEnd, play};
pub use view::render_board;
