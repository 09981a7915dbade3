//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Hot-seat tic-tac-toe on top of the rules core", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game at this terminal
    Play {
        /// Resume from a board, e.g. "O.X/.../..."
        #[arg(long)]
        board: Option<String>,
    },

    /// Replay moves and print where the game ends up
    Replay {
        /// Cell numbers (1-9) or labels, separated by spaces or commas
        #[arg(long)]
        moves: String,

        /// Starting board, e.g. "O.X/.../..."
        #[arg(long)]
        board: Option<String>,
    },

    /// Print a board and who moves next
    Show {
        /// Board to show, e.g. "O.X/.../..."
        #[arg(long)]
        board: String,
    },
}
