//! tictactoe - hot-seat tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tictactoe_cli::cli::{Cli, Command};
use tictactoe_cli::{
    SessionEnd, Settings, format_board, parse_board, parse_moves, play, write_position,
    write_replay,
};
use tictactoe_rules::{Board, rules};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { board } => run_play(board, &settings),
        Command::Replay { moves, board } => run_replay(&moves, board, &settings),
        Command::Show { board } => run_show(&board, &settings),
    }
}

fn starting_board(notation: Option<String>) -> Result<Board> {
    match notation {
        Some(text) => parse_board(&text).with_context(|| format!("Invalid board '{}'", text)),
        None => Ok(Board::empty()),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(settings))]
fn run_play(board: Option<String>, settings: &Settings) -> Result<()> {
    let board = starting_board(board)?;
    info!(board = %format_board(&board), "Starting hot-seat game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = play(board, settings, stdin.lock(), &mut stdout)?;

    info!(?end, "Game over");
    if end == SessionEnd::InputClosed {
        writeln!(stdout, "Game abandoned.")?;
    }
    Ok(())
}

/// Replay a move list and print the resulting position
#[instrument(skip(settings))]
fn run_replay(moves: &str, board: Option<String>, settings: &Settings) -> Result<()> {
    let board = starting_board(board)?;
    let moves = parse_moves(moves).context("Invalid move list")?;

    let state = rules::replay(board, &moves);

    write_replay(&state, settings, &mut io::stdout())?;
    Ok(())
}

/// Print a board and whose move it is
#[instrument(skip(settings))]
fn run_show(board: &str, settings: &Settings) -> Result<()> {
    let board = parse_board(board).with_context(|| format!("Invalid board '{}'", board))?;

    write_position(&board, settings, &mut io::stdout())?;
    Ok(())
}
