//! Tic-tac-toe rules core.
//!
//! An embeddable rules engine: board representation, turn sequencing,
//! move validation and win detection. Front ends supply positions and
//! receive notifications; nothing here does I/O.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 grid; marking a cell returns a new board.
//! - **Turn**: single-use capability for the player on move to attempt
//!   one move against one board snapshot.
//! - **Game**: starts play on any board and reports board changes, turns
//!   and the winner to a [`GameObserver`].
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Board, Column, Game, GameEvent, Player, Position, Row};
//!
//! let mut game = Game::new(Vec::<GameEvent>::new());
//! let turn = game.start(Board::empty());
//! assert_eq!(turn.player(), Player::O);
//!
//! let turn = game
//!     .play(turn, Position::new(Row::Second, Column::Second))
//!     .expect("one move cannot win");
//! assert_eq!(turn.player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod invariants;
mod observer;
mod position;
pub mod rules;
mod turn;
mod types;

// Crate-level exports - Domain types
pub use position::{Column, Position, Row};
pub use types::{Board, Mark, Player};

// Crate-level exports - Turns and the transition function
pub use turn::{GameEvent, GameState, Transition, Turn};

// Crate-level exports - Game driver and observers
pub use game::Game;
pub use observer::{Callbacks, GameObserver};

// Crate-level exports - Validation
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract};
pub use error::MoveError;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkCountInvariant, PlacedOnEmptyInvariant,
    Placement, PlacementInvariants, SingleCellInvariant,
};
