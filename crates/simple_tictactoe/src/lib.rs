//! Simple tic-tac-toe - board model and rule engine
//!
//! This crate holds the pure game logic: no I/O beyond formatting.
//!
//! # Architecture
//!
//! - **Cell**: the mark state of one grid position
//! - **Board**: a 3x3 row-major grid with three population strategies
//! - **Rules**: pure evaluation of a board into a [`GameStatus`]
//! - **Render**: text formatting of a board
//!
//! # Example
//!
//! ```
//! use simple_tictactoe::{Board, Outcome, evaluate};
//!
//! let board: Board = "XXXOO____".parse()?;
//! let status = evaluate(&board);
//! assert!(status.x_wins());
//! assert_eq!(status.outcome(), Outcome::XWins);
//! assert_eq!(status.outcome().to_string(), "X wins");
//! # Ok::<(), simple_tictactoe::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cell;
mod error;
mod render;
mod status;

pub mod rules;

// Crate-level exports - Core types
pub use board::{Board, SIZE};
pub use cell::{Cell, Player};

// Crate-level exports - Errors
pub use error::{BoardError, Result};

// Crate-level exports - Evaluation
pub use rules::evaluate;
pub use status::{GameStatus, Outcome};

// Crate-level exports - Rendering
pub use render::{RenderStyle, render};
