//! Simple tic-tac-toe console front end
//!
//! Drives [`simple_tictactoe`] from a terminal: an interactive session
//! reading coordinates line by line, plus one-shot evaluation of literal
//! and random boards.
//!
//! # Example
//!
//! ```
//! use simple_tictactoe::Outcome;
//! use simple_tictactoe_console::Session;
//!
//! let input = "1 1\n2 1\n1 2\n2 2\n1 3\n";
//! let mut output = Vec::new();
//! let outcome = Session::new(input.as_bytes(), &mut output).run()?;
//! assert_eq!(outcome, Outcome::XWins);
//! assert!(String::from_utf8_lossy(&output).ends_with("X wins\n"));
//! # Ok::<(), simple_tictactoe_console::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod input;
mod report;
mod session;

// Crate-level exports - Errors
pub use error::{MoveInputError, SessionError};

// Crate-level exports - Input parsing
pub use input::{Coordinates, parse_coordinates};

// Crate-level exports - Session
pub use session::{Session, SessionState};

// Crate-level exports - One-shot reports
pub use report::Report;
