//! Session error types.

use derive_more::{Display, Error, From};

/// A rejected line of coordinate input.
///
/// The display strings are the messages shown to the player before the
/// line is read again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveInputError {
    /// The line did not start with two integers.
    #[display("You should enter numbers!")]
    NotNumbers,

    /// A coordinate fell outside `1..=3`.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,

    /// The target cell already holds a mark.
    #[display("This cell is occupied! Choose another one!")]
    Occupied,
}

/// Errors that end an interactive session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Input ended while a move was awaited.
    #[display("Input ended before the game finished")]
    InputClosed,

    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),
}
