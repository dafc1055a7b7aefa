//! Board error types.

use derive_more::{Display, Error};

/// Errors raised while building or addressing a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A board literal did not contain exactly nine characters.
    #[display("Board literal must have 9 characters, got {}", len)]
    InvalidLength {
        /// Number of characters in the rejected literal.
        len: usize,
    },

    /// A board literal contained a character outside `_`, `X`, `O`.
    #[display("Invalid character {:?} at index {} (expected '_', 'X' or 'O')", ch, index)]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character index within the literal.
        index: usize,
    },

    /// A row or column fell outside `0..3`.
    #[display("Coordinates ({}, {}) are outside the 3x3 grid", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Convenience Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
