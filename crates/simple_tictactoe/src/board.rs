//! 3x3 tic-tac-toe board.

use crate::cell::{Cell, Player};
use crate::error::{BoardError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Side length of the grid.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major. Serializes as its 9-character literal
/// (see [`Board::from_literal`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    /// Builds a board from a 9-character literal over `_`, `X` and `O`.
    ///
    /// Characters fill the grid row-major: 0-2 are row 0, 3-5 row 1, 6-8 row 2.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLength`] unless the literal has exactly
    /// nine characters, and [`BoardError::InvalidCharacter`] for anything
    /// outside the alphabet.
    #[instrument]
    pub fn from_literal(literal: &str) -> Result<Self> {
        let len = literal.chars().count();
        if len != SIZE * SIZE {
            return Err(BoardError::InvalidLength { len });
        }

        let mut board = Self::new();
        for (index, ch) in literal.chars().enumerate() {
            board.cells[index] =
                Cell::from_char(ch).ok_or(BoardError::InvalidCharacter { ch, index })?;
        }
        Ok(board)
    }

    /// Fills an empty board with alternating marks using the thread-local RNG.
    ///
    /// See [`Board::random_with`].
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Fills an empty board with alternating marks, X first.
    ///
    /// Each mark goes to a cell drawn uniformly from the cells still empty,
    /// until none remain. Pass a seeded RNG for a reproducible fill.
    #[instrument(skip(rng))]
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::new();
        let mut free = board.empty_coordinates();
        let mut player = Player::X;

        while !free.is_empty() {
            let pick = rng.random_range(0..free.len());
            let (row, col) = free.swap_remove(pick);
            board.cells[row * SIZE + col] = player.mark();
            player = player.opponent();
        }

        debug!(board = %board.to_literal(), "Random fill complete");
        board
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate is not in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cells[Self::index(row, col)?])
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate is not in `0..3`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let index = Self::index(row, col)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Returns true if `(row, col)` holds a mark.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if either coordinate is not in `0..3`.
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool> {
        Ok(!self.get(row, col)?.is_empty())
    }

    /// Iterates over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIZE)
    }

    /// Counts the cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Checks if the board is full (no empty cell left).
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Returns the `(row, col)` of every empty cell, row-major.
    pub fn empty_coordinates(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| (i / SIZE, i % SIZE))
            .collect()
    }

    /// Formats the board as its 9-character literal.
    pub fn to_literal(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    fn index(row: usize, col: usize) -> Result<usize> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(row * SIZE + col)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_literal(s)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(literal: String) -> Result<Self> {
        Self::from_literal(&literal)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_literal()
    }
}
