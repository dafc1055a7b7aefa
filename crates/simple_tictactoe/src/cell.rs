//! Cell and player types.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn mark(self) -> Cell {
        Cell::Occupied(self)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Mark state of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Cell holding X.
    pub const X: Cell = Cell::Occupied(Player::X);
    /// Cell holding O.
    pub const O: Cell = Cell::Occupied(Player::O);

    /// Parses a board-literal character (`_`, `X` or `O`).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '_' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    /// Returns the board-literal character for this cell.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_mapping() {
        for ch in ['_', 'X', 'O'] {
            let cell = Cell::from_char(ch).expect("valid literal char");
            assert_eq!(cell.to_char(), ch);
        }
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(Cell::from_char(' '), None);
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Player::X.mark().is_empty());
    }
}
