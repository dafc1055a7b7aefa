//! Win detection logic for tic-tac-toe.

use crate::{Board, Player};
use tracing::instrument;

/// Three `(row, col)` coordinates that win when they share a mark.
pub type Line = [(usize, usize); 3];

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if `player` has three in a row on any of the eight lines.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(row, col).is_ok_and(|cell| cell == mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_no_line_empty_board() {
        let board = Board::new();
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for (row, col) in line {
                board.set(row, col, Cell::O).unwrap();
            }
            assert!(has_line(&board, Player::O), "line {line:?} should win");
            assert!(!has_line(&board, Player::X));
        }
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_no_line_incomplete() {
        let board = Board::from_literal("XX_OO____").unwrap();
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::from_literal("XOX______").unwrap();
        assert!(!has_line(&board, Player::X));
    }
}
