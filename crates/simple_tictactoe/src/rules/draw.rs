//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks for a draw: nobody has a line and no empty cell is left.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, x_wins: bool, o_wins: bool) -> bool {
    !x_wins && !o_wins && board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_literal("XOXOXO___").unwrap();
        assert!(!is_draw(&board, false, false));
    }

    #[test]
    fn test_full_board_without_winner() {
        let board = Board::from_literal("XOXOOXXXO").unwrap();
        assert!(is_draw(&board, false, false));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_literal("XXXOOXOXO").unwrap();
        assert!(!is_draw(&board, true, false));
        assert!(!is_draw(&board, false, true));
    }
}
