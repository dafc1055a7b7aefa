//! Detection of boards unreachable by alternating play.
//!
//! Players alternate, so mark counts differ by at most one, and a game
//! stops at the first line, so both players never hold one.

use crate::{Board, Player};
use tracing::instrument;

/// Returns `|count(X) - count(O)|` over all nine cells.
pub fn count_difference(board: &Board) -> usize {
    board
        .count(Player::X.mark())
        .abs_diff(board.count(Player::O.mark()))
}

/// Checks if the board could not come from a legal game.
///
/// True when both players have a line, or when the mark counts differ
/// by two or more.
#[instrument(skip(board))]
pub fn is_impossible(board: &Board, x_wins: bool, o_wins: bool) -> bool {
    (x_wins && o_wins) || count_difference(board) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_difference() {
        assert_eq!(count_difference(&Board::new()), 0);
        assert_eq!(count_difference(&Board::from_literal("X________").unwrap()), 1);
        assert_eq!(count_difference(&Board::from_literal("OOO______").unwrap()), 3);
        assert_eq!(count_difference(&Board::from_literal("XOXOXOXOX").unwrap()), 1);
    }

    #[test]
    fn test_balanced_board_possible() {
        let board = Board::from_literal("XO_______").unwrap();
        assert!(!is_impossible(&board, false, false));
    }

    #[test]
    fn test_imbalance_of_two_impossible() {
        let board = Board::from_literal("XXX_O____").unwrap();
        assert!(is_impossible(&board, true, false));
    }

    #[test]
    fn test_two_winners_impossible() {
        let board = Board::from_literal("XXXOOO___").unwrap();
        assert!(is_impossible(&board, true, true));
    }

    #[test]
    fn test_single_winner_possible() {
        let board = Board::from_literal("XXXOO____").unwrap();
        assert!(!is_impossible(&board, true, false));
    }
}
