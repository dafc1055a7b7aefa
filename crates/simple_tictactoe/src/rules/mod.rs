//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Each rule is separately testable; [`evaluate`]
//! composes them into a [`GameStatus`].

pub mod draw;
pub mod impossible;
pub mod win;

pub use draw::is_draw;
pub use impossible::{count_difference, is_impossible};
pub use win::{LINES, Line, has_line};

use crate::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// Evaluates a board from scratch.
///
/// Pure: the same board always yields the same status.
#[instrument(skip(board), fields(board = %board.to_literal()))]
pub fn evaluate(board: &Board) -> GameStatus {
    let x_wins = has_line(board, Player::X);
    let o_wins = has_line(board, Player::O);
    let draw = is_draw(board, x_wins, o_wins);
    let impossible = is_impossible(board, x_wins, o_wins);

    let status = GameStatus::new(x_wins, o_wins, draw, impossible);
    debug!(?status, outcome = %status.outcome(), "Board evaluated");
    status
}
