//! Interactive game session.
//!
//! A session owns its board and walks a small state machine:
//! `AwaitingMove(X)` and `AwaitingMove(O)` alternate until a move produces a
//! win or a draw, which moves it to the terminal `Finished` state.
//! Rejected input never consumes a turn.

use crate::error::{MoveInputError, SessionError};
use crate::input::parse_coordinates;
use simple_tictactoe::{Board, Cell, Outcome, Player, RenderStyle, evaluate, render};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the given player's coordinates.
    AwaitingMove(Player),
    /// The game is over.
    Finished(Outcome),
}

/// One interactive game over a line reader and a text writer.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    board: Board,
    state: SessionState,
    style: RenderStyle,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session on an empty board with X to move.
    pub fn new(input: R, output: W) -> Self {
        Self::with_board(input, output, Board::new())
    }

    /// Creates a session continuing from `board`.
    ///
    /// X moves when the mark counts are equal, otherwise O. A board that
    /// is already won, drawn or impossible starts out finished.
    #[instrument(skip(input, output, board), fields(board = %board.to_literal()))]
    pub fn with_board(input: R, output: W, board: Board) -> Self {
        let status = evaluate(&board);
        let state = if status.ends_interactive_game() || status.impossible() {
            SessionState::Finished(status.outcome())
        } else if board.count(Cell::X) > board.count(Cell::O) {
            SessionState::AwaitingMove(Player::O)
        } else {
            SessionState::AwaitingMove(Player::X)
        };
        debug!(?state, "Session created");

        Self {
            input,
            output,
            board,
            state,
            style: RenderStyle::default(),
        }
    }

    /// Sets the board layout used for output.
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Applies one line of input to the state machine.
    ///
    /// On success the current player's mark is placed and the board is
    /// re-evaluated. A finished session ignores further input.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveInputError`] describing why the line was rejected;
    /// the state is left unchanged.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit(&mut self, line: &str) -> Result<SessionState, MoveInputError> {
        let SessionState::AwaitingMove(player) = self.state else {
            warn!("Input submitted to a finished session");
            return Ok(self.state);
        };

        let coords = parse_coordinates(line)?;
        if self
            .board
            .is_occupied(coords.row, coords.col)
            .map_err(|_| MoveInputError::OutOfRange)?
        {
            return Err(MoveInputError::Occupied);
        }
        self.board
            .set(coords.row, coords.col, player.mark())
            .map_err(|_| MoveInputError::OutOfRange)?;
        debug!(?player, row = coords.row, col = coords.col, "Move placed");

        let status = evaluate(&self.board);
        self.state = if status.ends_interactive_game() {
            SessionState::Finished(status.outcome())
        } else {
            SessionState::AwaitingMove(player.opponent())
        };
        Ok(self.state)
    }

    /// Plays the game to the end.
    ///
    /// Prints the board, then reads one line per attempt until a win or a
    /// draw, re-printing the board after each placed mark. The final status
    /// is printed once.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InputClosed`] if input ends before the game
    /// does, and [`SessionError::Io`] if reading or writing fails.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        info!("Starting interactive session");
        self.print_board()?;

        let mut buf = Vec::new();
        loop {
            if let SessionState::Finished(outcome) = self.state {
                writeln!(self.output, "{outcome}")?;
                self.output.flush()?;
                info!(%outcome, "Session finished");
                return Ok(outcome);
            }

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                warn!("Input closed while awaiting a move");
                return Err(SessionError::InputClosed);
            }
            // Undecodable bytes become U+FFFD and fail as non-numbers.
            let line = String::from_utf8_lossy(&buf);

            match self.submit(&line) {
                Ok(_) => self.print_board()?,
                Err(err) => {
                    debug!(%err, input = line.trim_end(), "Move rejected");
                    writeln!(self.output, "{err}")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn print_board(&mut self) -> Result<(), SessionError> {
        write!(self.output, "{}", render(&self.board, self.style))?;
        self.output.flush()?;
        Ok(())
    }
}
