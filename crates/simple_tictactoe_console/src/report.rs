//! Serializable evaluation report.

use serde::Serialize;
use simple_tictactoe::{Board, GameStatus, Outcome, RenderStyle, evaluate, render};
use std::io::{self, Write};

/// A board together with its evaluation, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The evaluated board, as its literal.
    pub board: Board,
    /// All four status facets.
    pub status: GameStatus,
    /// The prioritised classification.
    pub outcome: Outcome,
    /// The status line printed for this board.
    pub message: String,
}

impl Report {
    /// Evaluates `board` into a report.
    pub fn new(board: Board) -> Self {
        let status = evaluate(&board);
        let outcome = status.outcome();
        Self {
            board,
            status,
            outcome,
            message: outcome.to_string(),
        }
    }

    /// Writes the rendered board followed by the status line.
    pub fn write_text<W: Write>(&self, out: &mut W, style: RenderStyle) -> io::Result<()> {
        write!(out, "{}", render(&self.board, style))?;
        writeln!(out, "{}", self.message)?;
        out.flush()
    }

    /// Writes the report as pretty-printed JSON with a trailing newline.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        out.flush()
    }
}
