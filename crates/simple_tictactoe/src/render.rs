//! Text rendering of a board.

use crate::Board;
use std::fmt::Write;

/// Layout used when printing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Dashed frame with `|` edges around each row.
    #[default]
    Bordered,
    /// Bare rows of space-separated cells.
    Plain,
}

const FRAME: &str = "---------";

/// Formats a board, one text line per row, each ending in a newline.
pub fn render(board: &Board, style: RenderStyle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_board(&mut out, board, style);
    out
}

fn write_board<W: Write>(out: &mut W, board: &Board, style: RenderStyle) -> std::fmt::Result {
    if style == RenderStyle::Bordered {
        writeln!(out, "{FRAME}")?;
    }
    for row in board.rows() {
        let cells = row
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        match style {
            RenderStyle::Bordered => writeln!(out, "| {cells} |")?,
            RenderStyle::Plain => writeln!(out, "{cells}")?,
        }
    }
    if style == RenderStyle::Bordered {
        writeln!(out, "{FRAME}")?;
    }
    Ok(())
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_board(f, self, RenderStyle::Bordered)
    }
}
