//! Simple tic-tac-toe - console entry point.

#![warn(missing_docs)]

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simple_tictactoe::{Board, RenderStyle};
use simple_tictactoe_console::{Report, Session};
use std::io::{self, BufRead};
use tracing::{info, instrument};

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let style = if cli.plain {
        RenderStyle::Plain
    } else {
        RenderStyle::Bordered
    };

    match cli.command {
        None => run_play(None, style),
        Some(Command::Play { board }) => run_play(board, style),
        Some(Command::Eval { literal, json }) => run_eval(literal, json, style),
        Some(Command::Random { seed, json }) => run_random(seed, json, style),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(literal: Option<String>, style: RenderStyle) -> Result<()> {
    let board = match literal {
        Some(literal) => parse_board(&literal)?,
        None => Board::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Session::with_board(stdin.lock(), stdout.lock(), board)
        .with_style(style)
        .run()
        .context("Game ended without a result")?;

    info!(%outcome, "Game over");
    Ok(())
}

/// Evaluate a literal board, read from stdin when not given
#[instrument]
fn run_eval(literal: Option<String>, json: bool, style: RenderStyle) -> Result<()> {
    let literal = match literal {
        Some(literal) => literal,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read board literal")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    print_report(parse_board(&literal)?, json, style)
}

/// Fill a board randomly and evaluate it
#[instrument]
fn run_random(seed: Option<u64>, json: bool, style: RenderStyle) -> Result<()> {
    let board = match seed {
        Some(seed) => Board::random_with(&mut StdRng::seed_from_u64(seed)),
        None => Board::random(),
    };
    print_report(board, json, style)
}

fn parse_board(literal: &str) -> Result<Board> {
    Board::from_literal(literal).with_context(|| format!("Invalid board literal {literal:?}"))
}

fn print_report(board: Board, json: bool, style: RenderStyle) -> Result<()> {
    let report = Report::new(board);
    let mut out = io::stdout().lock();

    if json {
        report.write_json(&mut out).context("Failed to write report")?;
    } else {
        report.write_text(&mut out, style).context("Failed to write report")?;
    }
    Ok(())
}
