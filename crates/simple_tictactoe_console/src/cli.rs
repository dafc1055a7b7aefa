//! Command-line interface for simple-tictactoe.

use clap::{Parser, Subcommand};

/// Simple tic-tac-toe - play in the console or evaluate boards
#[derive(Parser, Debug)]
#[command(name = "simple-tictactoe")]
#[command(about = "Console tic-tac-toe with board evaluation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print boards without the dashed frame
    #[arg(long, global = true)]
    pub plain: bool,

    /// Subcommand to run (defaults to an interactive game)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game, reading `row col` coordinates from stdin
    Play {
        /// Start from this 9-character board literal instead of an empty board
        #[arg(long)]
        board: Option<String>,
    },

    /// Evaluate a board literal (read from stdin when omitted)
    Eval {
        /// 9 characters over `_`, `X`, `O`, row-major
        literal: Option<String>,

        /// Print a JSON report instead of the board and status
        #[arg(long)]
        json: bool,
    },

    /// Fill a board randomly with alternating marks and evaluate it
    Random {
        /// Seed for a reproducible fill
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON report instead of the board and status
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["simple-tictactoe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.plain);
    }

    #[test]
    fn test_eval_with_literal() {
        let cli = Cli::try_parse_from(["simple-tictactoe", "eval", "XXXOO____", "--json"]).unwrap();
        match cli.command {
            Some(Command::Eval { literal, json }) => {
                assert_eq!(literal.as_deref(), Some("XXXOO____"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_random_seed_and_global_plain() {
        let cli = Cli::try_parse_from(["simple-tictactoe", "random", "--seed", "9", "--plain"]).unwrap();
        assert!(cli.plain);
        assert!(matches!(cli.command, Some(Command::Random { seed: Some(9), json: false })));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
