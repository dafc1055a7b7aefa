//! Derived game status.

use serde::{Deserialize, Serialize};

/// Classification of a board, recomputed on every evaluation.
///
/// The four facets are independent booleans. A board with none set is
/// still in progress. Use [`GameStatus::outcome`] for the single
/// prioritised classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameStatus {
    x_wins: bool,
    o_wins: bool,
    draw: bool,
    impossible: bool,
}

impl GameStatus {
    /// Creates a status from its four facets.
    pub fn new(x_wins: bool, o_wins: bool, draw: bool, impossible: bool) -> Self {
        Self {
            x_wins,
            o_wins,
            draw,
            impossible,
        }
    }

    /// Returns true if X has three in a row.
    pub fn x_wins(&self) -> bool {
        self.x_wins
    }

    /// Returns true if O has three in a row.
    pub fn o_wins(&self) -> bool {
        self.o_wins
    }

    /// Returns true if the board is full with no winner.
    pub fn draw(&self) -> bool {
        self.draw
    }

    /// Returns true if the board cannot arise from alternating play.
    pub fn impossible(&self) -> bool {
        self.impossible
    }

    /// Returns true if no facet is set.
    pub fn in_progress(&self) -> bool {
        !(self.x_wins || self.o_wins || self.draw || self.impossible)
    }

    /// Returns true if an interactive game stops here (a win or a draw).
    pub fn ends_interactive_game(&self) -> bool {
        self.x_wins || self.o_wins || self.draw
    }

    /// Collapses the facets into one outcome.
    ///
    /// Priority: Impossible, then X wins, O wins, Draw, and finally
    /// in progress.
    pub fn outcome(&self) -> Outcome {
        if self.impossible {
            Outcome::Impossible
        } else if self.x_wins {
            Outcome::XWins
        } else if self.o_wins {
            Outcome::OWins
        } else if self.draw {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

/// Single classification of a board, as printed to the player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Outcome {
    /// The board cannot arise from alternating play.
    #[strum(serialize = "Impossible")]
    Impossible,
    /// X has three in a row.
    #[strum(serialize = "X wins")]
    XWins,
    /// O has three in a row.
    #[strum(serialize = "O wins")]
    OWins,
    /// Full board, no winner.
    #[strum(serialize = "Draw")]
    Draw,
    /// Moves remain and nobody has won.
    #[strum(serialize = "Game not finished")]
    InProgress,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_outcome_strings() {
        let printed: Vec<String> = Outcome::iter().map(|o| o.to_string()).collect();
        assert_eq!(
            printed,
            ["Impossible", "X wins", "O wins", "Draw", "Game not finished"]
        );
    }

    #[test]
    fn test_no_facets_is_in_progress() {
        let status = GameStatus::default();
        assert!(status.in_progress());
        assert!(!status.ends_interactive_game());
        assert_eq!(status.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_impossible_outranks_everything() {
        // Display priority choice: Impossible beats any simultaneous facet.
        assert_eq!(GameStatus::new(true, true, false, true).outcome(), Outcome::Impossible);
        assert_eq!(GameStatus::new(false, false, true, true).outcome(), Outcome::Impossible);
        assert_eq!(GameStatus::new(true, false, false, true).outcome(), Outcome::Impossible);
    }

    #[test]
    fn test_impossible_alone_does_not_end_interactive_game() {
        let status = GameStatus::new(false, false, false, true);
        assert!(!status.ends_interactive_game());
        assert!(!status.in_progress());
    }

    #[test]
    fn test_win_outranks_draw() {
        assert_eq!(GameStatus::new(true, false, true, false).outcome(), Outcome::XWins);
        assert_eq!(GameStatus::new(false, true, true, false).outcome(), Outcome::OWins);
    }
}
