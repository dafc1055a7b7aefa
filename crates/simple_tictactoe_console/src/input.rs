//! Coordinate parsing for interactive moves.

use crate::error::MoveInputError;
use simple_tictactoe::SIZE;
use tracing::instrument;

/// Zero-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    /// Row, `0..3`.
    pub row: usize,
    /// Column, `0..3`.
    pub col: usize,
}

/// Parses a line of 1-based `row col` input into zero-based coordinates.
///
/// Tokens are split on whitespace; the first two are used and anything
/// after them is ignored.
///
/// # Errors
///
/// Returns [`MoveInputError::NotNumbers`] unless the line starts with two
/// integers, and [`MoveInputError::OutOfRange`] if either is outside `1..=3`.
#[instrument]
pub fn parse_coordinates(line: &str) -> Result<Coordinates, MoveInputError> {
    let mut tokens = line.split_whitespace().map(str::parse::<i32>);
    let (Some(Ok(row)), Some(Ok(col))) = (tokens.next(), tokens.next()) else {
        return Err(MoveInputError::NotNumbers);
    };

    let range = 1..=SIZE as i32;
    if !range.contains(&row) || !range.contains(&col) {
        return Err(MoveInputError::OutOfRange);
    }

    // Both values are within 1..=3 here.
    Ok(Coordinates {
        row: (row - 1) as usize,
        col: (col - 1) as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates_are_zero_based() {
        assert_eq!(parse_coordinates("1 1"), Ok(Coordinates { row: 0, col: 0 }));
        assert_eq!(parse_coordinates("2 3"), Ok(Coordinates { row: 1, col: 2 }));
        assert_eq!(parse_coordinates("  3\t1 \n"), Ok(Coordinates { row: 2, col: 0 }));
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert_eq!(parse_coordinates("1 2 3"), Ok(Coordinates { row: 0, col: 1 }));
        assert_eq!(parse_coordinates("1 2 x"), Ok(Coordinates { row: 0, col: 1 }));
    }

    #[test]
    fn test_not_numbers() {
        for line in ["", "\n", "one two", "1", "1 a", "a 1", "1.5 2", "1,1"] {
            assert_eq!(parse_coordinates(line), Err(MoveInputError::NotNumbers), "{line:?}");
        }
    }

    #[test]
    fn test_out_of_range() {
        for line in ["5 5", "0 1", "1 4", "-1 2", "4 0"] {
            assert_eq!(parse_coordinates(line), Err(MoveInputError::OutOfRange), "{line:?}");
        }
    }

    #[test]
    fn test_huge_number_is_not_a_number() {
        assert_eq!(
            parse_coordinates("99999999999999999999 1"),
            Err(MoveInputError::NotNumbers)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(MoveInputError::NotNumbers.to_string(), "You should enter numbers!");
        assert_eq!(
            MoveInputError::OutOfRange.to_string(),
            "Coordinates should be from 1 to 3!"
        );
        assert_eq!(
            MoveInputError::Occupied.to_string(),
            "This cell is occupied! Choose another one!"
        );
    }
}
