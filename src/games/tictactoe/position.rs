//! Board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the nine squares, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-based `(row, col)`.
    ///
    /// Returns `None` when either coordinate is outside `0..=2`.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// `(row, col)` pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A move argument that could not be read as a square.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveParseError {
    /// Not a `row,col` pair or a square number.
    #[display("'{}' is not a move (expected row,col or 1-9)", _0)]
    Malformed(#[error(not(source))] String),
    /// Well-formed but off the board.
    #[display("'{}' is off the board", _0)]
    OutOfRange(#[error(not(source))] String),
}

impl FromStr for Position {
    type Err = MoveParseError;

    /// Parses `row,col` (zero-based) or a square number `1`-`9`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || MoveParseError::Malformed(trimmed.to_string());
        let off_board = || MoveParseError::OutOfRange(trimmed.to_string());

        if let Some((row, col)) = trimmed.split_once(',') {
            let row: usize = row.trim().parse().map_err(|_| malformed())?;
            let col: usize = col.trim().parse().map_err(|_| malformed())?;
            return Self::from_coords(row, col).ok_or_else(off_board);
        }

        let number: usize = trimmed.parse().map_err(|_| malformed())?;
        match number {
            1..=9 => Self::from_index(number - 1).ok_or_else(off_board),
            _ => Err(off_board()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_coords_agree() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_from_coords_rejects_off_board() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!("0,2".parse::<Position>(), Ok(Position::TopRight));
        assert_eq!(" 2 , 1 ".parse::<Position>(), Ok(Position::BottomCenter));
    }

    #[test]
    fn test_parse_square_number() {
        assert_eq!("1".parse::<Position>(), Ok(Position::TopLeft));
        assert_eq!("5".parse::<Position>(), Ok(Position::Center));
        assert_eq!("9".parse::<Position>(), Ok(Position::BottomRight));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "x".parse::<Position>(),
            Err(MoveParseError::Malformed(_))
        ));
        assert!(matches!(
            "0".parse::<Position>(),
            Err(MoveParseError::OutOfRange(_))
        ));
        assert!(matches!(
            "1,3".parse::<Position>(),
            Err(MoveParseError::OutOfRange(_))
        ));
    }
}
