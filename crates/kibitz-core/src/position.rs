//! Board coordinates as 0-based (row, column) pairs.

use std::fmt;
use std::str::FromStr;

/// A board coordinate.
///
/// Row 0 is Black's home rank (rank 8), row 7 is White's (rank 1); column 0
/// is the a-file. A `Position` may lie off the board when it comes from an
/// external caller; [`is_on_board`](Position::is_on_board) tells the two
/// apart and the rules engine rejects off-board endpoints.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Number of on-board positions.
    pub const COUNT: usize = 64;

    /// Create a position. No bounds check is applied.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// Return the row.
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Return the column.
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Return `true` if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Row-major index (0..63). Only meaningful for on-board positions.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        debug_assert!(self.is_on_board());
        (self.row as usize) * 8 + self.col as usize
    }

    /// Shift by a row/column delta, returning `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Position> {
        let target = Position::new(self.row + d_row, self.col + d_col);
        target.is_on_board().then_some(target)
    }

    /// Iterate over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0i8..8).flat_map(|row| (0i8..8).map(move |col| Position::new(row, col)))
    }

    /// Parse algebraic notation such as `"e2"` (row 6, column 4).
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let col = (file_byte - b'a') as i8;
        let row = 7 - (rank_byte - b'1') as i8;
        Some(Position::new(row, col))
    }
}

/// Error returned when a string is not an algebraic square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a board square: \"{0}\"")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s).ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            let rank = 8 - self.row;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.col)
    }
}
