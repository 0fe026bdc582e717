//! Error types for move validation and position setup.

use crate::position::Position;

/// A requested move was rejected by the rules engine.
///
/// The rejection carries no diagnosis beyond "not legal": the engine never
/// explains which rule failed and never coerces the request into a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move from `from` to `to` is not legal in the current position.
    #[error("invalid move from {from} to {to}")]
    InvalidMove {
        /// Requested source square.
        from: Position,
        /// Requested destination square.
        to: Position,
    },
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = Black's home rank).
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
