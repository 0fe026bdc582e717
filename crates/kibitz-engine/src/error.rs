//! Error types for search requests and engine configuration.

use std::time::Duration;

/// A search was requested on a position that cannot produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The game has already ended in checkmate or stalemate.
    #[error("game is over")]
    GameOver,
    /// The side to move has no legal moves.
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// A configuration change was rejected; the previous configuration is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Search depth outside the accepted range.
    #[error("depth must be between {min} and {max}, got {depth}", min = crate::config::MIN_DEPTH, max = crate::config::MAX_DEPTH)]
    InvalidDepth {
        /// The rejected depth.
        depth: u32,
    },
    /// Unrecognized difficulty name.
    #[error("invalid difficulty level: {name} (use easy/medium/hard/expert)")]
    InvalidDifficulty {
        /// The rejected name.
        name: String,
    },
    /// A think time of zero leaves no room to search.
    #[error("think time must be positive, got {think_time:?}")]
    InvalidThinkTime {
        /// The rejected budget.
        think_time: Duration,
    },
}
