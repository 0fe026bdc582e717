//! Core chess rules: board representation, legal move generation, check
//! detection and game state transitions.
//!
//! Castling and promotion are not generated; the king and rook movement
//! flags are tracked so that rights can be inspected.

mod board;
mod castle_tracking;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, PrettyBoard};
pub use castle_tracking::{CastleSide, CastleTracking};
pub use chess_move::Move;
pub use color::Color;
pub use error::{MoveError, PlacementError};
pub use fen::{STARTING_PLACEMENT, placement};
pub use game::{GameState, Winner};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{ParsePositionError, Position};
