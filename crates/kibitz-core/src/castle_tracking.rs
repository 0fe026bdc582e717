//! King-moved and rook-moved bookkeeping.
//!
//! The flags are maintained on every move so that castling rights can be
//! derived from them, but castling itself is never generated as a legal move.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Column the rook for this side starts on.
    pub const fn rook_column(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }
}

/// Per-color "has moved" flags for the king and for rooks, keyed by the
/// column the rook moved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastleTracking {
    king_moved: [bool; Color::COUNT],
    rook_moved: [[bool; 8]; Color::COUNT],
}

impl CastleTracking {
    /// Fresh flags: nothing has moved.
    pub const fn new() -> CastleTracking {
        CastleTracking {
            king_moved: [false; Color::COUNT],
            rook_moved: [[false; 8]; Color::COUNT],
        }
    }

    /// Return `true` if `color`'s king has moved.
    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    /// Return `true` if a rook of `color` has moved away from column `col`.
    #[inline]
    pub fn rook_moved(&self, color: Color, col: i8) -> bool {
        (0..8).contains(&col) && self.rook_moved[color.index()][col as usize]
    }

    /// Return `true` if neither the king nor the `side` rook of `color` has moved.
    pub fn rights_intact(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side.rook_column())
    }

    /// Record that `piece` moved away from `from`.
    pub(crate) fn record(&mut self, piece: Piece, from: Position) {
        match piece.kind() {
            PieceKind::King => self.king_moved[piece.color().index()] = true,
            PieceKind::Rook if (0..8).contains(&from.col()) => {
                self.rook_moved[piece.color().index()][from.col() as usize] = true;
            }
            _ => {}
        }
    }
}
