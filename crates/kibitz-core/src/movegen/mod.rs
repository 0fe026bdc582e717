//! Legal move generation.
//!
//! Legality is decided square pair by square pair: a move is legal when the
//! piece's movement pattern reaches the destination and the mover's king is
//! not left attacked. Generation simply enumerates every source and
//! destination in row-major order, which fixes the order of the returned list.

mod check;
mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::game::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::king_pattern;
use self::knights::knight_pattern;
use self::pawns::pawn_pattern;
use self::sliders::{bishop_pattern, queen_pattern, rook_pattern};

/// Return `true` if `piece` standing on `from` has a movement pattern onto
/// `to`, ignoring whose turn it is and the safety of its own king.
pub(crate) fn pattern_allows(
    board: &Board,
    en_passant: Option<Position>,
    piece: Piece,
    from: Position,
    to: Position,
) -> bool {
    if from == to {
        return false;
    }
    match piece.kind() {
        PieceKind::Pawn => pawn_pattern(board, en_passant, piece.color(), from, to),
        PieceKind::Knight => knight_pattern(from, to),
        PieceKind::Bishop => bishop_pattern(board, from, to),
        PieceKind::Rook => rook_pattern(board, from, to),
        PieceKind::Queen => queen_pattern(board, from, to),
        PieceKind::King => king_pattern(from, to),
    }
}

impl GameState {
    /// Return `true` if `mv` is legal for the side to move.
    ///
    /// Both endpoints must be on the board and distinct, the source must hold
    /// a piece of the side to move, the destination must not hold a friendly
    /// piece, the piece's pattern must reach the destination, and the move
    /// must not leave the mover's king attacked. Annotations on `mv` are
    /// ignored. Never mutates `self`.
    pub fn is_legal(&self, mv: Move) -> bool {
        let (from, to) = (mv.from(), mv.to());
        if !from.is_on_board() || !to.is_on_board() || from == to {
            return false;
        }
        let Some(piece) = self.board.get(from) else {
            return false;
        };
        if piece.color() != self.side_to_move {
            return false;
        }
        if let Some(target) = self.board.get(to)
            && target.color() == piece.color()
        {
            return false;
        }
        pattern_allows(&self.board, self.en_passant, piece, from, to) && !self.exposes_king(from, to)
    }

    /// Enumerate every legal move for `color`, sources and destinations both
    /// in row-major order.
    ///
    /// Legality is always judged for the side to move, so asking for the
    /// color that is not on move yields an empty list.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        if color != self.side_to_move {
            return Vec::new();
        }

        let mut moves = Vec::with_capacity(48);
        for (from, _) in self.board.pieces_of(color) {
            moves.extend(
                Position::all()
                    .map(|to| Move::new(from, to))
                    .filter(|&mv| self.is_legal(mv)),
            );
        }
        moves
    }
}
