//! Pawn movement pattern.

use crate::board::Board;
use crate::color::Color;
use crate::position::Position;

/// Return `true` if a `color` pawn on `from` may move to `to`, ignoring
/// whether the mover's king ends up in check.
///
/// Pawns push one square forward onto an empty square, or two from their
/// starting rank when both squares ahead are empty. They capture one square
/// diagonally forward onto an occupied square, or onto the en passant target.
pub(super) fn pawn_pattern(
    board: &Board,
    en_passant: Option<Position>,
    color: Color,
    from: Position,
    to: Position,
) -> bool {
    let forward = color.forward();
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty_at(to);
        }
        if d_row == 2 * forward && from.row() == color.pawn_rank() {
            let skipped = Position::new(from.row() + forward, from.col());
            return board.is_empty_at(skipped) && board.is_empty_at(to);
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == forward {
        return !board.is_empty_at(to) || en_passant == Some(to);
    }

    false
}
