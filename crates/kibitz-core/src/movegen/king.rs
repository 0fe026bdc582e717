//! King movement pattern.

use crate::position::Position;

/// Return `true` if `to` is one step away from `from` in any direction.
/// Castling is not a king pattern.
#[inline]
pub(super) fn king_pattern(from: Position, to: Position) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}
