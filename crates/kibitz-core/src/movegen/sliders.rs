//! Sliding piece (bishop, rook, queen) movement patterns.

use crate::board::Board;
use crate::position::Position;

/// Return `true` if every square strictly between `from` and `to` is empty.
///
/// Steps one square at a time along the line joining them, so callers must
/// have established that the two squares share a rank, file or diagonal.
fn path_clear(board: &Board, from: Position, to: Position) -> bool {
    let step_row = (to.row() - from.row()).signum();
    let step_col = (to.col() - from.col()).signum();
    let mut current = Position::new(from.row() + step_row, from.col() + step_col);

    while current != to {
        if !board.is_empty_at(current) {
            return false;
        }
        current = Position::new(current.row() + step_row, current.col() + step_col);
    }
    true
}

/// Straight lines along a rank or file.
pub(super) fn rook_pattern(board: &Board, from: Position, to: Position) -> bool {
    let straight = from.row() == to.row() || from.col() == to.col();
    straight && path_clear(board, from, to)
}

/// Diagonal lines.
pub(super) fn bishop_pattern(board: &Board, from: Position, to: Position) -> bool {
    let diagonal = (to.row() - from.row()).abs() == (to.col() - from.col()).abs();
    diagonal && path_clear(board, from, to)
}

/// Rook or bishop lines.
pub(super) fn queen_pattern(board: &Board, from: Position, to: Position) -> bool {
    rook_pattern(board, from, to) || bishop_pattern(board, from, to)
}
