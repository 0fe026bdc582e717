//! Check detection and square control.

use crate::board::Board;
use crate::color::Color;
use crate::game::GameState;
use crate::position::Position;

use super::pattern_allows;

/// Return `true` if any `by_color` piece on `board` has a movement pattern
/// onto `target`.
pub(super) fn controlled_by(
    board: &Board,
    en_passant: Option<Position>,
    target: Position,
    by_color: Color,
) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, piece)| pattern_allows(board, en_passant, piece, from, target))
}

/// Return `true` if `color`'s king on `board` can be reached by an enemy
/// piece. A board without that king is never in check.
fn king_attacked(board: &Board, en_passant: Option<Position>, color: Color) -> bool {
    match board.king_position(color) {
        Some(king) => controlled_by(board, en_passant, king, color.flip()),
        None => false,
    }
}

impl GameState {
    /// Return `true` if `color`'s king is attacked by the opponent.
    ///
    /// Works for either color regardless of who is on move. Returns `false`
    /// when `color` has no king on the board.
    pub fn is_in_check(&self, color: Color) -> bool {
        king_attacked(&self.board, self.en_passant, color)
    }

    /// Return `true` if some `color` piece has a movement pattern onto
    /// `target`. A piece never controls the square it stands on.
    pub fn is_square_controlled(&self, target: Position, color: Color) -> bool {
        target.is_on_board() && controlled_by(&self.board, self.en_passant, target, color)
    }

    /// Return `true` if moving the piece on `from` to `to` would leave the
    /// mover's own king attacked.
    ///
    /// The test runs on a scratch copy of the board with only the mover and
    /// destination relocated; `self` is never touched.
    pub(super) fn exposes_king(&self, from: Position, to: Position) -> bool {
        let mut scratch = self.board;
        scratch.relocate(from, to);
        king_attacked(&scratch, self.en_passant, self.side_to_move)
    }
}
