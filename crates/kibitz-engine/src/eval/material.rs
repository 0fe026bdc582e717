//! Material values and per-side material totals.

use kibitz_core::{Board, Color, PieceKind};

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   320 |
/// | Bishop |   330 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   | 20000 |
pub const PIECE_VALUE: [i32; PieceKind::COUNT] = [
    100,    // Pawn
    320,    // Knight
    330,    // Bishop
    500,    // Rook
    900,    // Queen
    20_000, // King
];

/// Return the base material value of `kind`.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUE[kind.index()]
}

/// Summed material of each side, kings included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialBalance {
    /// White's total.
    pub white: i32,
    /// Black's total.
    pub black: i32,
}

impl MaterialBalance {
    /// Black's total minus White's total.
    #[inline]
    pub const fn difference(&self) -> i32 {
        self.black - self.white
    }

    /// Total for `color`.
    #[inline]
    pub const fn of(&self, color: Color) -> i32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// Count the material on `board` for both sides.
pub fn material(board: &Board) -> MaterialBalance {
    let mut balance = MaterialBalance::default();
    for (_, piece) in board.pieces() {
        let value = piece_value(piece.kind());
        match piece.color() {
            Color::White => balance.white += value,
            Color::Black => balance.black += value,
        }
    }
    balance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        let balance = material(&Board::starting_position());
        // 8 pawns + 2 knights + 2 bishops + 2 rooks + queen + king
        let expected = 8 * 100 + 2 * 320 + 2 * 330 + 2 * 500 + 900 + 20_000;
        assert_eq!(balance.white, expected);
        assert_eq!(balance.black, expected);
        assert_eq!(balance.difference(), 0);
    }

    #[test]
    fn difference_favors_black_when_positive() {
        let board: Board = "4k3/8/8/8/8/8/8/3qK3".parse().unwrap();
        let balance = material(&board);
        assert_eq!(balance.of(Color::Black), 20_900);
        assert_eq!(balance.of(Color::White), 20_000);
        assert_eq!(balance.difference(), 900);
    }

    #[test]
    fn empty_board_is_zero() {
        assert_eq!(material(&Board::empty()), MaterialBalance::default());
    }
}
