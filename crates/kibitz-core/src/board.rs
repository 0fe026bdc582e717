//! The 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement: one optional occupant per cell, stored row-major.
///
/// `Board` is a small `Copy` value, so speculative edits are made on a copy
/// and never leak into the original.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Position::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Position::COUNT],
        }
    }

    /// Return the standard starting placement.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as i8;
            board.set(Position::new(Color::Black.back_rank(), col), Some(Piece::new(kind, Color::Black)));
            board.set(Position::new(Color::Black.pawn_rank(), col), Some(Piece::BLACK_PAWN));
            board.set(Position::new(Color::White.pawn_rank(), col), Some(Piece::WHITE_PAWN));
            board.set(Position::new(Color::White.back_rank(), col), Some(Piece::new(kind, Color::White)));
        }
        board
    }

    /// Return the piece on `pos`, or `None` if the cell is empty or off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.is_on_board() {
            self.cells[pos.index()]
        } else {
            None
        }
    }

    /// Return `true` if `pos` is on the board and empty.
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_on_board() && self.cells[pos.index()].is_none()
    }

    /// Place (or clear, with `None`) the occupant of `pos`.
    ///
    /// Off-board positions are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_on_board() {
            self.cells[pos.index()] = piece;
        }
    }

    /// Remove and return the occupant of `pos`.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        if pos.is_on_board() {
            self.cells[pos.index()].take()
        } else {
            None
        }
    }

    /// Move whatever stands on `from` onto `to`, returning the displaced occupant of `to`.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let moving = self.take(from);
        let displaced = self.take(to);
        self.set(to, moving);
        displaced
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Iterate over the pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of `color`'s king, if there is one.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(pos, _)| pos)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", crate::fen::placement(self))
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0i8..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0i8..8 {
                let c = board
                    .get(Position::new(row, col))
                    .map_or('.', |piece| piece.symbol());
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::position::Position;

    fn at(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.get(at("e1")), Some(Piece::WHITE_KING));
        assert_eq!(board.get(at("d1")), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.get(at("e8")), Some(Piece::BLACK_KING));
        assert_eq!(board.get(at("a8")), Some(Piece::BLACK_ROOK));
        assert_eq!(board.get(at("g7")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(at("b2")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.get(at("e4")), None);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn king_position() {
        let board = Board::starting_position();
        assert_eq!(board.king_position(Color::White), Some(Position::new(7, 4)));
        assert_eq!(board.king_position(Color::Black), Some(Position::new(0, 4)));
        assert_eq!(Board::empty().king_position(Color::White), None);
    }

    #[test]
    fn off_board_access_is_inert() {
        let mut board = Board::starting_position();
        let before = board;
        board.set(Position::new(8, 0), Some(Piece::WHITE_QUEEN));
        assert_eq!(board, before);
        assert_eq!(board.get(Position::new(-1, 3)), None);
        assert!(!board.is_empty_at(Position::new(0, 9)));
    }

    #[test]
    fn relocate_returns_captured() {
        let mut board = Board::starting_position();
        let captured = board.relocate(at("d1"), at("d7"));
        assert_eq!(captured, Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(at("d7")), Some(Piece::WHITE_QUEEN));
        assert!(board.is_empty_at(at("d1")));
        assert_eq!(board.pieces().count(), 31);
    }

    #[test]
    fn pieces_of_counts() {
        let board = Board::starting_position();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        let first = board.pieces().next().unwrap();
        assert_eq!(first, (Position::new(0, 0), Piece::BLACK_ROOK));
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("8 r n b q k b n r"));
        assert!(output.contains("1 R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
