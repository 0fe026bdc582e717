//! FEN piece-placement parsing and serialization for [`Board`].
//!
//! Only the first FEN field is handled: side to move and en passant state
//! live on [`GameState`](crate::GameState), not on the board.

use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

fn piece_from_char(c: char) -> Option<Piece> {
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece::new(kind, color))
}

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse a FEN piece-placement field. The first row listed is row 0 (rank 8).
    fn from_str(s: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece =
                        piece_from_char(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    if col >= 8 {
                        return Err(PlacementError::BadRowLength {
                            row,
                            length: col + 1,
                        });
                    }
                    board.set(Position::new(row as i8, col as i8), Some(piece));
                    col += 1;
                }
            }

            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        Ok(board)
    }
}

/// Serialize the board's piece placement as a FEN field.
pub fn placement(board: &Board) -> String {
    let mut out = String::with_capacity(71);

    for row in 0i8..8 {
        if row > 0 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for col in 0i8..8 {
            match board.get(Position::new(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push((b'0' + empty_run) as char);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{STARTING_PLACEMENT, placement};
    use crate::board::Board;
    use crate::error::PlacementError;
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn starting_placement_matches_starting_board() {
        let parsed: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn serialize_starting_position() {
        assert_eq!(placement(&Board::starting_position()), STARTING_PLACEMENT);
    }

    #[test]
    fn sparse_board() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3".parse().unwrap();
        assert_eq!(board.get(Position::new(3, 3)), Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(Position::new(3, 4)), Some(Piece::WHITE_PAWN));
        assert_eq!(board.pieces().count(), 4);
        assert_eq!(placement(&board), "4k3/8/8/3pP3/8/8/8/4K3");
    }

    #[test]
    fn wrong_row_count() {
        let err = "8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::WrongRowCount { found: 3 });
    }

    #[test]
    fn bad_row_length() {
        let err = "9/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::InvalidPieceChar { character: '9' });
        let err = "7/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::BadRowLength { row: 0, length: 7 });
        let err = "8p/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::BadRowLength { row: 0, length: 9 });
    }

    #[test]
    fn invalid_piece_char() {
        let err = "rnbqkbnx/8/8/8/8/8/8/8".parse::<Board>().unwrap_err();
        assert_eq!(err, PlacementError::InvalidPieceChar { character: 'x' });
    }
}
