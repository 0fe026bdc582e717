//! Move records.

use std::fmt;

use crate::piece::Piece;
use crate::position::Position;

/// A move from one square to another.
///
/// A freshly constructed move carries only its endpoints. Once the rules
/// engine applies it, the copy stored in the game history is annotated with
/// the moving piece, the captured piece and the special-move flags, and is
/// never modified again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Position,
    to: Position,
    piece: Option<Piece>,
    captured: Option<Piece>,
    en_passant: bool,
    castle: bool,
    promotion: bool,
}

impl Move {
    /// Create an unannotated move request.
    pub const fn new(from: Position, to: Position) -> Move {
        Move {
            from,
            to,
            piece: None,
            captured: None,
            en_passant: false,
            castle: false,
            promotion: false,
        }
    }

    /// Parse coordinate notation such as `"e2e4"`.
    pub fn from_coordinates(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Position::from_algebraic(&s[0..2])?;
        let to = Position::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }

    /// Annotate a move as it is committed to history.
    pub(crate) fn recorded(self, piece: Piece, captured: Option<Piece>, en_passant: bool) -> Move {
        Move {
            piece: Some(piece),
            captured,
            en_passant,
            ..Move::new(self.from, self.to)
        }
    }

    /// Source square.
    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    /// The piece that moved, once applied.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        self.piece
    }

    /// The piece captured by this move, once applied.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Return `true` if this move captured a pawn en passant.
    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.en_passant
    }

    /// Return `true` if this move was a castle. Castling is never generated,
    /// so this is always `false` for moves produced by the rules engine.
    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castle
    }

    /// Return `true` if this move promoted a pawn. Promotion is not
    /// implemented, so this is always `false` for moves produced by the rules engine.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        if let Some(piece) = self.piece {
            write!(f, " {piece:?}")?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{captured:?}")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}
