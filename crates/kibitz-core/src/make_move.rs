//! Move application.

use tracing::{debug, info};

use crate::chess_move::Move;
use crate::error::MoveError;
use crate::game::GameState;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl GameState {
    /// Apply `mv` in place and return the annotated copy stored in history.
    ///
    /// `mv` must already be legal (taken from [`legal_moves`](Self::legal_moves)
    /// or checked with [`is_legal`](Self::is_legal)); this path performs no
    /// validation. An empty source square leaves the state untouched and
    /// returns `mv` unchanged.
    ///
    /// Handles en passant captures, the king/rook moved flags, the new en
    /// passant target, the history record, the turn flip and finally the
    /// checkmate/stalemate classification for the side now on move.
    pub fn apply(&mut self, mv: Move) -> Move {
        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = self.board.get(from) else {
            return mv;
        };

        let is_pawn = piece.kind() == PieceKind::Pawn;
        let en_passant = is_pawn && self.en_passant == Some(to);
        let mut captured = self.board.get(to);
        if en_passant {
            // The captured pawn sits directly behind the landing square.
            let victim = Position::new(to.row() - piece.color().forward(), to.col());
            captured = self.board.take(victim);
        }

        self.board.relocate(from, to);
        self.castling.record(piece, from);

        self.en_passant = if is_pawn && (to.row() - from.row()).abs() == 2 {
            Some(Position::new((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

        let recorded = mv.recorded(piece, captured, en_passant);
        self.history.push(recorded);
        self.side_to_move = self.side_to_move.flip();
        self.refresh_outcome();

        recorded
    }

    /// Validate the move `from` → `to` and apply it if legal.
    ///
    /// On rejection the state is left exactly as it was.
    pub fn validate_and_apply(&mut self, from: Position, to: Position) -> Result<Move, MoveError> {
        let request = Move::new(from, to);
        if !self.is_legal(request) {
            debug!(%from, %to, side = %self.side_to_move, "rejected illegal move");
            return Err(MoveError::InvalidMove { from, to });
        }

        let recorded = self.apply(request);
        debug!(mv = %recorded, ply = self.history.len(), "move applied");
        if self.game_over {
            info!(winner = %self.winner, plies = self.history.len(), "game over");
        }
        Ok(recorded)
    }
}
