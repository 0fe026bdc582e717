//! The mutable game aggregate.

use std::fmt;

use crate::board::Board;
use crate::castle_tracking::CastleTracking;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

/// Result of a game: who won, a draw, or nothing decided yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    #[default]
    None,
    White,
    Black,
    Draw,
}

impl Winner {
    /// Return the winning color, if a side won.
    pub const fn color(self) -> Option<Color> {
        match self {
            Winner::White => Some(Color::White),
            Winner::Black => Some(Color::Black),
            Winner::None | Winner::Draw => None,
        }
    }

    /// Lowercase name, as used in protocol output.
    pub const fn name(self) -> &'static str {
        match self {
            Winner::None => "none",
            Winner::White => "white",
            Winner::Black => "black",
            Winner::Draw => "draw",
        }
    }
}

impl From<Color> for Winner {
    fn from(color: Color) -> Winner {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete game state: placement, turn, outcome, history and the
/// en passant / castling bookkeeping.
///
/// One `GameState` lives for the whole game and is mutated in place by every
/// applied move. `Clone` produces a fully independent copy, which is how
/// speculative exploration is done: mutate the clone, never the original.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) game_over: bool,
    pub(crate) winner: Winner,
    pub(crate) history: Vec<Move>,
    pub(crate) en_passant: Option<Position>,
    pub(crate) castling: CastleTracking,
}

impl GameState {
    /// Fresh standard starting position, White to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            game_over: false,
            winner: Winner::None,
            history: Vec::new(),
            en_passant: None,
            castling: CastleTracking::new(),
        }
    }

    /// Set up an arbitrary placement with `side_to_move` on move.
    ///
    /// The terminal state is classified immediately, so a setup that is
    /// already checkmate or stalemate reports `is_game_over() == true`.
    pub fn from_board(board: Board, side_to_move: Color) -> GameState {
        let mut state = GameState {
            board,
            side_to_move,
            game_over: false,
            winner: Winner::None,
            history: Vec::new(),
            en_passant: None,
            castling: CastleTracking::new(),
        };
        state.refresh_outcome();
        state
    }

    /// Return the piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return `true` once checkmate or stalemate has been reached.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Return the game result ([`Winner::None`] while the game is running).
    #[inline]
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Return the committed moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Return the most recent committed move.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Number of committed moves (plies).
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Return the square a pawn skipped over on the previous move, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Position> {
        self.en_passant
    }

    /// Return the king-moved / rook-moved flags.
    #[inline]
    pub fn castling(&self) -> &CastleTracking {
        &self.castling
    }

    /// Classify the position for the side to move: no legal moves means the
    /// game is over, decided by whether that side is in check.
    pub(crate) fn refresh_outcome(&mut self) {
        if !self.legal_moves(self.side_to_move).is_empty() {
            return;
        }
        self.game_over = true;
        self.winner = if self.is_in_check(self.side_to_move) {
            Winner::from(self.side_to_move.flip())
        } else {
            Winner::Draw
        };
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("side_to_move", &self.side_to_move)
            .field("winner", &self.winner)
            .field("moves", &self.history.len())
            .field("en_passant", &self.en_passant)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, Winner};
    use crate::board::Board;
    use crate::color::Color;

    #[test]
    fn new_game_defaults() {
        let state = GameState::new();
        assert_eq!(state.side_to_move(), Color::White);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), Winner::None);
        assert!(state.history().is_empty());
        assert_eq!(state.last_move(), None);
        assert_eq!(state.en_passant(), None);
        assert_eq!(*state.board(), Board::starting_position());
    }

    #[test]
    fn winner_helpers() {
        assert_eq!(Winner::from(Color::Black), Winner::Black);
        assert_eq!(Winner::White.color(), Some(Color::White));
        assert_eq!(Winner::Draw.color(), None);
        assert_eq!(format!("{}", Winner::Draw), "draw");
        assert_eq!(Winner::default(), Winner::None);
    }

    #[test]
    fn from_board_detects_checkmate() {
        // Black king h8 boxed in by the white queen on g7, guarded by the king on f6.
        let board: Board = "7k/6Q1/5K2/8/8/8/8/8".parse().unwrap();
        let state = GameState::from_board(board, Color::Black);
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Winner::White);
    }

    #[test]
    fn from_board_detects_stalemate() {
        let board: Board = "k7/2K5/1Q6/8/8/8/8/8".parse().unwrap();
        let state = GameState::from_board(board, Color::Black);
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Winner::Draw);
    }

    #[test]
    fn from_board_ongoing() {
        let state = GameState::from_board(Board::starting_position(), Color::Black);
        assert!(!state.is_game_over());
        assert_eq!(state.side_to_move(), Color::Black);
    }
}
