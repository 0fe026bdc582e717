//! Static evaluation.
//!
//! Scores are centipawn-like integers from the point of view of a chosen
//! color: positive favors `perspective`, negative favors its opponent.

pub mod center;
pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pst;

use kibitz_core::{Color, GameState};

use self::center::center_control;
use self::king_safety::king_safety;
use self::material::piece_value;
use self::mobility::mobility;
use self::pst::pst_value;

/// Score of a decided game, before any depth adjustment.
pub const WIN_SCORE: i32 = 100_000;

/// Evaluate `state` from `perspective`'s point of view.
///
/// A finished game scores [`WIN_SCORE`] for a win, `-WIN_SCORE` for a loss
/// and zero for a draw. Otherwise the score sums material and piece-square
/// values, center control, king safety and mobility, each counted for
/// `perspective` and against its opponent.
pub fn evaluate(state: &GameState, perspective: Color) -> i32 {
    if state.is_game_over() {
        return match state.winner().color() {
            Some(winner) if winner == perspective => WIN_SCORE,
            Some(_) => -WIN_SCORE,
            None => 0,
        };
    }

    let board = state.board();
    let opponent = perspective.flip();

    let mut score = 0;
    for (pos, piece) in board.pieces() {
        let value = piece_value(piece.kind()) + pst_value(piece.kind(), piece.color(), pos);
        if piece.color() == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    score += center_control(state, perspective) - center_control(state, opponent);
    score += king_safety(board, perspective) - king_safety(board, opponent);
    score += mobility(state, perspective);

    score
}
