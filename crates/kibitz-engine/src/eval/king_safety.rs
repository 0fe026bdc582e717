//! King safety: centralization penalty, back-rank bonus and pawn shield.

use kibitz_core::{Board, Color, PieceKind};

/// Penalty for a king standing in the central 4x4 block.
const CENTRAL_KING_PENALTY: i32 = -30;

/// Bonus for a king still on its own back rank.
const BACK_RANK_BONUS: i32 = 20;

/// Bonus per friendly pawn directly in front of the king (same or adjacent file).
const SHIELD_PAWN_BONUS: i32 = 10;

/// Evaluate the safety of `color`'s king. A missing king scores zero.
///
/// The shield is the up to three squares one row toward the enemy on the
/// king's file and the two neighbouring files.
pub fn king_safety(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_position(color) else {
        return 0;
    };

    let mut safety = 0;

    if (2..=5).contains(&king.row()) && (2..=5).contains(&king.col()) {
        safety += CENTRAL_KING_PENALTY;
    }
    if king.row() == color.back_rank() {
        safety += BACK_RANK_BONUS;
    }

    let shield = (-1..=1)
        .filter_map(|d_col| king.offset(color.forward(), d_col))
        .filter(|&sq| board.get(sq).is_some_and(|p| p.is(PieceKind::Pawn, color)))
        .count() as i32;

    safety + shield * SHIELD_PAWN_BONUS
}
