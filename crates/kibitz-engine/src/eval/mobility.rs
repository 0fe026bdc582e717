//! Mobility: legal move count difference between the two sides.

use kibitz_core::{Color, GameState};

/// Score per legal move of difference.
const MOBILITY_WEIGHT: i32 = 2;

/// Evaluate mobility from `perspective`'s point of view.
///
/// Legal moves are only ever generated for the side to move, so this term
/// rewards `perspective` when it is on move and penalizes it otherwise.
pub fn mobility(state: &GameState, perspective: Color) -> i32 {
    let ours = state.legal_moves(perspective).len() as i32;
    let theirs = state.legal_moves(perspective.flip()).len() as i32;
    (ours - theirs) * MOBILITY_WEIGHT
}
