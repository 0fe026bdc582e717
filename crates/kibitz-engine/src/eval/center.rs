//! Center control: a bonus for every central square a side's pieces can reach.

use kibitz_core::{Color, GameState, Position};

/// Bonus per controlled central square.
const CENTER_BONUS: i32 = 15;

/// Bonus per controlled extended-center square.
const EXTENDED_CENTER_BONUS: i32 = 5;

/// d5, e5, d4, e4.
const CENTER: [Position; 4] = [
    Position::new(3, 3),
    Position::new(3, 4),
    Position::new(4, 3),
    Position::new(4, 4),
];

/// The ring of twelve squares around [`CENTER`].
const EXTENDED_CENTER: [Position; 12] = [
    Position::new(2, 2),
    Position::new(2, 3),
    Position::new(2, 4),
    Position::new(2, 5),
    Position::new(3, 2),
    Position::new(3, 5),
    Position::new(4, 2),
    Position::new(4, 5),
    Position::new(5, 2),
    Position::new(5, 3),
    Position::new(5, 4),
    Position::new(5, 5),
];

/// Total center-control bonus for `color`.
pub fn center_control(state: &GameState, color: Color) -> i32 {
    let count = |squares: &[Position]| {
        squares
            .iter()
            .filter(|&&sq| state.is_square_controlled(sq, color))
            .count() as i32
    };
    count(&CENTER) * CENTER_BONUS + count(&EXTENDED_CENTER) * EXTENDED_CENTER_BONUS
}
