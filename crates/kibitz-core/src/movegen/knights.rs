//! Knight movement pattern.

use crate::position::Position;

/// Return `true` if `to` is an L-shaped jump from `from`. Knights ignore
/// intervening pieces.
#[inline]
pub(super) fn knight_pattern(from: Position, to: Position) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
}

#[cfg(test)]
mod tests {
    use super::knight_pattern;
    use crate::position::Position;

    #[test]
    fn center_knight_has_eight_targets() {
        let from = Position::new(4, 4);
        let count = Position::all().filter(|&to| knight_pattern(from, to)).count();
        assert_eq!(count, 8);
    }

    #[test]
    fn corner_knight_has_two_targets() {
        let from = Position::new(0, 0);
        let targets: Vec<_> = Position::all().filter(|&to| knight_pattern(from, to)).collect();
        assert_eq!(targets, vec![Position::new(1, 2), Position::new(2, 1)]);
    }
}
