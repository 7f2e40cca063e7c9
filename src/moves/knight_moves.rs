//! Knight jump pattern.

use crate::game_state::chess_types::Position;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `from` jumps to, ignoring occupancy.
#[inline]
pub fn knight_targets(from: Position) -> impl Iterator<Item = Position> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Position;

    #[test]
    fn knight_targets_from_d4_has_eight_targets() {
        let d4 = Position::new(4, 3).unwrap();
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_targets_from_a8_has_two_targets() {
        let a8 = Position::new(0, 0).unwrap();
        assert_eq!(knight_targets(a8).count(), 2);
    }
}
