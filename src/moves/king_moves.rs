//! King step pattern. Castling is handled by the move generator because it
//! needs rights and attack information.

use crate::game_state::chess_types::Position;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(from: Position) -> impl Iterator<Item = Position> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Position;

    #[test]
    fn king_targets_from_a1_has_three_targets() {
        let a1 = Position::new(7, 0).unwrap();
        assert_eq!(king_targets(a1).count(), 3);
    }

    #[test]
    fn king_targets_from_e4_has_eight_targets() {
        let e4 = Position::new(4, 4).unwrap();
        assert_eq!(king_targets(e4).count(), 8);
    }
}
