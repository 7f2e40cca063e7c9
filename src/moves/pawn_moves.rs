//! Pawn geometry: direction of travel, starting and promotion rows, and the
//! diagonal squares a pawn attacks.

use crate::game_state::chess_types::{Player, Position};

#[inline]
pub const fn pawn_start_row(color: Player) -> usize {
    match color {
        Player::White => 6,
        Player::Black => 1,
    }
}

/// Row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Player) -> usize {
    match color {
        Player::White => 0,
        Player::Black => 7,
    }
}

/// The two forward diagonals. Forward pushes are never attacks.
#[inline]
pub fn pawn_attacks(color: Player, from: Position) -> impl Iterator<Item = Position> {
    let d_row = color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(d_row, d_col))
}
