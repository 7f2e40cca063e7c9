//! Shared ray casting for sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Player, Position};

/// Walk from `from` along `(d_row, d_col)` until the edge or the first
/// occupied square. That square is included only if it holds an enemy of
/// `color`.
pub fn trace_ray(
    board: &Board,
    from: Position,
    color: Player,
    (d_row, d_col): (i8, i8),
    out: &mut Vec<Position>,
) {
    let mut current = from.offset(d_row, d_col);
    while let Some(pos) = current {
        match board.get(pos) {
            None => out.push(pos),
            Some(piece) => {
                if piece.color != color {
                    out.push(pos);
                }
                return;
            }
        }
        current = pos.offset(d_row, d_col);
    }
}

/// Trace every direction in `directions`.
pub fn trace_rays(
    board: &Board,
    from: Position,
    color: Player,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &direction in directions {
        trace_ray(board, from, color, direction, out);
    }
}
