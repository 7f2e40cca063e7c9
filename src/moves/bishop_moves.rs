use crate::game_state::board::Board;
use crate::game_state::chess_types::{Player, Position};
use crate::moves::ray_tracing::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_targets(board: &Board, from: Position, color: Player, out: &mut Vec<Position>) {
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}
