use crate::game_state::board::Board;
use crate::game_state::chess_types::{Player, Position};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::ray_tracing::trace_rays;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn queen_targets(board: &Board, from: Position, color: Player, out: &mut Vec<Position>) {
    trace_rays(board, from, color, &BISHOP_DIRECTIONS, out);
    trace_rays(board, from, color, &ROOK_DIRECTIONS, out);
}
