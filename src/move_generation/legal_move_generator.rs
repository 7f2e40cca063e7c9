//! Legality filter.
//!
//! Narrows pseudo-legal destinations by playing each candidate on a scratch
//! copy of the board and rejecting the ones that leave the mover's king in
//! check. Whose turn it is never gates these queries; callers decide which
//! squares they ask about.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, play_on_board};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::move_generation::pseudo_legal_moves::pseudo_legal_moves;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        all_legal_moves(game_state)
            .into_iter()
            .map(|mv| GeneratedMove {
                mv,
                game_after_move: apply_move(game_state, mv.from, mv.to),
            })
            .collect()
    }
}

/// Legal destinations for the piece on `position` of the current board.
/// Empty if the square is empty.
#[inline]
pub fn legal_moves(game_state: &GameState, position: Position) -> Vec<Position> {
    legal_moves_on_board(
        game_state.current_board(),
        &game_state.castling_rights,
        game_state.en_passant_target,
        position,
    )
}

/// Every legal move of the side to move, scanning squares row-major.
pub fn all_legal_moves(game_state: &GameState) -> Vec<Move> {
    let board = game_state.current_board();
    board
        .pieces_of(game_state.turn)
        .flat_map(|(from, _)| {
            legal_moves(game_state, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Scratch boards apply every side effect of the move, including removing a
/// pawn captured en passant, so an en passant capture that uncovers an
/// attack on the mover's king is rejected.
pub fn legal_moves_on_board(
    board: &Board,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Position>,
    position: Position,
) -> Vec<Position> {
    let Some(piece) = board.get(position) else {
        return Vec::new();
    };

    let mut moves =
        pseudo_legal_moves(board, position, Some(castling_rights), en_passant_target);

    // Illegal if own king is in check after move.
    moves.retain(|&to| {
        let scratch = play_on_board(board, position, to, en_passant_target);
        !is_king_in_check(&scratch, piece.color)
    });
    moves
}

/// Whether any piece of `turn` has a legal move. Not cached; used for
/// terminal-state detection.
pub fn has_any_legal_moves(
    board: &Board,
    turn: Player,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Position>,
) -> bool {
    board.pieces_of(turn).any(|(from, _)| {
        !legal_moves_on_board(board, castling_rights, en_passant_target, from).is_empty()
    })
}
