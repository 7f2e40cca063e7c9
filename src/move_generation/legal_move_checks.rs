//! Attack detection.
//!
//! Pawns are special-cased to their diagonal attack squares. Every other piece
//! reuses `pseudo_legal_moves` with castling and en passant switched off, so
//! this module never recurses back into castling generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal_moves::pseudo_legal_moves;
use crate::moves::pawn_moves::pawn_attacks;

/// Square of `color`'s king, if there is one.
#[inline]
pub fn king_position(board: &Board, color: Player) -> Option<Position> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(pos, _)| pos)
}

/// An absent king counts as in check so a corrupted position never reads as
/// safe.
#[inline]
pub fn is_king_in_check(board: &Board, color: Player) -> bool {
    let Some(king_pos) = king_position(board, color) else {
        return true;
    };
    is_square_attacked(board, king_pos, color.opposite())
}

pub fn is_square_attacked(board: &Board, position: Position, attacker_color: Player) -> bool {
    board.pieces_of(attacker_color).any(|(from, piece)| match piece.kind {
        PieceKind::Pawn => pawn_attacks(attacker_color, from).any(|target| target == position),
        PieceKind::Knight
        | PieceKind::Bishop
        | PieceKind::Rook
        | PieceKind::Queen
        | PieceKind::King => pseudo_legal_moves(board, from, None, None).contains(&position),
    })
}
