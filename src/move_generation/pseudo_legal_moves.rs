//! Pseudo-legal destination generation.
//!
//! Produces every square a piece could move to by its movement pattern alone,
//! without asking whether the move exposes its own king. Castling rights are
//! only consulted here, never updated; passing `None` for them switches
//! castling off, which is how the attack detector calls in.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::{pawn_attacks, pawn_start_row};
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Destinations for the piece on `position`; empty if the square is empty.
pub fn pseudo_legal_moves(
    board: &Board,
    position: Position,
    castling_rights: Option<&CastlingRights>,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let Some(piece) = board.get(position) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => {
            generate_pawn_moves(board, position, piece.color, en_passant_target, &mut out)
        }
        PieceKind::Knight => {
            generate_step_moves(board, knight_targets(position), piece.color, &mut out)
        }
        PieceKind::Bishop => bishop_targets(board, position, piece.color, &mut out),
        PieceKind::Rook => rook_targets(board, position, piece.color, &mut out),
        PieceKind::Queen => queen_targets(board, position, piece.color, &mut out),
        PieceKind::King => {
            generate_step_moves(board, king_targets(position), piece.color, &mut out);
            if let Some(rights) = castling_rights {
                generate_castling_moves(board, position, piece.color, rights, &mut out);
            }
        }
    }
    out
}

fn generate_step_moves(
    board: &Board,
    targets: impl Iterator<Item = Position>,
    color: Player,
    out: &mut Vec<Position>,
) {
    for to in targets {
        match board.get(to) {
            Some(occupant) if occupant.color == color => {}
            _ => out.push(to),
        }
    }
}

fn generate_pawn_moves(
    board: &Board,
    from: Position,
    color: Player,
    en_passant_target: Option<Position>,
    out: &mut Vec<Position>,
) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);
            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_attacks(color, from) {
        match board.get(to) {
            Some(occupant) if occupant.color != color => out.push(to),
            None if en_passant_target == Some(to) => out.push(to),
            _ => {}
        }
    }
}

fn generate_castling_moves(
    board: &Board,
    king_from: Position,
    color: Player,
    rights: &CastlingRights,
    out: &mut Vec<Position>,
) {
    let side_rights = rights.for_player(color);
    if !side_rights.kingside && !side_rights.queenside {
        return;
    }

    let home_row = color.back_rank() as usize;
    if king_from != Position::from_index(home_row, KING_START_COL) {
        return;
    }

    let enemy = color.opposite();

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    let square = |col: usize| Position::from_index(home_row, col);
    let own_rook_on = |col: usize| {
        board.get(square(col)) == Some(Piece::new(PieceKind::Rook, color))
    };
    let all_empty = |cols: &[usize]| cols.iter().all(|&col| board.is_empty_at(square(col)));
    let none_attacked =
        |cols: &[usize]| !cols.iter().any(|&col| is_square_attacked(board, square(col), enemy));

    if side_rights.kingside
        && own_rook_on(KINGSIDE_ROOK_COL)
        && all_empty(&[5, 6])
        && none_attacked(&[5, 6])
    {
        out.push(square(6));
    }

    if side_rights.queenside
        && own_rook_on(QUEENSIDE_ROOK_COL)
        && all_empty(&[1, 2, 3])
        && none_attacked(&[3, 2])
    {
        out.push(square(2));
    }
}
