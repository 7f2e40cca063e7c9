//! State transitions.
//!
//! `apply_move` turns one legal move into the next `GameState`: promotion,
//! en passant capture, castling rook relocation, castling-rights bookkeeping,
//! the new en passant target, check position and status. The previous state
//! is never modified.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::calculate_status;
use crate::move_generation::legal_move_checks::{is_king_in_check, king_position};
use crate::moves::pawn_moves::promotion_row;

/// Apply `from -> to`, which must come from `legal_moves(game_state, from)`.
/// The move is not re-validated. An empty `from` square yields an unchanged
/// copy of the state.
pub fn apply_move(game_state: &GameState, from: Position, to: Position) -> GameState {
    let board = game_state.current_board();
    let Some(piece) = board.get(from) else {
        return game_state.clone();
    };

    let mover = piece.color;
    let next_board = play_on_board(board, from, to, game_state.en_passant_target);
    let castling_rights = update_castling_rights(board, game_state.castling_rights, from, to);

    let en_passant_target = if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2
    {
        Some(Position::from_index((from.row() + to.row()) / 2, from.col()))
    } else {
        None
    };

    let turn = mover.opposite();
    let king_in_check_position = if is_king_in_check(&next_board, turn) {
        king_position(&next_board, turn)
    } else {
        None
    };
    let status = calculate_status(&next_board, turn, &castling_rights, en_passant_target);

    let mut history = Vec::with_capacity(game_state.history.len() + 1);
    history.extend_from_slice(&game_state.history);
    history.push(next_board);

    GameState {
        history,
        turn,
        castling_rights,
        en_passant_target,
        king_in_check_position,
        status,
    }
}

/// Board after `from -> to` with every piece side effect: queen promotion,
/// removal of a pawn taken en passant and the rook hop of a castling king.
/// Used both for real transitions and for the legality filter's scratch
/// boards.
pub fn play_on_board(
    board: &Board,
    from: Position,
    to: Position,
    en_passant_target: Option<Position>,
) -> Board {
    let mut next = *board;
    let Some(piece) = next.take(from) else {
        return next;
    };
    next.set(to, Some(piece));

    match piece.kind {
        PieceKind::Pawn => {
            if to.row() == promotion_row(piece.color) {
                next.set(to, Some(Piece::new(PieceKind::Queen, piece.color)));
            }
            if en_passant_target == Some(to) {
                if let Some(captured_square) = to.offset(-piece.color.forward(), 0) {
                    next.set(captured_square, None);
                }
            }
        }
        PieceKind::King if from.col().abs_diff(to.col()) == 2 => {
            let (rook_col, rook_target_col) = if to.col() > from.col() {
                (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL)
            } else {
                (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL)
            };
            let rook_from = Position::from_index(from.row(), rook_col);
            let rook_to = Position::from_index(from.row(), rook_target_col);
            let rook = next.take(rook_from);
            next.set(rook_to, rook);
        }
        PieceKind::Knight
        | PieceKind::Bishop
        | PieceKind::Rook
        | PieceKind::Queen
        | PieceKind::King => {}
    }

    next
}

/// Rights after `from -> to` on `board` (the position before the move).
/// A rook captured on its home corner is judged from `board`'s occupant of
/// `to`, before the capture happens.
pub fn update_castling_rights(
    board: &Board,
    rights: CastlingRights,
    from: Position,
    to: Position,
) -> CastlingRights {
    let mut next = rights;
    let Some(piece) = board.get(from) else {
        return next;
    };

    match piece.kind {
        PieceKind::King => *next.for_player_mut(piece.color) = SideCastlingRights::NONE,
        PieceKind::Rook => clear_corner_right(&mut next, piece.color, from),
        PieceKind::Pawn | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => {}
    }

    if let Some(captured) = board.get(to) {
        if captured.kind == PieceKind::Rook && captured.color != piece.color {
            clear_corner_right(&mut next, captured.color, to);
        }
    }

    next
}

fn clear_corner_right(rights: &mut CastlingRights, color: Player, square: Position) {
    if square.row() != color.back_rank() as usize {
        return;
    }
    let side = rights.for_player_mut(color);
    match square.col() {
        QUEENSIDE_ROOK_COL => side.queenside = false,
        KINGSIDE_ROOK_COL => side.kingside = false,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::{initial_state, Status};
    use crate::move_generation::legal_move_generator::legal_moves;

    fn pos(row: i16, col: i16) -> Position {
        Position::new(row, col).unwrap()
    }

    fn play(state: &GameState, from: (i16, i16), to: (i16, i16)) -> GameState {
        let from = pos(from.0, from.1);
        let to = pos(to.0, to.1);
        assert!(
            legal_moves(state, from).contains(&to),
            "{from:?} -> {to:?} should be legal"
        );
        apply_move(state, from, to)
    }

    #[test]
    fn apply_move_leaves_the_input_untouched() {
        let state = initial_state();
        let before = state.clone();
        let next = play(&state, (6, 4), (4, 4));
        assert_eq!(state, before);
        assert_eq!(next.history.len(), 2);
        assert_eq!(next.history[0], before.history[0]);
        assert_eq!(next.turn, Player::Black);
    }

    #[test]
    fn double_step_sets_and_next_move_clears_en_passant_target() {
        let state = play(&initial_state(), (6, 4), (4, 4));
        assert_eq!(state.en_passant_target, Some(pos(5, 4)));
        let state = play(&state, (0, 6), (2, 5));
        assert_eq!(state.en_passant_target, None);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let state = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
        let state = play(&state, (6, 4), (4, 4));
        assert_eq!(state.en_passant_target, Some(pos(5, 4)));

        let state = play(&state, (4, 3), (5, 4));
        let board = state.current_board();
        assert!(board.is_empty_at(pos(4, 4)));
        assert_eq!(
            board.get(pos(5, 4)),
            Some(Piece::new(PieceKind::Pawn, Player::Black))
        );
        assert_eq!(state.en_passant_target, None);
    }

    #[test]
    fn kingside_castling_moves_the_rook_and_clears_both_rights() {
        let mut state = initial_state();
        for (from, to) in [
            ((6, 6), (5, 6)),
            ((1, 0), (2, 0)),
            ((7, 6), (5, 5)),
            ((1, 1), (2, 1)),
            ((7, 5), (6, 6)),
            ((1, 2), (2, 2)),
        ] {
            state = play(&state, from, to);
        }

        let castled = play(&state, (7, 4), (7, 6));
        let board = castled.current_board();
        assert_eq!(
            board.get(pos(7, 6)),
            Some(Piece::new(PieceKind::King, Player::White))
        );
        assert_eq!(
            board.get(pos(7, 5)),
            Some(Piece::new(PieceKind::Rook, Player::White))
        );
        assert!(board.is_empty_at(pos(7, 7)));
        assert!(board.is_empty_at(pos(7, 4)));
        assert_eq!(castled.castling_rights.white, SideCastlingRights::NONE);
        assert_eq!(castled.castling_rights.black, SideCastlingRights::ALL);
    }

    #[test]
    fn queenside_castling_moves_the_rook_to_column_three() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        let castled = play(&state, (0, 4), (0, 2));
        let board = castled.current_board();
        assert_eq!(
            board.get(pos(0, 3)),
            Some(Piece::new(PieceKind::Rook, Player::Black))
        );
        assert!(board.is_empty_at(pos(0, 0)));
        assert_eq!(castled.castling_rights.black, SideCastlingRights::NONE);
        assert_eq!(castled.castling_rights.white, SideCastlingRights::ALL);
    }

    #[test]
    fn moving_a_corner_rook_clears_only_its_side() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let state = play(&state, (7, 0), (6, 0));
        assert!(!state.castling_rights.white.queenside);
        assert!(state.castling_rights.white.kingside);

        // Moving it back does not restore the right.
        let state = play(&state, (0, 7), (1, 7));
        assert!(!state.castling_rights.black.kingside);
        let state = play(&state, (6, 0), (7, 0));
        assert!(!state.castling_rights.white.queenside);
    }

    #[test]
    fn capturing_a_corner_rook_clears_the_opponents_right() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let state = play(&state, (7, 7), (0, 7));
        assert!(!state.castling_rights.black.kingside);
        assert!(state.castling_rights.black.queenside);
        assert!(!state.castling_rights.white.kingside);
        assert!(state.castling_rights.white.queenside);
    }

    #[test]
    fn promotion_capture_onto_a_corner_rook_clears_the_right() {
        let state = GameState::from_fen("r3k2r/1P6/8/8/8/8/8/4K3 w kq - 0 1").unwrap();
        let state = play(&state, (1, 1), (0, 0));
        assert_eq!(
            state.current_board().get(pos(0, 0)),
            Some(Piece::new(PieceKind::Queen, Player::White))
        );
        assert!(!state.castling_rights.black.queenside);
        assert!(state.castling_rights.black.kingside);
    }

    #[test]
    fn capturing_a_rook_off_its_corner_keeps_rights() {
        // The a8 rook has been replaced by a rook on a7; capturing it there
        // says nothing about the a8 corner.
        let state = GameState::from_fen("4k2r/r7/8/8/8/8/8/R3K3 w k - 0 1").unwrap();
        let state = play(&state, (7, 0), (1, 0));
        assert!(state.castling_rights.black.kingside);
    }

    #[test]
    fn pawns_always_promote_to_a_queen() {
        let white = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let promoted = play(&white, (1, 0), (0, 0));
        assert_eq!(
            promoted.current_board().get(pos(0, 0)),
            Some(Piece::new(PieceKind::Queen, Player::White))
        );

        let black = GameState::from_fen("4k3/8/8/8/8/8/7p/K5N1 b - - 0 1").unwrap();
        let promoted = play(&black, (6, 7), (7, 6));
        assert_eq!(
            promoted.current_board().get(pos(7, 6)),
            Some(Piece::new(PieceKind::Queen, Player::Black))
        );
    }

    #[test]
    fn check_position_points_at_the_checked_king() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let state = play(&state, (7, 0), (0, 0));
        assert_eq!(state.king_in_check_position, Some(pos(0, 4)));
        assert_eq!(state.status, Status::Check { turn: Player::Black });
    }

    #[test]
    fn empty_from_square_returns_the_state_unchanged() {
        let state = initial_state();
        assert_eq!(apply_move(&state, pos(4, 4), pos(3, 4)), state);
    }
}
