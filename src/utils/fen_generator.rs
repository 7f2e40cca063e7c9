//! GameState-to-FEN generator.
//!
//! The halfmove clock is always 0 (the fifty-move rule is not tracked) and the
//! fullmove number is derived from the length of the board history.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::position_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.current_board());
    let side_to_move = match game_state.turn {
        Player::White => "w",
        Player::Black => "b",
    };
    let castling = generate_castling_field(&game_state.castling_rights);
    let en_passant = game_state
        .en_passant_target
        .map(position_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());
    let fullmove_number = game_state.ply_count() / 2 + 1;

    format!("{board} {side_to_move} {castling} {en_passant} 0 {fullmove_number}")
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, squares) in board.rows().iter().enumerate() {
        let mut empty_count = 0u8;

        for square in squares {
            if let Some(piece) = square {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(*piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Player::White => base.to_ascii_uppercase(),
        Player::Black => base,
    }
}

fn generate_castling_field(rights: &CastlingRights) -> String {
    let mut out = String::new();

    if rights.white.kingside {
        out.push('K');
    }
    if rights.white.queenside {
        out.push('Q');
    }
    if rights.black.kingside {
        out.push('k');
    }
    if rights.black.queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
