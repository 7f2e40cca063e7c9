//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the
//! self-play binary.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string, White at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, squares) in board.rows().iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, square) in squares.iter().enumerate() {
            match square {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus the status line.
pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{}",
        render_board(game_state.current_board()),
        game_state.status
    )
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Player::White, PieceKind::Pawn) => '♙',
        (Player::White, PieceKind::Knight) => '♘',
        (Player::White, PieceKind::Bishop) => '♗',
        (Player::White, PieceKind::Rook) => '♖',
        (Player::White, PieceKind::Queen) => '♕',
        (Player::White, PieceKind::King) => '♔',
        (Player::Black, PieceKind::Pawn) => '♟',
        (Player::Black, PieceKind::Knight) => '♞',
        (Player::Black, PieceKind::Bishop) => '♝',
        (Player::Black, PieceKind::Rook) => '♜',
        (Player::Black, PieceKind::Queen) => '♛',
        (Player::Black, PieceKind::King) => '♚',
    }
}
