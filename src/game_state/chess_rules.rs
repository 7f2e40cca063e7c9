//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the starting layout, castling geometry and
//! the initial piece counts used to derive captured material.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from column 0 to column 7, identical for both sides.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: usize = 4;
pub const KINGSIDE_ROOK_COL: usize = 7;
pub const QUEENSIDE_ROOK_COL: usize = 0;
pub const KINGSIDE_ROOK_TARGET_COL: usize = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: usize = 3;

/// Pieces each side starts with, indexed by `PieceKind::index()`.
/// Kings are 0 because they are never captured.
pub const INITIAL_PIECE_COUNT: [u8; 6] = [8, 2, 2, 2, 1, 0];
