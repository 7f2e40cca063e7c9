//! Fixed 8x8 board snapshot.
//!
//! `Board` is a plain `Copy` grid of optional pieces, row-major, with row 0 on
//! Black's side. Copying a board yields a fully independent snapshot, which is
//! what the legality filter and the state transition rely on.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{BACK_RANK_ORDER, INITIAL_PIECE_COUNT};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard opening layout.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().copied().enumerate() {
            board.squares[Player::Black.back_rank() as usize][col] =
                Some(Piece::new(kind, Player::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Player::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Player::White));
            board.squares[Player::White.back_rank() as usize][col] =
                Some(Piece::new(kind, Player::White));
        }
        board
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares[position.row()][position.col()]
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    #[inline]
    pub fn set(&mut self, position: Position, square: Option<Piece>) {
        self.squares[position.row()][position.col()] = square;
    }

    /// Remove and return whatever stands on `position`.
    #[inline]
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.row()][position.col()].take()
    }

    /// Rows from 0 (Black's back rank) to 7.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Every occupied square, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, kind: PieceKind, color: Player) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }

    /// Pieces of `color` no longer on the board, cheapest first. Promoted
    /// pawns do not offset the count of the piece they became.
    pub fn captured_pieces(&self, color: Player) -> Vec<Piece> {
        let mut captured = Vec::new();
        for kind in ALL_PIECE_KINDS {
            let missing =
                (INITIAL_PIECE_COUNT[kind.index()] as usize).saturating_sub(self.count(kind, color));
            captured.extend(std::iter::repeat(Piece::new(kind, color)).take(missing));
        }
        captured.sort_by_key(|piece| piece.kind.value());
        captured
    }

    /// Signed material sum, positive in White's favour.
    pub fn material_score(&self) -> i32 {
        self.pieces()
            .map(|(_, piece)| piece.kind.value() * piece.color.sign())
            .sum()
    }
}
