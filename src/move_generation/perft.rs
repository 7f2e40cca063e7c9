//! Perft: exhaustive leaf counting used to validate move generation against
//! published reference numbers.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, Status};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::pawn_moves::promotion_row;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf statistics at `depth`. Every leaf move is applied, so this is slower
/// than `perft_nodes`.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generator.generate_legal_moves(game_state) {
        if depth == 1 {
            total.merge(classify_leaf(game_state, &generated));
        } else {
            total.merge(perft(generator, &generated.game_after_move, depth - 1));
        }
    }
    total
}

/// Node count only, counting the last ply without applying it.
pub fn perft_nodes(game_state: &GameState, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(game_state);
    if depth == 1 {
        return moves.len();
    }

    moves
        .into_iter()
        .map(|mv| perft_nodes(&apply_move(game_state, mv.from, mv.to), depth - 1))
        .sum()
}

fn classify_leaf(before: &GameState, generated: &GeneratedMove) -> PerftCounts {
    let board = before.current_board();
    let GeneratedMove {
        mv,
        game_after_move,
    } = generated;

    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    let Some(piece) = board.get(mv.from) else {
        return counts;
    };

    let is_en_passant =
        piece.kind == PieceKind::Pawn && before.en_passant_target == Some(mv.to);
    if board.get(mv.to).is_some() || is_en_passant {
        counts.captures = 1;
    }
    if is_en_passant {
        counts.en_passant = 1;
    }
    if piece.kind == PieceKind::King && mv.from.col().abs_diff(mv.to.col()) == 2 {
        counts.castles = 1;
    }
    if piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(piece.color) {
        counts.promotions = 1;
    }
    match game_after_move.status {
        Status::Check { .. } => counts.checks = 1,
        Status::Checkmate { .. } => {
            counts.checks = 1;
            counts.checkmates = 1;
        }
        Status::Normal { .. } | Status::Stalemate | Status::Resigned { .. } => {}
    }
    counts
}
