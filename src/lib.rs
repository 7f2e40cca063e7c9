//! Crate root module declarations for the Duel Chess rules engine.
//!
//! Exposes the game state model, move generation, the legality filter, state
//! transitions, status calculation, the automated move selector and the
//! utilities hosts need (FEN, rendering, state replication) under stable
//! module paths. The most common entry points are re-exported at the root.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_tracing;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
    pub mod state_codec;
}

pub use engines::engine_greedy::select_move;
pub use errors::ChessError;
pub use game_state::board::Board;
pub use game_state::chess_types::{CastlingRights, Move, Piece, PieceKind, Player, Position};
pub use game_state::game_state::{initial_state, GameState, Status};
pub use move_generation::game_status::calculate_status;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::is_square_attacked;
pub use move_generation::legal_move_generator::{has_any_legal_moves, legal_moves};
