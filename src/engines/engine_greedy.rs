//! One-ply greedy move selector.
//!
//! Every legal move of the side to move is played out and the resulting board
//! is scored by signed material (`Board::material_score`, White positive).
//! White takes the maximum, Black the minimum, and equal-best candidates are
//! broken by a uniform random pick from the supplied generator.
//!
//! The search is a single ply on purpose: the opponent's reply is never
//! considered. Tactics such as hanging a queen to win a pawn are therefore
//! invisible to it.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput};
use crate::errors::ChessError;
use crate::game_state::chess_types::{Move, Player};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Pick a move for the side to move. `None` iff it has no legal moves.
pub fn select_move<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> Option<Move> {
    let generated = LegalMoveGenerator.generate_legal_moves(game_state);
    best_candidates(game_state.turn, &generated)
        .1
        .choose(rng)
        .copied()
}

/// Best score from the mover's point of view and every move reaching it.
fn best_candidates(turn: Player, generated: &[GeneratedMove]) -> (i32, Vec<Move>) {
    let mut best_score = None;
    let mut best_moves = Vec::new();

    for candidate in generated {
        let score = candidate.game_after_move.current_board().material_score();
        let better = match (best_score, turn) {
            (None, _) => true,
            (Some(best), Player::White) => score > best,
            (Some(best), Player::Black) => score < best,
        };

        if better {
            best_score = Some(score);
            best_moves.clear();
            best_moves.push(candidate.mv);
        } else if best_score == Some(score) {
            best_moves.push(candidate.mv);
        }
    }

    (best_score.unwrap_or_default(), best_moves)
}

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "DuelChess Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        if name.eq_ignore_ascii_case("Seed") {
            self.rng = StdRng::seed_from_u64(parse_seed(value)?);
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError> {
        let generated = LegalMoveGenerator.generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            generated.len()
        ));

        if generated.is_empty() {
            return Ok(out);
        }

        let (best_score, best_moves) = best_candidates(game_state.turn, &generated);
        let picked = best_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| ChessError::EngineFailure("no greedy candidate to pick".to_owned()))?;

        out.info_lines.push(format!(
            "info string greedy_engine material_score {best_score} candidates {}",
            best_moves.len()
        ));
        out.best_move = Some(picked);
        Ok(out)
    }
}
