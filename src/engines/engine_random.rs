//! Uniform random mover.
//!
//! Picks any legal move with equal probability. Used as a weak sparring
//! partner in engine matches and to drive random-game invariant tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{parse_seed, Engine, EngineOutput};
use crate::errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
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

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "DuelChess Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        if name.eq_ignore_ascii_case("Seed") {
            self.rng = StdRng::seed_from_u64(parse_seed(value)?);
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError> {
        let legal_moves = all_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}
