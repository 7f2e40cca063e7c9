//! Engine abstraction used by the match harness and the self-play binary.
//!
//! Move-picking strategies sit behind a single trait so they can be swapped
//! at runtime. Diagnostics travel back in `EngineOutput::info_lines` as
//! `info string ...` lines that the host may print or drop.

use crate::errors::ChessError;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Option names compare case-insensitively. Unknown options are ignored.
    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), ChessError> {
        Ok(())
    }

    /// `best_move` is `None` only when the side to move has no legal moves.
    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessError>;
}

/// Shared parser for the `Seed` option.
pub(crate) fn parse_seed(value: &str) -> Result<u64, ChessError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ChessError::EngineFailure(format!("invalid Seed value '{value}'")))
}
