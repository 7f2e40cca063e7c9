//! JSON codec for `GameState` and the port hosts use to replicate it.
//!
//! The rules engine has no networking or storage of its own. A host that
//! synchronises games (for example between two clients) implements
//! `StateSyncPort` over its transport and moves encoded states through it.

use crate::errors::ChessError;
use crate::game_state::game_state::GameState;

pub fn encode_game_state(game_state: &GameState) -> Result<String, ChessError> {
    Ok(serde_json::to_string(game_state)?)
}

/// Decode and structurally validate a state produced by `encode_game_state`.
pub fn decode_game_state(encoded: &str) -> Result<GameState, ChessError> {
    let game_state: GameState = serde_json::from_str(encoded)?;
    game_state.validate()?;
    Ok(game_state)
}

/// Transport for serialized game states, supplied by the host.
pub trait StateSyncPort {
    fn publish(&mut self, encoded: String) -> Result<(), ChessError>;

    /// Latest published state, if any.
    fn retrieve(&self) -> Result<Option<String>, ChessError>;
}

pub fn publish_state<P: StateSyncPort + ?Sized>(
    port: &mut P,
    game_state: &GameState,
) -> Result<(), ChessError> {
    port.publish(encode_game_state(game_state)?)
}

pub fn retrieve_state<P: StateSyncPort + ?Sized>(port: &P) -> Result<Option<GameState>, ChessError> {
    port.retrieve()?
        .map(|encoded| decode_game_state(&encoded))
        .transpose()
}

/// Keeps the most recent state in memory. Useful for local play and tests.
#[derive(Debug, Default)]
pub struct InMemorySyncPort {
    latest: Option<String>,
    publish_count: usize,
}

impl InMemorySyncPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_count(&self) -> usize {
        self.publish_count
    }
}

impl StateSyncPort for InMemorySyncPort {
    fn publish(&mut self, encoded: String) -> Result<(), ChessError> {
        self.latest = Some(encoded);
        self.publish_count += 1;
        Ok(())
    }

    fn retrieve(&self) -> Result<Option<String>, ChessError> {
        Ok(self.latest.clone())
    }
}
