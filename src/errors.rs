//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type of the crate. Regular game outcomes
//! (check, checkmate, stalemate, no legal moves) are `Status` values and never
//! show up here; this enum only covers malformed input and broken invariants.
//!
//! Usage guidelines:
//! - Parsing and lookup helpers return `Result<..., ChessError>` and callers
//!   propagate with `?`.
//! - `MissingKing` and `DuplicateKing` indicate a corrupted position. The rules
//!   engine itself fails safe (an absent king counts as "in check"), so hosts
//!   should call `GameState::validate` and surface these as invariant
//!   violations rather than tolerate them.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Player;

#[derive(Debug)]
pub enum ChessError {
    /// Row/column pair outside `0..=7`.
    ///
    /// Payload: (row, col) as requested.
    PositionOutOfRange((i16, i16)),

    /// A FEN string could not be interpreted.
    ///
    /// Payload: a short description of what was wrong.
    InvalidFen(String),

    /// No king of this color is on the board.
    MissingKing(Player),

    /// More than one king of this color is on the board.
    DuplicateKing(Player),

    /// A `GameState` arrived with no boards in its history.
    EmptyHistory,

    /// Encoding or decoding a serialized `GameState` failed.
    Serialization(serde_json::Error),

    /// An engine could not produce a result.
    EngineFailure(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::PositionOutOfRange((row, col)) => {
                write!(f, "position ({row}, {col}) is off the board")
            }
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::MissingKing(color) => write!(f, "no {color} king on the board"),
            ChessError::DuplicateKing(color) => write!(f, "more than one {color} king on the board"),
            ChessError::EmptyHistory => write!(f, "game state has an empty board history"),
            ChessError::Serialization(e) => write!(f, "game state serialization failed: {e}"),
            ChessError::EngineFailure(msg) => write!(f, "engine failure: {msg}"),
        }
    }
}

impl Error for ChessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChessError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChessError {
    fn from(e: serde_json::Error) -> Self {
        ChessError::Serialization(e)
    }
}
