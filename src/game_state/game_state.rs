//! Immutable game snapshot.
//!
//! `GameState` is the value exchanged with hosts: the append-only board
//! history, the side to move, castling rights, the en passant target, the
//! checked king's square and the derived status. Every transition builds a
//! new value; nothing here is mutated once handed out.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

static EMPTY_BOARD: Board = Board::empty();

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Status {
    Normal { turn: Player },
    Check { turn: Player },
    Checkmate { winner: Player },
    Stalemate,
    Resigned { winner: Player },
}

impl Status {
    #[inline]
    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            Status::Checkmate { .. } | Status::Stalemate | Status::Resigned { .. }
        )
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Checkmate { winner } | Status::Resigned { winner } => Some(winner),
            Status::Normal { .. } | Status::Check { .. } | Status::Stalemate => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Normal { turn } => write!(f, "{turn}'s Turn"),
            Status::Check { turn } => write!(f, "Check! {turn}'s Turn"),
            Status::Checkmate { winner } => write!(f, "Checkmate! {winner} wins."),
            Status::Stalemate => write!(f, "Stalemate! It's a draw."),
            Status::Resigned { winner } => {
                write!(f, "{} resigns. {winner} wins.", winner.opposite())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Oldest first; the last board is the current position.
    pub history: Vec<Board>,
    pub turn: Player,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Position>,
    pub king_in_check_position: Option<Position>,
    pub status: Status,
}

/// Standard starting position, White to move.
pub fn initial_state() -> GameState {
    GameState {
        history: vec![Board::starting()],
        turn: Player::White,
        castling_rights: CastlingRights::ALL,
        en_passant_target: None,
        king_in_check_position: None,
        status: Status::Normal {
            turn: Player::White,
        },
    }
}

impl Default for GameState {
    fn default() -> Self {
        initial_state()
    }
}

impl GameState {
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// The current position. A validated state always has one; a malformed
    /// deserialized state with no history reads as an empty board.
    #[inline]
    pub fn current_board(&self) -> &Board {
        self.history.last().unwrap_or(&EMPTY_BOARD)
    }

    /// Number of plies played since this state's history began.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Structural checks a host should run on states it did not build itself,
    /// e.g. after retrieving one from a sync port.
    pub fn validate(&self) -> Result<(), ChessError> {
        if self.history.is_empty() {
            return Err(ChessError::EmptyHistory);
        }
        let board = self.current_board();
        for color in [Player::White, Player::Black] {
            match board.count(PieceKind::King, color) {
                0 => return Err(ChessError::MissingKing(color)),
                1 => {}
                _ => return Err(ChessError::DuplicateKing(color)),
            }
        }
        Ok(())
    }

    /// `player` concedes. The board history is left untouched.
    pub fn resign(&self, player: Player) -> GameState {
        GameState {
            status: Status::Resigned {
                winner: player.opposite(),
            },
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_white_to_move_with_full_rights() {
        let state = initial_state();
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.turn, Player::White);
        assert_eq!(state.castling_rights, CastlingRights::ALL);
        assert_eq!(state.en_passant_target, None);
        assert_eq!(state.king_in_check_position, None);
        assert_eq!(state.status, Status::Normal { turn: Player::White });
        assert_eq!(state.status.to_string(), "White's Turn");
        assert!(state.validate().is_ok());
    }

    #[test]
    fn status_text_matches_each_outcome() {
        assert_eq!(
            Status::Check { turn: Player::Black }.to_string(),
            "Check! Black's Turn"
        );
        assert_eq!(
            Status::Checkmate {
                winner: Player::Black
            }
            .to_string(),
            "Checkmate! Black wins."
        );
        assert_eq!(Status::Stalemate.to_string(), "Stalemate! It's a draw.");
        assert_eq!(
            Status::Resigned {
                winner: Player::Black
            }
            .to_string(),
            "White resigns. Black wins."
        );
    }

    #[test]
    fn resign_ends_the_game_without_touching_history() {
        let state = initial_state();
        let resigned = state.resign(Player::White);
        assert!(resigned.is_game_over());
        assert_eq!(resigned.status.winner(), Some(Player::Black));
        assert_eq!(resigned.history, state.history);
        assert!(!state.is_game_over());
    }

    #[test]
    fn validate_flags_missing_and_duplicate_kings() {
        let mut state = initial_state();
        let mut board = *state.current_board();
        board.set(Position::new(0, 4).unwrap(), None);
        state.history = vec![board];
        assert!(matches!(
            state.validate(),
            Err(ChessError::MissingKing(Player::Black))
        ));

        board.set(
            Position::new(4, 4).unwrap(),
            Some(Piece::new(PieceKind::King, Player::White)),
        );
        board.set(
            Position::new(0, 4).unwrap(),
            Some(Piece::new(PieceKind::King, Player::Black)),
        );
        state.history = vec![board];
        assert!(matches!(
            state.validate(),
            Err(ChessError::DuplicateKing(Player::White))
        ));

        state.history.clear();
        assert!(matches!(state.validate(), Err(ChessError::EmptyHistory)));
    }
}
