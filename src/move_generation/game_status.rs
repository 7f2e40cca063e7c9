//! Terminal-state and check classification.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Status;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_moves;

/// Status of `board` with `turn` to move. A missing king reads as "in check".
pub fn calculate_status(
    board: &Board,
    turn: Player,
    castling_rights: &CastlingRights,
    en_passant_target: Option<Position>,
) -> Status {
    let in_check = is_king_in_check(board, turn);
    let has_moves = has_any_legal_moves(board, turn, castling_rights, en_passant_target);

    match (has_moves, in_check) {
        (false, true) => Status::Checkmate {
            winner: turn.opposite(),
        },
        (false, false) => Status::Stalemate,
        (true, true) => Status::Check { turn },
        (true, false) => Status::Normal { turn },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    fn status_of(fen: &str) -> Status {
        let state = GameState::from_fen(fen).unwrap();
        calculate_status(
            state.current_board(),
            state.turn,
            &state.castling_rights,
            state.en_passant_target,
        )
    }

    #[test]
    fn starting_position_is_normal() {
        let board = Board::starting();
        assert_eq!(
            calculate_status(&board, Player::White, &CastlingRights::ALL, None),
            Status::Normal {
                turn: Player::White
            }
        );
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        assert_eq!(
            status_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"),
            Status::Checkmate {
                winner: Player::White
            }
        );
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        assert_eq!(status_of("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), Status::Stalemate);
    }

    #[test]
    fn check_with_an_escape_is_check() {
        assert_eq!(
            status_of("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1"),
            Status::Check {
                turn: Player::Black
            }
        );
    }

    #[test]
    fn missing_king_with_no_pieces_reads_as_checkmate() {
        let mut board = Board::starting();
        for (pos, _) in Board::starting().pieces_of(Player::Black) {
            board.set(pos, None);
        }
        assert_eq!(
            calculate_status(&board, Player::Black, &CastlingRights::NONE, None),
            Status::Checkmate {
                winner: Player::White
            }
        );
    }
}
