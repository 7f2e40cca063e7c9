//! FEN-to-GameState parser.
//!
//! Builds a single-snapshot `GameState` from a Forsyth-Edwards Notation
//! string: placement, side to move, castling rights and en passant target.
//! The move counters are optional and only checked for being numbers; the
//! state derives its own counters from the board history.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::calculate_status;
use crate::move_generation::legal_move_checks::{is_king_in_check, king_position};
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| missing("board layout"))?;
    let side_part = parts.next().ok_or_else(|| missing("side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| missing("castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| missing("en-passant square"))?;

    for counter in parts.by_ref().take(2) {
        counter
            .parse::<u16>()
            .map_err(|_| ChessError::InvalidFen(format!("invalid move counter: {counter}")))?;
    }
    if parts.next().is_some() {
        return Err(ChessError::InvalidFen(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    let board = parse_board(board_part)?;
    let turn = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_target(en_passant_part)?;

    let king_in_check_position = if is_king_in_check(&board, turn) {
        king_position(&board, turn)
    } else {
        None
    };
    let status = calculate_status(&board, turn, &castling_rights, en_passant_target);

    let game_state = GameState {
        history: vec![board],
        turn,
        castling_rights,
        en_passant_target,
        king_in_check_position,
        status,
    };
    game_state.validate()?;
    Ok(game_state)
}

fn missing(field: &str) -> ChessError {
    ChessError::InvalidFen(format!("missing {field}"))
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if col >= 8 {
                return Err(ChessError::InvalidFen(
                    "board rank has too many files".to_owned(),
                ));
            }

            board.set(Position::from_index(row, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(
                "board rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Player, ChessError> {
    match side_part {
        "w" => Ok(Player::White),
        "b" => Ok(Player::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white.kingside = true,
            'Q' => rights.white.queenside = true,
            'k' => rights.black.kingside = true,
            'q' => rights.black.queenside = true,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str) -> Result<Option<Position>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_position(en_passant_part)?))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Player::White
    } else if ch.is_ascii_lowercase() {
        Player::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::initial_state;

    #[test]
    fn starting_fen_matches_initial_state() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state, initial_state());
    }

    #[test]
    fn fields_are_parsed_into_state() {
        let game_state = parse_fen("4k3/8/8/3pP3/8/8/8/4K2R w Kq d6 0 3")
            .expect("custom FEN should parse");
        assert_eq!(game_state.turn, Player::White);
        assert!(game_state.castling_rights.white.kingside);
        assert!(!game_state.castling_rights.white.queenside);
        assert!(!game_state.castling_rights.black.kingside);
        assert!(game_state.castling_rights.black.queenside);
        assert_eq!(game_state.en_passant_target, Position::new(2, 3).ok());
        assert_eq!(
            game_state
                .current_board()
                .get(Position::new(7, 7).unwrap()),
            Some(Piece::new(PieceKind::Rook, Player::White))
        );
    }

    #[test]
    fn move_counters_are_optional() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 b -").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").is_ok());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 b - - x 1").is_err());
    }

    #[test]
    fn check_is_detected_on_import() {
        let game_state =
            parse_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("check FEN should parse");
        assert_eq!(game_state.king_in_check_position, Position::new(0, 4).ok());
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::InvalidFen(_))
        ));
        assert!(parse_fen("4k3/9/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1").is_err());
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::MissingKing(Player::Black))
        ));
    }
}
