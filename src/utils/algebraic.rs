//! Square-name conversions (`"e4"` <-> `Position`) used by the FEN fields.

use crate::errors::ChessError;
use crate::game_state::chess_types::Position;

/// Convert a square name (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidFen(format!("invalid square: {square}")));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidFen(format!(
            "invalid file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidFen(format!(
            "invalid rank: {}",
            rank as char
        )));
    }

    Position::new(i16::from(b'8' - rank), i16::from(file - b'a'))
}

/// Convert a position to its square name (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.col() as u8);
    let rank_char = char::from(b'8' - position.row() as u8);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_squares_convert_both_ways() {
        assert_eq!(
            algebraic_to_position("a8").expect("a8 should parse"),
            Position::new(0, 0).unwrap()
        );
        assert_eq!(
            algebraic_to_position("h1").expect("h1 should parse"),
            Position::new(7, 7).unwrap()
        );
        assert_eq!(
            algebraic_to_position("e3").expect("e3 should parse"),
            Position::new(5, 4).unwrap()
        );
        assert_eq!(position_to_algebraic(Position::new(4, 4).unwrap()), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_position("i1").is_err());
        assert!(algebraic_to_position("a9").is_err());
        assert!(algebraic_to_position("e").is_err());
    }
}
