//! Core value types shared by every layer of the rules engine.
//! All of them are small `Copy` values so boards and states can be
//! snapshotted without any deep cloning.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ChessError;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::{GameState, Status};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a forward pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// Sign applied to material when scoring from White's point of view.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Fixed material value used by the greedy selector.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Player) -> Self {
        Self { kind, color }
    }
}

/// A square on the board. Row 0 is Black's back rank, row 7 is White's.
/// Deserialization goes through `Position::new`, so decoded squares are
/// always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: i16, col: i16) -> Result<Self, ChessError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::PositionOutOfRange((row, col)))
        }
    }

    /// Only for coordinates that are in range by construction (loops over
    /// `0..8`, constant tables).
    #[inline]
    pub(crate) const fn from_index(row: usize, col: usize) -> Self {
        Self {
            row: (row & 7) as u8,
            col: (col & 7) as u8,
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Step by `(d_row, d_col)`; `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Every square, row-major from (0,0) to (7,7).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(|i| Position::from_index(i / 8, i % 8))
    }
}

/// Unchecked wire form of a `Position`.
#[derive(Deserialize)]
struct PositionRecord {
    row: i16,
    col: i16,
}

impl TryFrom<PositionRecord> for Position {
    type Error = ChessError;

    fn try_from(record: PositionRecord) -> Result<Self, Self::Error> {
        Position::new(record.row, record.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideCastlingRights {
    pub const ALL: Self = Self {
        kingside: true,
        queenside: true,
    };
    pub const NONE: Self = Self {
        kingside: false,
        queenside: false,
    };
}

/// Castling permissions. Bits only ever go from `true` to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white: SideCastlingRights::ALL,
        black: SideCastlingRights::ALL,
    };
    pub const NONE: Self = Self {
        white: SideCastlingRights::NONE,
        black: SideCastlingRights::NONE,
    };

    #[inline]
    pub const fn for_player(&self, color: Player) -> SideCastlingRights {
        match color {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }

    #[inline]
    pub fn for_player_mut(&mut self, color: Player) -> &mut SideCastlingRights {
        match color {
            Player::White => &mut self.white,
            Player::Black => &mut self.black,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_out_of_range_coordinates() {
        assert!(Position::new(0, 0).is_ok());
        assert!(Position::new(7, 7).is_ok());
        assert!(matches!(
            Position::new(8, 0),
            Err(ChessError::PositionOutOfRange((8, 0)))
        ));
        assert!(Position::new(0, -1).is_err());
    }

    #[test]
    fn offset_stops_at_the_board_edge() {
        let corner = Position::new(0, 7).unwrap();
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, -1), Some(Position::new(1, 6).unwrap()));
    }

    #[test]
    fn all_positions_cover_the_board_once() {
        let squares: Vec<Position> = Position::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Position::new(0, 0).unwrap());
        assert_eq!(squares[63], Position::new(7, 7).unwrap());
    }

    #[test]
    fn decoded_positions_are_range_checked() {
        let ok: Move =
            serde_json::from_str(r#"{"from":{"row":6,"col":4},"to":{"row":4,"col":4}}"#).unwrap();
        assert_eq!(
            ok,
            Move::new(Position::new(6, 4).unwrap(), Position::new(4, 4).unwrap())
        );

        let off_board =
            serde_json::from_str::<Move>(r#"{"from":{"row":9,"col":0},"to":{"row":4,"col":4}}"#);
        assert!(off_board.is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":-1}"#).is_err());
    }

    #[test]
    fn players_alternate_and_point_forward() {
        assert_eq!(Player::White.opposite(), Player::Black);
        assert_eq!(Player::White.forward(), -1);
        assert_eq!(Player::Black.back_rank(), 0);
    }
}
