//! Type definitions for the twin-board data model
//!
//! Provides the small value types every other module speaks in: which board a
//! square sits on, the square coordinate itself, piece colors and piece ids.
//! All of them are `Copy` or cheap to clone and carry no ECS coupling.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Side length of each board unless the settings say otherwise
pub const BOARD_SIZE: u8 = 8;

/// Destinations a selected piece may move to. Ordered so highlights render
/// and serialize the same way every time.
pub type CandidateMoves = BTreeSet<Square>;

/// One of the two stacked 8×8 grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    Lower,
    Upper,
}

impl Board {
    /// The board a crossing move lands on
    pub fn opposite(self) -> Self {
        match self {
            Board::Lower => Board::Upper,
            Board::Upper => Board::Lower,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Board::Lower => "lower",
            Board::Upper => "upper",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> GameResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "l" => Ok(Board::Lower),
            "upper" | "u" => Ok(Board::Upper),
            other => Err(GameError::UnknownBoard {
                name: other.to_string(),
            }),
        }
    }
}

/// Player / piece color. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::Red => PieceColor::Black,
            PieceColor::Black => PieceColor::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Black => "black",
        }
    }
}

impl Default for PieceColor {
    fn default() -> Self {
        PieceColor::Red
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceColor {
    type Err = GameError;

    fn from_str(s: &str) -> GameResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(PieceColor::Red),
            "black" | "b" => Ok(PieceColor::Black),
            other => Err(GameError::UnknownColor {
                name: other.to_string(),
            }),
        }
    }
}

/// A single cell identified by `(row, col, board)`
///
/// Fields are public so the presentation layer can build squares from picks
/// directly. Use [`Square::try_new`] when the coordinates come from untrusted
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub board: Board,
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square without bounds checking
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let square = Square::new(2, 3, Board::Lower);
    /// assert!(square.is_playable());
    /// ```
    pub const fn new(row: u8, col: u8, board: Board) -> Self {
        Square { board, row, col }
    }

    /// Create a square, rejecting coordinates outside a `bounds`×`bounds` grid
    pub fn try_new(row: u8, col: u8, board: Board, bounds: u8) -> GameResult<Self> {
        if row >= bounds || col >= bounds {
            return Err(GameError::InvalidSquare { row, col, bounds });
        }
        Ok(Square::new(row, col, board))
    }

    /// Dark squares are the only ones a piece may stand on
    pub fn is_playable(self) -> bool {
        (u16::from(self.row) + u16::from(self.col)) % 2 == 1
    }

    pub fn in_bounds(self, bounds: u8) -> bool {
        self.row < bounds && self.col < bounds
    }

    /// Step by a signed offset on the same board, `None` if it leaves the grid
    pub fn offset(self, d_row: i8, d_col: i8, bounds: u8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let range = 0..bounds as i16;
        if range.contains(&row) && range.contains(&col) {
            Some(Square::new(row as u8, col as u8, self.board))
        } else {
            None
        }
    }

    /// Convert to `(row, col)` for code that only cares about one board
    pub fn to_tuple(self) -> (u8, u8) {
        (self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}@{}", self.row, self.col, self.board)
    }
}

/// Stable piece identifier such as `red_2_3`
///
/// Built from the color and starting square, so ids survive moves and resets
/// produce the same ids again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub String);

impl PieceId {
    pub fn for_start(color: PieceColor, row: u8, col: u8) -> Self {
        PieceId(format!("{}_{}_{}", color.name(), row, col))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieceId {
    fn from(value: &str) -> Self {
        PieceId(value.to_string())
    }
}

impl From<String> for PieceId {
    fn from(value: String) -> Self {
        PieceId(value)
    }
}
