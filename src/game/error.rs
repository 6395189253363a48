//! Error types for game module
//!
//! Rule violations are never errors: an illegal pick or move is rejected and
//! the state stays as it was. These errors only cover building game values from
//! outside input (typed commands, settings files, pick resolution).

/// Errors that can occur while constructing game values
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates fall outside the board
    #[error("Square ({row}, {col}) is outside a {bounds}x{bounds} board")]
    InvalidSquare { row: u8, col: u8, bounds: u8 },

    /// Board name was neither lower nor upper
    #[error("Unknown board: {name}")]
    UnknownBoard { name: String },

    /// Color name was neither red nor black
    #[error("Unknown piece color: {name}")]
    UnknownColor { name: String },

    /// No piece carries the given id
    #[error("Piece not found: {id}")]
    PieceNotFound { id: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
