//! Error types for core module
//!
//! Covers settings persistence and parsing of typed commands. Failures here
//! never touch the game state.

use thiserror::Error;

use crate::game::error::GameError;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A setting holds a value the game cannot use
    #[error("Invalid setting: {message}")]
    InvalidSetting { message: String },

    /// A typed command could not be understood
    #[error("Could not parse command '{input}': {message}")]
    CommandParse { input: String, message: String },

    /// A command named a square, board or piece that does not exist
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
