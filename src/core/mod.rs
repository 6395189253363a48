//! Core module - Configuration and application infrastructure
//!
//! Everything the game needs that is not a rule: user settings, their
//! persistence, and the error type for those concerns.
//!
//! ## Resources
//!
//! - [`GameSettings`] - Mode, difficulty and board size
//! - [`SettingsStore`] - Where settings are saved and whether to autosave
//!
//! Mode and difficulty are stored and persisted only. No rule reads them.

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::SettingsStore;
