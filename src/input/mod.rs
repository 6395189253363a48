//! Input module - Terminal stand-in for pointer picking
//!
//! - `command` - Parses typed lines into picks and UI commands
//! - `pick_resolution` - Maps a clicked square to the piece on it, if any

pub mod command;
pub mod pick_resolution;

// Re-export commonly used items
pub use command::{parse_command, TextCommand, HELP};
pub use pick_resolution::resolve_click;
