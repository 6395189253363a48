//! UI module - Text rendering for the terminal front-end
//!
//! Reads [`GameState`](crate::game::components::GameState) only; nothing here
//! changes the game.

pub mod text_board;

// Re-export commonly used items
pub use text_board::*;
