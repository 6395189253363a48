//! Game data components
//!
//! Components are pure data structures with no rule logic. The rules module
//! reads and rewrites them; the ECS layer only wraps them in resources.

pub mod piece;
pub mod game_state;

#[cfg(test)]
mod tests;

// Re-export all components for convenience
pub use game_state::*;
pub use piece::*;
