//! Game resources - Global session state
//!
//! Resources are ECS singletons shared across systems.
//!
//! - [`TurnEngine`] - Owns the game state: pieces, turn, selection, history
//!
//! Settings live in [`crate::core::GameSettings`].

pub mod turn_engine;


// Re-export all resources for convenience
pub use turn_engine::*;
