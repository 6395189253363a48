//! Twin-board checkers game module
//!
//! Pure rules with an ECS shell around them.
//!
//! # Module Organization
//!
//! - `types` - Board, Square, PieceColor, PieceId
//! - `components` - Piece and GameState data
//! - `rules` - Move generation, promotion, move execution, selection state machine
//! - `resources` - TurnEngine, the ECS owner of the game state
//! - `events` - Pick/command input messages and move/selection output messages
//! - `systems` - ECS systems bridging messages and the turn engine
//! - `plugin` - CheckersPlugin that registers everything
//!
//! # Flow
//!
//! A pick that selects an own piece produces candidate destinations; a later
//! pick on one of those squares moves the piece, may crown it, and hands the
//! turn to the other color. Illegal picks are ignored.

pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;
pub mod types;

// Re-export the plugin (main entry point)
pub use plugin::CheckersPlugin;
