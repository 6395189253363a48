//! Game systems module - ECS side of the turn engine
//!
//! Thin wrappers that move messages in and out of [`TurnEngine`]; the rules
//! themselves live in [`crate::game::rules`].
//!
//! # System Execution Order
//!
//! ```text
//! Commands  apply_game_commands    reset / mode / difficulty
//!    ↓
//! Picking   process_pick_events    PickEvent → state machine → MoveApplied, SelectionChanged
//!    ↓
//! Publish   announce_turn_changes  logging
//! ```
//!
//! [`TurnEngine`]: crate::game::resources::TurnEngine

pub mod commands;
pub mod input;
pub mod turn_log;

pub use commands::*;
pub use input::*;
pub use turn_log::*;
