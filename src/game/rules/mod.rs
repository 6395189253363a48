//! Checkers rules module - Pure game logic without ECS coupling
//!
//! Move generation, promotion, move execution and the selection state machine
//! are plain functions over [`GameState`](crate::game::components::GameState),
//! so they can be unit tested without an `App`.
//!
//! # Module Structure
//!
//! - `piece_moves` - Diagonal steps and board crossings for a single piece
//! - `promotion` - When a piece is crowned
//! - `executor` - Applying a validated move and passing the turn
//! - `selection` - Pick-event state machine (Idle / Selected)
//! - `board_state` - Coordinate and occupancy lookups
//! - `setup` - Initial layout

pub mod board_state;
pub mod executor;
pub mod piece_moves;
pub mod promotion;
pub mod selection;
pub mod setup;


// Re-export commonly used items
pub use board_state::BoardLookup;
pub use executor::{apply_move, MoveOutcome, RejectReason};
pub use piece_moves::{generate_moves, possible_moves};
pub use promotion::promote;
pub use selection::{handle_pick, PickOutcome};
