pub mod core;
pub mod game;
pub mod input;
pub mod ui;

pub use crate::core::CorePlugin;
pub use game::CheckersPlugin;
