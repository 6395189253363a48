//! Turn engine resource
//!
//! The single owner of the [`GameState`]. Only the pick and command systems
//! take it mutably; everything else reads snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! fn show_turn(engine: Res<TurnEngine>) {
//!     info!("{} to move", engine.state().current_player());
//! }
//! ```

use bevy::prelude::*;
use tracing::warn;

use crate::core::{GameSettings, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::game::components::{GameSnapshot, GameState};
use crate::game::events::PickEvent;
use crate::game::rules::selection::{handle_pick, PickOutcome};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TurnEngine {
    state: GameState,
    last_outcome: Option<PickOutcome>,
}

impl TurnEngine {
    pub fn new(board_size: u8) -> Self {
        Self::from_state(GameState::new(board_size))
    }

    /// Wrap an existing position, e.g. a puzzle set up by hand
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Outcome of the most recent pick, cleared on reset
    pub fn last_outcome(&self) -> Option<&PickOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn handle_pick(&mut self, event: &PickEvent) -> PickOutcome {
        let outcome = handle_pick(&mut self.state, event);
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.last_outcome = None;
    }
}

impl FromWorld for TurnEngine {
    /// Sizes the session from [`GameSettings`], clamped to the supported range
    fn from_world(world: &mut World) -> Self {
        let requested = world
            .get_resource::<GameSettings>()
            .map(|settings| settings.board_size)
            .unwrap_or_else(|| GameSettings::default().board_size);

        let board_size = requested.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        if board_size != requested {
            warn!(
                "[SETTINGS] board_size {} is outside {}..={}, using {}",
                requested, MIN_BOARD_SIZE, MAX_BOARD_SIZE, board_size
            );
        }
        Self::new(board_size)
    }
}
