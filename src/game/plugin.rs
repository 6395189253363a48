//! Game plugin - Turn engine wiring
//!
//! Registers the turn engine resource, the input/output messages and the
//! systems that connect them.
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] - Provides [`GameSettings`](crate::core::GameSettings)
//!   and must be added first
//!
//! No rendering plugin is required. A front-end writes [`PickEvent`] and
//! [`GameCommand`] messages, then reads [`TurnEngine`] snapshots or the
//! [`MoveApplied`] / [`SelectionChanged`] messages to redraw.

use bevy::prelude::*;

use super::events::{GameCommand, MoveApplied, PickEvent, SelectionChanged};
use super::resources::TurnEngine;
use super::system_sets::CheckersSystems;
use super::systems::*;

pub struct CheckersPlugin;

impl Plugin for CheckersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TurnEngine>();

        app.add_message::<PickEvent>()
            .add_message::<GameCommand>()
            .add_message::<MoveApplied>()
            .add_message::<SelectionChanged>();

        // Commands → Picking → Publish
        app.configure_sets(
            Update,
            (
                CheckersSystems::Commands,
                CheckersSystems::Picking,
                CheckersSystems::Publish,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                apply_game_commands.in_set(CheckersSystems::Commands),
                process_pick_events.in_set(CheckersSystems::Picking),
                announce_turn_changes.in_set(CheckersSystems::Publish),
            ),
        );
    }
}
