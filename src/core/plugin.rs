//! Core plugin
//!
//! Sets up session-wide configuration:
//! - [`GameSettings`] resource (kept if the caller already inserted one)
//! - Settings autosave through [`SettingsStore`]
//!
//! # Plugin Order
//!
//! Add this before [`crate::game::CheckersPlugin`]; the game plugin reads the
//! board size from [`GameSettings`] when it creates the session.

use bevy::prelude::*;

use super::settings_persistence::save_settings_system;
use super::GameSettings;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Callers that loaded settings from disk insert them first
        app.init_resource::<GameSettings>();

        app.add_systems(Last, save_settings_system);
    }
}
