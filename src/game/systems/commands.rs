use bevy::prelude::*;
use tracing::info;

use crate::core::GameSettings;
use crate::game::events::{GameCommand, SelectionChanged};
use crate::game::resources::TurnEngine;

/// Apply UI commands: reset the session or store mode / difficulty
///
/// Mode and difficulty only update [`GameSettings`]; the turn engine never
/// sees them.
pub fn apply_game_commands(
    mut commands: MessageReader<GameCommand>,
    mut engine: ResMut<TurnEngine>,
    mut settings: ResMut<GameSettings>,
    mut selection_changes: MessageWriter<SelectionChanged>,
) {
    for command in commands.read() {
        match *command {
            GameCommand::Reset => {
                engine.reset();
                selection_changes.write(SelectionChanged {
                    piece_id: None,
                    highlights: Default::default(),
                });
                info!("[TURN] Game reset");
            }
            GameCommand::SetMode(mode) => {
                if settings.mode != mode {
                    settings.mode = mode;
                    info!("[SETTINGS] Game mode set to {}", mode.description());
                }
            }
            GameCommand::SetDifficulty(difficulty) => {
                if settings.difficulty != difficulty {
                    settings.difficulty = difficulty;
                    info!("[SETTINGS] Difficulty set to {}", difficulty);
                }
            }
        }
    }
}
