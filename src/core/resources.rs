//! Core resources for session-wide configuration
//!
//! Mode and difficulty are accepted from the UI and persisted, but no rule
//! reads them: there is no computer opponent yet.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use crate::game::types::BOARD_SIZE;

/// Smallest board that keeps the two starting armies apart
pub const MIN_BOARD_SIZE: u8 = 6;
pub const MAX_BOARD_SIZE: u8 = 16;

/// Resource tracking settings that can be changed from the UI
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Player vs player or player vs computer
    pub mode: GameMode,

    /// Computer strength, only meaningful in `pvc`
    pub difficulty: Difficulty,

    /// Side length of each board
    pub board_size: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsPlayer,
            difficulty: Difficulty::Medium,
            board_size: BOARD_SIZE,
        }
    }
}

impl GameSettings {
    /// Reject values a hand-edited settings file could contain
    pub fn validate(&self) -> CoreResult<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(CoreError::InvalidSetting {
                message: format!(
                    "board_size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {}",
                    self.board_size
                ),
            });
        }
        Ok(())
    }
}

/// Game mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    #[serde(rename = "pvc")]
    PlayerVsComputer,
}

impl GameMode {
    pub fn code(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "pvp",
            GameMode::PlayerVsComputer => "pvc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsComputer => "Player vs Computer",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameMode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "pvc" => Ok(GameMode::PlayerVsComputer),
            other => Err(CoreError::InvalidSetting {
                message: format!("unknown game mode '{other}' (expected pvp or pvc)"),
            }),
        }
    }
}

/// Computer difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(CoreError::InvalidSetting {
                message: format!("unknown difficulty '{other}' (expected easy, medium or hard)"),
            }),
        }
    }
}
