//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file. The default location
//! is `settings.json` in the platform config directory, with the working
//! directory as a fallback.
//!
//! # Error Handling
//!
//! - [`load_or_default`] never fails: a missing file is normal, a corrupt one
//!   is logged and replaced by defaults
//! - [`save_settings_system`] logs write failures and keeps the session running
//! - [`load_settings`] and [`save_settings`] return [`CoreResult`] for callers
//!   that want to treat a bad file as fatal

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use directories::ProjectDirs;
use tracing::{error, info, warn};

use super::error::CoreResult;
use super::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Where settings are written and whether changes are saved automatically
#[derive(Resource, Debug, Clone)]
pub struct SettingsStore {
    pub path: PathBuf,
    pub autosave: bool,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
            autosave: true,
        }
    }
}

/// Resolve the settings file path
///
/// E.g. `~/.config/twin-checkers/settings.json` on Linux. Falls back to a local
/// `settings.json` if the system config dir cannot be found.
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "twin-checkers") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings, falling back to defaults on any problem
pub fn load_or_default(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Write settings as pretty JSON, creating the parent directory if needed
pub fn save_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save settings to file when they change
///
/// Skips the first run (the freshly inserted resource counts as changed) and
/// does nothing without an autosaving [`SettingsStore`].
pub fn save_settings_system(
    settings: Res<GameSettings>,
    store: Option<Res<SettingsStore>>,
    mut first_run: Local<bool>,
) {
    if !*first_run {
        *first_run = true;
        return;
    }
    if !settings.is_changed() {
        return;
    }
    let Some(store) = store.filter(|s| s.autosave) else {
        return;
    };

    match save_settings(&store.path, &settings) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", store.path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", store.path, e),
    }
}
