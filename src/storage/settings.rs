//! Settings storage
//!
//! Manages persistence of the generator's configuration: where models live,
//! where cards go, and the registry credential.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Generator settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory scanned for .gguf model files
    #[serde(default)]
    pub model_directory: String,
    /// Directory where model cards are written
    #[serde(default)]
    pub output_directory: String,
    /// Hugging Face token, passed opaquely to the registry client
    #[serde(default)]
    pub huggingface_token: String,
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("config.json"))
}

/// Load settings from disk.
///
/// Returns default (empty) settings if the file doesn't exist or is corrupted.
pub fn load_settings() -> Settings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        }
    }
}

/// Load settings from a specific path with error propagation
pub fn load_settings_from(path: &Path) -> Result<Settings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&json)?;

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &Settings) -> Result<(), StorageError> {
    let path = get_settings_path()?;
    save_settings_to(&path, settings)
}

/// Save settings to a specific path
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
