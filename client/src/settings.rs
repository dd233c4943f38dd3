//! Player preferences
//!
//! Persisted as JSON, separately from any match state.

use std::path::{Path, PathBuf};

use game_core::Difficulty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupted settings: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Background and foreground colours for the presenter
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#ffffff", "#000000"),
            Theme::Dark => ("#000000", "#ffffff"),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub sound_enabled: bool,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sound_enabled: true,
            difficulty: Difficulty::Medium,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Somewhere settings survive between sessions
pub trait SettingsStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Settings>, SettingsError>;
    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Load from a store, falling back to defaults on any failure
pub fn load_or_default(store: &impl SettingsStore) -> Settings {
    match store.load() {
        Ok(Some(settings)) => {
            log::info!("Loaded settings");
            settings
        }
        Ok(None) => {
            log::info!("Using default settings");
            Settings::default()
        }
        Err(e) => {
            log::warn!("Ignoring unreadable settings: {}", e);
            Settings::default()
        }
    }
}

/// Settings file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>, SettingsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(Settings::from_json(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json)?;
        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store, holds the serialized form like a browser's local storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub json: Option<String>,
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>, SettingsError> {
        self.json.as_deref().map(Settings::from_json).transpose()
    }

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        self.json = Some(settings.to_json()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.sound_enabled);
        assert_eq!(settings.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_memory_store_persists() {
        let mut store = MemoryStore::default();
        assert!(store.load().unwrap().is_none());

        let settings = Settings {
            theme: Theme::Dark,
            sound_enabled: false,
            difficulty: Difficulty::Hard,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn test_corrupt_settings_fall_back() {
        let store = MemoryStore {
            json: Some("{ theme: ".to_string()),
        };
        assert!(matches!(store.load(), Err(SettingsError::Corrupted(_))));
        assert_eq!(load_or_default(&store), Settings::default());
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("settings.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("settings.json"));
        let settings = Settings {
            theme: Theme::Dark,
            ..Settings::default()
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), Some(settings));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_ne!(Theme::Light.colors(), Theme::Dark.colors());
    }
}
