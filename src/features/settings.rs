//! Application settings
//!
//! Read-only configuration loaded at startup. The sidebar never writes
//! theme or open state back; this file only seeds the initial values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Initial window geometry
    pub window: WindowSettings,
    /// Colour variable overrides, e.g. `"--color-text-light-default": "#202020"`
    pub palette: BTreeMap<String, String>,
}

/// Display-related settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Initial theme seed: "dark" selects the dark theme, anything else light
    pub color: Option<String>,
    /// Skip the entrance and width animations
    pub reduce_motion: bool,
    /// Mount the sidebar collapsed
    pub start_collapsed: bool,
}

/// Window geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 720.0,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sidenav", "Sidenav")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_seed_light_and_open() {
        let settings = Settings::default();
        assert!(settings.display.color.is_none());
        assert!(!settings.display.reduce_motion);
        assert!(!settings.display.start_collapsed);
        assert!(settings.palette.is_empty());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let file = write_settings(r#"{ "display": { "color": "dark" } }"#);
        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.display.color.as_deref(), Some("dark"));
        assert!(!settings.display.reduce_motion);
        assert_eq!(settings.window.width, 1100.0);
    }

    #[test]
    fn palette_overrides_are_read() {
        let file = write_settings(
            r##"{ "palette": { "--color-text-light-default": "#101010" } }"##,
        );
        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(
            settings.palette.get("--color-text-light-default").map(String::as_str),
            Some("#101010")
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_settings("{ not json");
        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
