//! Persisted user preferences.
//!
//! A small JSON file under the platform config directory. Missing or
//! unreadable files fall back to defaults so a corrupt preference file
//! never blocks startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// User preferences persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl Preferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path().map_or_else(Self::default, |p| Self::load_from(&p))
    }

    /// Load preferences from an explicit path, falling back to defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save preferences to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FolioError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FolioError::config(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| FolioError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark_theme() {
        assert_eq!(Preferences::default().theme, "dark");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_from(&dir.path().join("nope.json"));
        assert_eq!(prefs.theme, "dark");
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Preferences::load_from(&path).theme, "dark");
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences {
            theme: "light".to_string(),
        };
        prefs.save_to(&path).unwrap();

        assert_eq!(Preferences::load_from(&path).theme, "light");
    }

    #[test]
    fn save_failure_reports_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let err = Preferences::default()
            .save_to(&blocker.join("preferences.json"))
            .unwrap_err();
        assert!(matches!(err, FolioError::Io { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
