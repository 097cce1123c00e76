//! Game settings and preferences
//!
//! Persisted separately from the high-score record, as a small JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Player preferences. `hard_mode` is a selection, not a capability: it
/// only takes effect at (re)start, and only once the unlock has been earned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Play the next run in hard mode (faster, narrower gap)
    pub hard_mode: bool,
    /// Show the test-mode diagnostics overlay when test mode is on
    pub show_diagnostics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hard_mode: false,
            show_diagnostics: true,
        }
    }
}

impl Settings {
    /// Default storage file
    pub const STORAGE_FILE: &'static str = "crumpy_bird_settings.json";

    /// Load settings, falling back to defaults on absence or corruption
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file corrupt ({err}), using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/settings.json"));
        assert!(!settings.hard_mode);
        assert!(settings.show_diagnostics);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let path = std::env::temp_dir().join("crumpy-bird-settings-test.json");
        let settings = Settings {
            hard_mode: true,
            show_diagnostics: false,
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert!(loaded.hard_mode);
        assert!(!loaded.show_diagnostics);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let path = std::env::temp_dir().join("crumpy-bird-settings-corrupt.json");
        fs::write(&path, "{not json").unwrap();
        let loaded = Settings::load(&path);
        assert!(!loaded.hard_mode);
        let _ = fs::remove_file(&path);
    }
}
