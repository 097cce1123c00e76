//! High score persistence
//!
//! One record survives across sessions: the best score ever achieved, plus
//! the one-time hard-mode unlock flag. Saved whenever either improves.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::StoreError;
use crate::sim::GameEvent;

/// The persisted cross-session record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore {
    /// Best score ever achieved; monotonic
    pub best: u32,
    /// Set once when the unlock threshold is first crossed; never cleared
    pub hard_unlocked: bool,
}

impl HighScore {
    /// Default storage file
    pub const STORAGE_FILE: &'static str = "crumpy_bird_highscore.json";

    /// Record a session score; returns true if the best improved
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }

    /// Fold a drained sim event into the record; returns true if anything
    /// changed and the record should be saved
    pub fn apply_event(&mut self, event: &GameEvent) -> bool {
        match event {
            GameEvent::HighScoreBeaten(best) => self.record(*best),
            GameEvent::HardModeUnlocked => {
                let changed = !self.hard_unlocked;
                self.hard_unlocked = true;
                changed
            }
            _ => false,
        }
    }

    /// Load the record, falling back to zero on absence or corruption
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScore>(&json) {
                Ok(record) => {
                    log::info!("loaded high score {} from {}", record.best, path.display());
                    record
                }
                Err(err) => {
                    log::warn!("high score file corrupt ({err}), starting fresh");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no high score file, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("high score saved ({})", self.best);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_monotonic() {
        let mut record = HighScore::default();
        assert!(record.record(5));
        assert!(!record.record(3));
        assert!(!record.record(5));
        assert!(record.record(6));
        assert_eq!(record.best, 6);
    }

    #[test]
    fn test_apply_event_reports_changes() {
        let mut record = HighScore::default();
        assert!(record.apply_event(&GameEvent::HighScoreBeaten(4)));
        assert!(!record.apply_event(&GameEvent::HighScoreBeaten(2)));
        assert!(record.apply_event(&GameEvent::HardModeUnlocked));
        // Unlock is one-time
        assert!(!record.apply_event(&GameEvent::HardModeUnlocked));
        assert!(!record.apply_event(&GameEvent::PipePassed));
        assert_eq!(record.best, 4);
        assert!(record.hard_unlocked);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let path = std::env::temp_dir().join("crumpy-bird-highscore-test.json");
        let record = HighScore {
            best: 42,
            hard_unlocked: true,
        };
        record.save(&path).unwrap();

        let loaded = HighScore::load(&path);
        assert_eq!(loaded.best, 42);
        assert!(loaded.hard_unlocked);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let loaded = HighScore::load(Path::new("/nonexistent/highscore.json"));
        assert_eq!(loaded.best, 0);
        assert!(!loaded.hard_unlocked);
    }
}
