//! Sprite asset preflight
//!
//! The original game refuses to start the loop until every image has
//! decoded; a single failure is terminal for the session, with no retry
//! and no degraded start. This module is the native equivalent: verify
//! every file in the manifest up front, before the loop is allowed to run.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Sprites the game needs before it can show anything
pub const REQUIRED_ASSETS: &[&str] = &[
    "bird.png",
    "bird_up.png",
    "bird_down.png",
    "pipe1.png",
    "pipe2.png",
    "pipe3.png",
    "background.png",
    "title_logo.png",
];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing asset {name} (expected at {path})")]
    Missing { name: String, path: PathBuf },
    #[error("unreadable asset {name}: {source}")]
    Unreadable {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// The set of files to preflight
#[derive(Debug, Clone)]
pub struct AssetManifest {
    files: Vec<String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            files: REQUIRED_ASSETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AssetManifest {
    /// Check every file for existence and readability. Fails on the first
    /// problem; callers must not start the game loop on `Err`.
    pub fn verify(&self, dir: &Path) -> Result<(), AssetError> {
        for name in &self.files {
            let path = dir.join(name);
            match File::open(&path) {
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    return Err(AssetError::Missing {
                        name: name.clone(),
                        path,
                    });
                }
                Err(err) => {
                    return Err(AssetError::Unreadable {
                        name: name.clone(),
                        source: err,
                    });
                }
            }
        }
        log::info!("verified {} assets in {}", self.files.len(), dir.display());
        Ok(())
    }
}
