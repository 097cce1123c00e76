//! Crumpy Bird - a Flappy Bird style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, scoring)
//! - `runner`: Fixed-timestep accumulator decoupling sim rate from frame rate
//! - `assets`: Sprite preflight check (all-or-nothing before the loop starts)
//! - `settings`: Persisted player preferences
//! - `highscores`: Persisted best score and hard-mode unlock

pub mod assets;
pub mod highscores;
pub mod runner;
pub mod settings;
pub mod sim;

pub use highscores::HighScore;
pub use settings::Settings;

use thiserror::Error;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the original frame-locked tuning)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Elapsed wall-clock time beyond this is discarded (tab switch, debugger pause)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Logical world dimensions - the presentation layer scales these to pixels
    pub const WORLD_WIDTH: f32 = 320.0;
    pub const WORLD_HEIGHT: f32 = 480.0;

    /// Bird defaults - x never changes, the world scrolls past it
    pub const BIRD_X: f32 = WORLD_WIDTH * 0.2;
    pub const BIRD_SPAWN_Y: f32 = WORLD_HEIGHT * 0.4;
    pub const BIRD_SIZE: f32 = 30.0;
    /// Collision circle inscribed in the sprite box
    pub const BIRD_RADIUS: f32 = BIRD_SIZE / 2.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative is up)
    pub const JUMP_IMPULSE: f32 = -7.4;
    /// The flap that starts a session gets an extra kick
    pub const FIRST_JUMP_MULTIPLIER: f32 = 1.25;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_GAP: f32 = 150.0;
    pub const PIPE_GAP_HARD: f32 = 120.0;
    /// Both pipe segments keep at least this much height
    pub const MIN_PIPE_SEGMENT: f32 = 50.0;
    /// Horizontal spacing between consecutive spawns
    pub const PIPE_SPACING: f32 = 200.0;

    /// Difficulty ramp
    pub const INITIAL_PIPE_SPEED: f32 = 2.0;
    pub const INITIAL_BACKGROUND_SPEED: f32 = 1.0;
    /// Speed added to pipes and background on every pipe passed
    pub const SPEED_INCREASE_AMOUNT: f32 = 0.1;
    pub const MAX_SPEED: f32 = 10.0;
    /// Score that unlocks hard mode (persisted, one-time)
    pub const HARD_UNLOCK_SCORE: u32 = 25;
    /// Initial speed multiplier when hard mode is selected
    pub const HARD_MODE_SPEED_MULTIPLIER: f32 = 1.5;

    /// Ticks the game-over screen must be shown before an activate restarts
    pub const RESTART_DELAY_TICKS: u32 = 30;
    /// Safety valve: force game over if a session somehow never resolves
    pub const MAX_SESSION_TICKS: u64 = 2_000_000;

    /// Cosmetic bird rotation
    pub const ROTATION_RISING: f32 = -0.3;
    pub const ROTATION_STEP: f32 = 0.05;
    pub const ROTATION_MAX: f32 = std::f32::consts::FRAC_PI_6;
}

/// Errors from the JSON persistence files (settings, high score)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
