//! Game state and core simulation types
//!
//! All state for one game session lives here. Persistence (high score,
//! hard-mode unlock) happens outside the sim, driven by drained events.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;

/// Current phase of a session
///
/// One-way within a session: `NotStarted -> Running -> Over`. Only an
/// explicit restart leaves `Over`, back to the title screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first activate
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart (gated by a short delay)
    Over,
}

/// The player's bird
///
/// `x` and `y` are the top-left corner of the sprite box; the collision
/// circle is inscribed in that box.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, positive is down
    pub velocity: f32,
    /// Derived, cosmetic only - never feeds back into physics
    pub rotation: f32,
    pub radius: f32,
}

impl Bird {
    pub fn spawn() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_SPAWN_Y,
            velocity: 0.0,
            rotation: 0.0,
            radius: BIRD_RADIUS,
        }
    }

    /// Center of the collision circle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.radius, self.y + self.radius)
    }

    /// Tilt up sharply while rising, ease downward while falling
    pub fn update_rotation(&mut self) {
        if self.velocity < 0.0 {
            self.rotation = ROTATION_RISING;
        } else {
            self.rotation = (self.rotation + ROTATION_STEP).min(ROTATION_MAX);
        }
    }
}

/// A pipe pair: top segment down to `top_height`, bottom segment up from
/// `bottom_y`, with the passable gap between them. Geometry is fixed at
/// creation; only `x` and `passed` mutate afterwards.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pipe {
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    /// Set once by the score tracker, never reverts within a session
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, top_height: f32, bottom_y: f32) -> Self {
        Self {
            x,
            width: PIPE_WIDTH,
            top_height,
            bottom_y,
            passed: false,
        }
    }

    /// Right edge; the bird scores once its x passes this
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Fully off the left edge of the world
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() <= 0.0
    }

    /// The four gap corners, for the corner-clip collision check
    pub fn gap_corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.top_height),
            Vec2::new(self.x + self.width, self.top_height),
            Vec2::new(self.x, self.bottom_y),
            Vec2::new(self.x + self.width, self.bottom_y),
        ]
    }
}

/// Things that happened during a tick, for the driver to react to
/// (persistence, audio cues). Drained with [`GameState::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Flapped,
    PipePassed,
    /// New best score; the driver persists it
    HighScoreBeaten(u32),
    /// Score crossed the unlock threshold for the first time ever
    HardModeUnlocked,
    GameOver,
    Restarted,
}

/// Complete session state (deterministic per seed and input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub bird: Bird,
    /// Live pipes, in spawn (increasing-x) order
    pub pipes: Vec<Pipe>,
    /// Resets to 0 each session
    pub score: u32,
    /// Monotonic across sessions; persisted by the driver
    pub high_score: u32,
    pub pipes_passed: u32,
    pub pipe_speed: f32,
    pub background_speed: f32,
    /// Cosmetic scroll offset, wraps at the world width
    pub background_x: f32,
    /// Gap height for this session (shrunk in hard mode)
    pub pipe_gap: f32,
    /// Virtual x of the most recent spawn, drives the spacing policy
    pub last_spawn_x: f32,
    pub tick_count: u64,
    pub phase: GamePhase,
    /// Ticks spent on the game-over screen, gates restart
    pub over_ticks: u32,
    /// Debug toggle: clamp to the world instead of dying
    pub test_mode: bool,
    /// Hard mode active for this session
    pub hard_mode: bool,
    /// One-time unlock, persisted by the driver
    pub hard_unlocked: bool,
    first_jump_pending: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state at the title screen, carrying persisted values in
    pub fn new(seed: u64, high_score: u32, hard_unlocked: bool) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bird: Bird::spawn(),
            pipes: Vec::new(),
            score: 0,
            high_score,
            pipes_passed: 0,
            pipe_speed: INITIAL_PIPE_SPEED,
            background_speed: INITIAL_BACKGROUND_SPEED,
            background_x: 0.0,
            pipe_gap: PIPE_GAP,
            last_spawn_x: WORLD_WIDTH,
            tick_count: 0,
            phase: GamePhase::NotStarted,
            over_ticks: 0,
            test_mode: false,
            hard_mode: false,
            hard_unlocked,
            first_jump_pending: true,
            events: Vec::new(),
        }
    }

    /// Begin the run. Hard mode takes effect here, and only if unlocked.
    pub fn start(&mut self, hard_mode: bool) {
        self.hard_mode = hard_mode && self.hard_unlocked;
        if self.hard_mode {
            self.pipe_gap = PIPE_GAP_HARD;
            self.pipe_speed = INITIAL_PIPE_SPEED * HARD_MODE_SPEED_MULTIPLIER;
            self.background_speed = INITIAL_BACKGROUND_SPEED * HARD_MODE_SPEED_MULTIPLIER;
        }
        self.phase = GamePhase::Running;
        self.apply_jump_impulse();
        self.push_event(GameEvent::Started);
        log::info!(
            "session started (seed {}, hard_mode {})",
            self.seed,
            self.hard_mode
        );
    }

    /// Set velocity to the jump impulse, boosted once per session
    pub fn apply_jump_impulse(&mut self) {
        let multiplier = if self.first_jump_pending {
            self.first_jump_pending = false;
            FIRST_JUMP_MULTIPLIER
        } else {
            1.0
        };
        self.bird.velocity = JUMP_IMPULSE * multiplier;
        self.push_event(GameEvent::Flapped);
    }

    /// Latch game over and defensively re-check the high score
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::Over {
            return;
        }
        self.phase = GamePhase::Over;
        self.over_ticks = 0;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.push_event(GameEvent::HighScoreBeaten(self.high_score));
        }
        self.push_event(GameEvent::GameOver);
        log::info!("game over at score {} (best {})", self.score, self.high_score);
    }

    /// Back to the title screen. High score, unlock flag, and the RNG
    /// stream survive; everything else returns to initial values.
    pub fn reset(&mut self) {
        self.bird = Bird::spawn();
        self.pipes.clear();
        self.score = 0;
        self.pipes_passed = 0;
        self.pipe_speed = INITIAL_PIPE_SPEED;
        self.background_speed = INITIAL_BACKGROUND_SPEED;
        self.background_x = 0.0;
        self.pipe_gap = PIPE_GAP;
        self.last_spawn_x = WORLD_WIDTH;
        self.tick_count = 0;
        self.phase = GamePhase::NotStarted;
        self.over_ticks = 0;
        self.test_mode = false;
        self.hard_mode = false;
        self.first_jump_pending = true;
        self.push_event(GameEvent::Restarted);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the renderer. The renderer feeds nothing back.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            bird: self.bird,
            pipes: self.pipes.clone(),
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
            pipe_speed: self.pipe_speed,
            background_speed: self.background_speed,
            background_x: self.background_x,
            hard_mode: self.hard_mode,
            diagnostics: self.test_mode.then(|| Diagnostics {
                velocity: self.bird.velocity,
                pipe_count: self.pipes.len(),
                pipes_passed: self.pipes_passed,
                tick_count: self.tick_count,
                first_pipe_x: self.pipes.first().map(|p| p.x),
            }),
        }
    }
}

/// Per-frame view of the session for a renderer to consume
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub pipe_speed: f32,
    pub background_speed: f32,
    pub background_x: f32,
    pub hard_mode: bool,
    /// Present only while test mode is on
    pub diagnostics: Option<Diagnostics>,
}

/// Test-mode overlay values
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Diagnostics {
    pub velocity: f32,
    pub pipe_count: usize,
    pub pipes_passed: u32,
    pub tick_count: u64,
    pub first_pipe_x: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_trailing_edge_and_retirement() {
        let pipe = Pipe::new(0.0, 100.0, 250.0);
        assert_eq!(pipe.trailing_edge(), PIPE_WIDTH);
        assert!(!pipe.is_offscreen());

        let gone = Pipe::new(-PIPE_WIDTH, 100.0, 250.0);
        assert!(gone.is_offscreen());
    }

    #[test]
    fn test_first_jump_boost_applies_once() {
        let mut state = GameState::new(1, 0, false);
        state.start(false);
        assert_eq!(state.bird.velocity, JUMP_IMPULSE * FIRST_JUMP_MULTIPLIER);

        state.apply_jump_impulse();
        assert_eq!(state.bird.velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_hard_mode_requires_unlock() {
        let mut locked = GameState::new(1, 0, false);
        locked.start(true);
        assert!(!locked.hard_mode);
        assert_eq!(locked.pipe_gap, PIPE_GAP);

        let mut unlocked = GameState::new(1, 0, true);
        unlocked.start(true);
        assert!(unlocked.hard_mode);
        assert_eq!(unlocked.pipe_gap, PIPE_GAP_HARD);
        assert_eq!(
            unlocked.pipe_speed,
            INITIAL_PIPE_SPEED * HARD_MODE_SPEED_MULTIPLIER
        );
    }

    #[test]
    fn test_reset_restores_initial_values_but_keeps_best() {
        let mut state = GameState::new(7, 0, false);
        state.start(false);
        state.score = 12;
        state.pipe_speed = 4.0;
        state.test_mode = true;
        state.game_over();
        assert_eq!(state.high_score, 12);

        state.reset();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.pipe_speed, INITIAL_PIPE_SPEED);
        assert!(!state.test_mode);
        assert!(state.pipes.is_empty());
        // Best survives the reset
        assert_eq!(state.high_score, 12);
    }

    #[test]
    fn test_snapshot_diagnostics_follow_test_mode() {
        let mut state = GameState::new(3, 0, false);
        assert!(state.snapshot().diagnostics.is_none());
        state.test_mode = true;
        let snap = state.snapshot();
        let diag = snap.diagnostics.expect("diagnostics in test mode");
        assert_eq!(diag.pipe_count, 0);
    }
}
