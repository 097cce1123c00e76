//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, storage, or platform dependencies
//!
//! Side effects the outside world cares about (new best score, hard-mode
//! unlock, game over) surface as [`GameEvent`]s for the driver to drain.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{bird_out_of_bounds, bird_pipe_collision};
pub use state::{Bird, Diagnostics, FrameSnapshot, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
