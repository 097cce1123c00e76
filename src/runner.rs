//! Fixed-timestep accumulator
//!
//! Decouples the simulation rate from the display rate: each frame feeds in
//! elapsed wall-clock time and runs zero or more `SIM_DT` ticks to catch up,
//! then renders once regardless of how many ticks ran.

use crate::consts::{MAX_FRAME_DELTA, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and doles out fixed simulation steps
#[derive(Debug, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed in elapsed seconds since the last frame; returns how many
    /// `SIM_DT` ticks to run now. Elapsed time is clamped to
    /// `MAX_FRAME_DELTA` so a backgrounded tab does not trigger a huge
    /// catch-up burst, and ticks per frame are capped at `MAX_SUBSTEPS`.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DELTA);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_dt_frame_runs_no_ticks() {
        let mut stepper = FixedStep::new();
        assert_eq!(stepper.advance(SIM_DT * 0.5), 0);
        // The remainder carries over into the next frame
        assert_eq!(stepper.advance(SIM_DT * 0.5), 1);
    }

    #[test]
    fn test_catch_up_runs_multiple_ticks() {
        let mut stepper = FixedStep::new();
        assert_eq!(stepper.advance(SIM_DT * 3.5), 3);
    }

    #[test]
    fn test_substep_cap() {
        let mut stepper = FixedStep::new();
        // A full MAX_FRAME_DELTA is about 6 ticks at 60 Hz, under the cap
        let steps = stepper.advance(100.0);
        assert!((5..=MAX_SUBSTEPS).contains(&steps));
        // Pathological elapsed values are clamped, never unbounded
        assert!(stepper.advance(f32::MAX) <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_negative_elapsed_ignored() {
        let mut stepper = FixedStep::new();
        assert_eq!(stepper.advance(-1.0), 0);
        assert_eq!(stepper.advance(SIM_DT), 1);
    }
}
