//! Fixed timestep simulation tick
//!
//! Advances one session deterministically: physics, pipe spawn/advance/
//! retire, collision, scoring, difficulty ramp. One call per `SIM_DT`.

use rand::Rng;

use super::collision::{bird_out_of_bounds, bird_pipe_collision, clamp_to_world};
use super::state::{GameEvent, GamePhase, GameState, Pipe};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// The one contextual action: start, flap, or restart
    pub activate: bool,
    /// Toggle the debug clamp-instead-of-die mode (title screen only)
    pub toggle_test_mode: bool,
    /// Select hard mode for the next run (needs the persisted unlock)
    pub hard_mode: bool,
    /// Autopilot for the headless demo
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    match state.phase {
        GamePhase::NotStarted => {
            if input.toggle_test_mode {
                state.test_mode = !state.test_mode;
                log::info!(
                    "test mode {}",
                    if state.test_mode { "enabled" } else { "disabled" }
                );
            }
            if input.activate {
                state.start(input.hard_mode);
            }
            return;
        }
        GamePhase::Over => {
            // Game over is a one-way latch; only the restart counter moves.
            // The delay swallows taps still aimed at a flap.
            state.over_ticks = state.over_ticks.saturating_add(1);
            if input.activate && state.over_ticks >= RESTART_DELAY_TICKS {
                state.reset();
            }
            return;
        }
        GamePhase::Running => {}
    }

    state.tick_count += 1;

    if state.tick_count > MAX_SESSION_TICKS {
        log::error!(
            "session exceeded {MAX_SESSION_TICKS} ticks without resolving, forcing game over"
        );
        state.game_over();
        return;
    }

    // Physics: a flap replaces the gravity update for this tick
    if input.activate {
        state.apply_jump_impulse();
    } else {
        state.bird.velocity += GRAVITY;
    }
    state.bird.y += state.bird.velocity;
    state.bird.update_rotation();

    // Background scroll, cosmetic
    state.background_x -= state.background_speed;
    if state.background_x <= -WORLD_WIDTH {
        state.background_x += WORLD_WIDTH;
    }

    if state.test_mode {
        clamp_to_world(&mut state.bird);
    } else {
        let hit = bird_out_of_bounds(&state.bird)
            || state
                .pipes
                .iter()
                .any(|pipe| bird_pipe_collision(&state.bird, pipe));
        if hit {
            state.game_over();
            return;
        }
    }

    // Advance pipes, score passes, retire off-screen ones. Reverse index
    // order so removal never skips a pipe.
    for i in (0..state.pipes.len()).rev() {
        state.pipes[i].x -= state.pipe_speed;

        if !state.pipes[i].passed && state.bird.x > state.pipes[i].trailing_edge() {
            state.pipes[i].passed = true;
            score_pass(state);
        }

        if state.pipes[i].is_offscreen() {
            state.pipes.remove(i);
        }
    }

    // Spacing-based spawn: a virtual marker rides along with the most
    // recent spawn; once it has receded far enough, spawn at the right edge
    if state.last_spawn_x - state.pipe_speed <= WORLD_WIDTH - PIPE_SPACING {
        let pipe = spawn_pipe(state);
        state.pipes.push(pipe);
        state.last_spawn_x = WORLD_WIDTH;
    } else {
        state.last_spawn_x -= state.pipe_speed;
    }
}

/// Score a pipe pass: +1, high-score check, unlock check, speed ramp
fn score_pass(state: &mut GameState) {
    state.score += 1;
    state.pipes_passed += 1;
    state.push_event(GameEvent::PipePassed);

    if state.score > state.high_score {
        state.high_score = state.score;
        state.push_event(GameEvent::HighScoreBeaten(state.high_score));
    }

    if !state.hard_unlocked && state.score >= HARD_UNLOCK_SCORE {
        state.hard_unlocked = true;
        state.push_event(GameEvent::HardModeUnlocked);
        log::info!("hard mode unlocked at score {}", state.score);
    }

    state.pipe_speed = (state.pipe_speed + SPEED_INCREASE_AMOUNT).min(MAX_SPEED);
    state.background_speed = (state.background_speed + SPEED_INCREASE_AMOUNT).min(MAX_SPEED);
    log::debug!(
        "pipe passed: score {}, pipe speed {:.2}, background speed {:.2}",
        state.score,
        state.pipe_speed,
        state.background_speed
    );
}

/// New pipe at the right edge with the gap placed uniformly at random,
/// keeping both segments at least `MIN_PIPE_SEGMENT` tall
fn spawn_pipe(state: &mut GameState) -> Pipe {
    let max_top = WORLD_HEIGHT - state.pipe_gap - MIN_PIPE_SEGMENT;
    let top_height = state.rng.random_range(MIN_PIPE_SEGMENT..max_top);
    Pipe::new(WORLD_WIDTH, top_height, top_height + state.pipe_gap)
}

/// Demo AI: start the session, then flap whenever the bird has sunk below
/// the center of the next gap and is no longer rising
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::NotStarted | GamePhase::Over => input.activate = true,
        GamePhase::Running => {
            let center_y = state.bird.y + state.bird.radius;
            let target = state
                .pipes
                .iter()
                .find(|p| p.trailing_edge() >= state.bird.x)
                .map(|p| (p.top_height + p.bottom_y) / 2.0)
                .unwrap_or(WORLD_HEIGHT / 2.0);
            if center_y > target && state.bird.velocity >= 0.0 {
                input.activate = true;
            }
        }
    }
}
