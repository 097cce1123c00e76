//! Crumpy Bird entry point
//!
//! Headless demo driver: runs the deterministic simulation under the
//! autopilot at the fixed timestep, persisting the high score and hard-mode
//! unlock as the sim reports them. A renderer front end would consume
//! `GameState::snapshot()` from the same loop.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crumpy_bird::assets::AssetManifest;
use crumpy_bird::consts::SIM_DT;
use crumpy_bird::runner::FixedStep;
use crumpy_bird::sim::{GameEvent, GameState, TickInput, tick};
use crumpy_bird::{HighScore, Settings};

/// Demo wall-clock budget; one run usually ends well before this
const DEMO_TIME_LIMIT: Duration = Duration::from_secs(120);

fn main() {
    env_logger::init();
    log::info!("Crumpy Bird starting");

    // Asset preflight: if sprites are shipped they must all be present and
    // readable, or the loop never starts. No assets at all means headless.
    let asset_dir = Path::new("assets");
    if asset_dir.is_dir() {
        if let Err(err) = AssetManifest::default().verify(asset_dir) {
            log::error!("asset preflight failed: {err}");
            std::process::exit(1);
        }
    } else {
        log::info!("no asset directory, running headless demo");
    }

    let settings = Settings::load(Path::new(Settings::STORAGE_FILE));
    let score_path = Path::new(HighScore::STORAGE_FILE);
    let mut record = HighScore::load(score_path);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, record.best, record.hard_unlocked);
    let mut stepper = FixedStep::new();
    let input = TickInput {
        idle_mode: true,
        hard_mode: settings.hard_mode,
        ..Default::default()
    };

    log::info!("demo run with seed {seed}");
    let started = Instant::now();
    let mut last_frame = started;

    'demo: loop {
        let now = Instant::now();
        let elapsed = (now - last_frame).as_secs_f32();
        last_frame = now;

        for _ in 0..stepper.advance(elapsed) {
            tick(&mut state, &input);
        }

        for event in state.take_events() {
            if record.apply_event(&event) {
                if let Err(err) = record.save(score_path) {
                    log::warn!("failed to persist high score: {err}");
                }
            }
            if event == GameEvent::GameOver {
                break 'demo;
            }
        }

        if started.elapsed() > DEMO_TIME_LIMIT {
            log::info!("demo time limit reached");
            break;
        }

        // A renderer would draw a snapshot here; the demo just paces itself
        std::thread::sleep(Duration::from_secs_f32(SIM_DT / 4.0));
    }

    let snapshot = state.snapshot();
    println!(
        "demo over: score {}, best {}, {:.1}s simulated",
        snapshot.score,
        record.best,
        state.tick_count as f32 * SIM_DT
    );
}
