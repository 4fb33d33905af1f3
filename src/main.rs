//! Brickfall entry point
//!
//! Headless demo: builds a small level, drives the sim with the fixed-step
//! scheduler for a short session, and logs the effect callbacks a real
//! frontend would render.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use glam::Vec2;

use brickfall::consts::*;
use brickfall::sim::{Block, BlockKind, Effects, GamePhase, GameState, TickInput, tick};
use brickfall::{FixedStepScheduler, Tuning};

/// Effects sink that just logs what a frontend would draw/play
struct LogEffects;

impl Effects for LogEffects {
    fn wall_hit(&mut self) {
        log::debug!("wall hit");
    }

    fn block_destroyed(&mut self, score: u32, at: Vec2, color: u32) {
        log::info!(
            "block destroyed at ({:.0}, {:.0}) color #{color:06x}, +{score}",
            at.x,
            at.y
        );
    }

    fn explosion_triggered(&mut self, at: Vec2, color: u32) {
        log::info!("explosion at ({:.0}, {:.0}) color #{color:06x}", at.x, at.y);
    }
}

/// A small demo layout: three rows of blocks with an explosive in the middle
fn demo_level() -> Vec<Block> {
    let mut blocks = Vec::new();
    for row in 0..3 {
        for col in 0..8 {
            let kind = match (row, col) {
                (1, 3) | (1, 4) => BlockKind::Explosive,
                (0, _) => BlockKind::Armored,
                (2, _) => BlockKind::Glass,
                _ => BlockKind::Brick,
            };
            let pos = Vec2::new(
                40.0 + col as f32 * (BLOCK_WIDTH + 10.0),
                60.0 + row as f32 * (BLOCK_HEIGHT + 10.0),
            );
            blocks.push(Block::new(kind, pos));
        }
    }
    blocks
}

fn main() {
    env_logger::init();
    log::info!("Brickfall (headless demo) starting...");

    let tuning = Tuning::default();
    let state = Arc::new(Mutex::new(GameState::new(&tuning, demo_level())));

    let dt = tuning.dt();
    let sim_state = state.clone();
    let sim_tuning = tuning.clone();
    let scheduler = FixedStepScheduler::new(tuning.tick_hz, move || {
        let mut state = sim_state.lock().expect("state lock");

        // Launch immediately, then shadow the ball with the paddle so the
        // demo rallies on its own
        let mut input = TickInput {
            launch: state.phase == GamePhase::Serve,
            ..TickInput::default()
        };
        let ball_x = state.ball.center().x;
        let paddle_x = state.paddle.center_x();
        input.left = ball_x < paddle_x - 5.0;
        input.right = ball_x > paddle_x + 5.0;

        tick(&mut state, &input, &sim_tuning, &mut LogEffects, dt);
    });

    scheduler.start();

    // Let the demo run for a few seconds, then report
    thread::sleep(Duration::from_secs(10));
    scheduler.stop();

    let state = state.lock().expect("state lock");
    log::info!(
        "demo over: score {}, lives {}, {} blocks standing",
        state.score,
        state.lives,
        state.live_blocks()
    );
}
