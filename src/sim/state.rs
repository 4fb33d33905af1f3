//! Game state and round bookkeeping
//!
//! Everything the per-tick update reads and writes lives here. Only the
//! scheduler's background context ever touches this state, so there is no
//! locking anywhere in the sim.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Ball, Block, Paddle};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Complete round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Level blocks; destroyed blocks stay in place, flagged, until external
    /// bookkeeping sweeps them
    pub blocks: Vec<Block>,
    pub lives: u8,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh round with the given level layout
    pub fn new(tuning: &Tuning, blocks: Vec<Block>) -> Self {
        let paddle_x = (tuning.field_width - PADDLE_WIDTH) / 2.0;
        let paddle_y = tuning.field_height - PADDLE_BOTTOM_MARGIN;
        let paddle = Paddle::new(Vec2::new(paddle_x, paddle_y));

        let mut state = Self {
            ball: Ball::new(Vec2::ZERO, Vec2::ZERO),
            paddle,
            blocks,
            lives: tuning.lives,
            score: 0,
            phase: GamePhase::Serve,
        };
        state.spawn_ball_serve();
        state
    }

    /// Replace the ball with a fresh one resting on the paddle.
    ///
    /// Balls are never reset in place; a lost life gets a new entity.
    pub fn spawn_ball_serve(&mut self) {
        let x = self.paddle.center_x() - BALL_SIZE / 2.0;
        let y = self.paddle.pos.y - BALL_SIZE - 1.0;
        self.ball = Ball::new(Vec2::new(x, y), Vec2::ZERO);
        self.phase = GamePhase::Serve;
    }

    /// Blocks still standing
    pub fn live_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| !b.destroyed).count()
    }

    /// True when every destructible block is gone
    pub fn level_cleared(&self) -> bool {
        self.live_blocks() == 0
    }
}
