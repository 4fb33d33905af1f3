//! Data-driven game balance
//!
//! Shipped values live in `Default`; a deployment can overlay them from a
//! JSON document without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scheduler tick rate (Hz)
    pub tick_hz: u32,
    /// Playfield extent; walls sit at x=0, y=0, x=width. There is no wall
    /// at y=height, that edge loses a life
    pub field_width: f32,
    pub field_height: f32,
    /// Launch speed of a served ball
    pub ball_speed: f32,
    /// Horizontal paddle speed (pixels/second)
    pub paddle_speed: f32,
    /// Clamp range for paddle resizing power-ups
    pub paddle_min_width: f32,
    pub paddle_max_width: f32,
    /// Lives at round start
    pub lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_speed: BALL_START_SPEED,
            paddle_speed: PADDLE_SPEED,
            paddle_min_width: PADDLE_MIN_WIDTH,
            paddle_max_width: PADDLE_MAX_WIDTH,
            lives: 3,
        }
    }
}

impl Tuning {
    /// Parse a tuning overlay from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fixed timestep implied by the tick rate (seconds)
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }
}
