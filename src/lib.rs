//! Brickfall - a brick-breaker arcade physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, explosions, game state)
//! - `sched`: Fixed-step background driver with drift compensation
//! - `tuning`: Data-driven game balance

pub mod sched;
pub mod sim;
pub mod tuning;

pub use sched::FixedStepScheduler;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (Hz)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_START_SPEED: f32 = 300.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 420.0;
    pub const PADDLE_MIN_WIDTH: f32 = 60.0;
    pub const PADDLE_MAX_WIDTH: f32 = 200.0;
    /// Gap between the bottom edge of the paddle and the bottom boundary
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;

    /// Block defaults
    pub const BLOCK_WIDTH: f32 = 80.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
}
