//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (collection order)
//! - Single writer: only the scheduler's tick context mutates sim state
//! - No rendering, audio, or platform dependencies; side effects go through
//!   the injected [`Effects`] hooks

pub mod body;
pub mod collision;
pub mod effects;
pub mod explosion;
pub mod state;
pub mod tick;

pub use body::{Aabb, Ball, Block, BlockKind, Paddle, PaddleShape};
pub use collision::{
    resolve_aabb_overlap, resolve_brick_collisions, resolve_paddle_collision,
    resolve_wall_collision,
};
pub use effects::{Effects, NullEffects};
pub use explosion::{blast_area, propagate_explosion};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
