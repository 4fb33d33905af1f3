//! Injected effect hooks
//!
//! The sim never reaches a global for audio/particles/score popups; the
//! caller hands in a capability and the sim fires events at it. Hooks are
//! fire-and-forget: no return value is consumed, nothing is retried, and
//! the sim makes no assumption about side effects completing at all.

use glam::Vec2;

/// Caller-supplied sink for gameplay side effects
pub trait Effects {
    /// The ball bounced off a playfield wall
    fn wall_hit(&mut self) {}

    /// A block was destroyed; `at` is its center, `color` its 0xRRGGBB
    fn block_destroyed(&mut self, score: u32, at: Vec2, color: u32) {
        let _ = (score, at, color);
    }

    /// An explosive block went off; `at` is its center
    fn explosion_triggered(&mut self, at: Vec2, color: u32) {
        let _ = (at, color);
    }
}

/// Effects sink that ignores everything (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEffects;

impl Effects for NullEffects {}
