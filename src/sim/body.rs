//! Rigid bodies on the playfield
//!
//! Everything the resolver touches is an axis-aligned rectangle anchored at
//! its top-left corner. The ball adds a velocity, the paddle adds a shape
//! and a clamped mutable width, and blocks add a hit-point model driven by
//! a per-kind data table.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned bounding box, half-open: `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// True iff the two boxes overlap
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Extent (width, height)
    pub size: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(BALL_SIZE),
            vel,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Current speed (velocity magnitude)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Paddle surface shapes, each with its own reflection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleShape {
    #[default]
    Rect,
    Round,
    Diamond,
    Wave,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub shape: PaddleShape,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            shape: PaddleShape::Rect,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Resize the paddle, clamped to the configured range. The paddle grows
    /// and shrinks around its center so resizing doesn't shift the contact
    /// point under the ball.
    pub fn set_width(&mut self, width: f32, min_width: f32, max_width: f32) {
        let clamped = width.clamp(min_width, max_width);
        self.pos.x += (self.width - clamped) / 2.0;
        self.width = clamped;
    }
}

/// Block kinds, a closed set selected at level load
///
/// Per-kind behavior (hit points, score, color, whether destruction
/// triggers an explosion) lives in the data table below rather than in a
/// type hierarchy, so the resolver's hit handling stays centralized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    Glass,
    Brick,
    Armored,
    Explosive,
}

/// Per-kind stats row
struct KindStats {
    hit_points: u32,
    score_value: u32,
    /// Packed 0xRRGGBB for the effect layer
    color: u32,
    explosive: bool,
}

impl BlockKind {
    fn stats(self) -> KindStats {
        match self {
            BlockKind::Glass => KindStats {
                hit_points: 1,
                score_value: 50,
                color: 0x7fd4ff,
                explosive: false,
            },
            BlockKind::Brick => KindStats {
                hit_points: 2,
                score_value: 100,
                color: 0xd1603d,
                explosive: false,
            },
            BlockKind::Armored => KindStats {
                hit_points: 4,
                score_value: 250,
                color: 0x9ea3ad,
                explosive: false,
            },
            BlockKind::Explosive => KindStats {
                hit_points: 1,
                score_value: 150,
                color: 0xffae3d,
                explosive: true,
            },
        }
    }
}

/// A destructible block
///
/// Destroyed blocks stay in the level collection (cleanup is the caller's
/// business) and are excluded from all collision and explosion checks by
/// the `destroyed` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: u32,
    pub destroyed: bool,
}

impl Block {
    pub fn new(kind: BlockKind, pos: Vec2) -> Self {
        Self {
            kind,
            pos,
            size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            hp: kind.stats().hit_points,
            destroyed: false,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Apply one hit. Maintains the invariant `destroyed ⇔ hp == 0`.
    pub fn hit(&mut self) {
        if self.destroyed {
            return;
        }
        self.hp = self.hp.saturating_sub(1);
        if self.hp == 0 {
            self.destroyed = true;
        }
    }

    pub fn score_value(&self) -> u32 {
        self.kind.stats().score_value
    }

    pub fn color(&self) -> u32 {
        self.kind.stats().color
    }

    /// Whether destroying this block should trigger an area-of-effect blast
    pub fn is_explosive(&self) -> bool {
        self.kind.stats().explosive
    }
}
