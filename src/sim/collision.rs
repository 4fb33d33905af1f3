//! Collision resolution for the rectangular playfield
//!
//! Stateless functions over the bodies they touch: they mutate position and
//! velocity only, and are total. Walls reflect only balls moving into them,
//! the paddle reflects by shape-dependent policy, and brick penetration is
//! resolved along the minimum-penetration axis.

use std::f32::consts::PI;

use super::body::{Aabb, Ball, Block, Paddle, PaddleShape};

/// Separation snapped below a flat paddle surface after reflection
const FLAT_SNAP: f32 = 1.0;
/// Separation for the non-flat shapes; the larger margin compensates for
/// their curved/angled contact surface so the next tick can't re-collide
const SHAPED_SNAP: f32 = 10.0;

/// Reflect the ball off the left/right/top playfield boundaries.
///
/// Reflects only when the ball is moving *into* a boundary, so an
/// already-outward-moving ball is never reflected twice. There is no bottom
/// wall: falling past `max_y` is a life-loss condition handled by the
/// caller. Returns whether any reflection occurred, so the caller can raise
/// a wall-hit effect.
pub fn resolve_wall_collision(
    ball: &mut Ball,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    _max_y: f32,
) -> bool {
    let mut reflected = false;

    if ball.pos.x <= min_x && ball.vel.x < 0.0 {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = min_x;
        reflected = true;
    }
    if ball.pos.x + ball.size.x >= max_x && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = max_x - ball.size.x;
        reflected = true;
    }
    if ball.pos.y <= min_y && ball.vel.y < 0.0 {
        ball.vel.y = ball.vel.y.abs();
        ball.pos.y = min_y;
        reflected = true;
    }

    reflected
}

/// Reflect the ball off the paddle according to the paddle's shape.
///
/// No-op unless the bounding boxes intersect and the ball is moving
/// downward; the downward guard keeps a ball that is still leaving the
/// paddle from re-triggering. The reflection is angle-based and
/// energy-stylized, not elastic physics: the contact offset picks the exit
/// angle, and the current speed is carried over per-shape:
///
/// - `Rect`/`Round`: vx = speed * offset, vy flipped at its prior
///   magnitude. Total speed is *not* conserved; intentional.
/// - `Diamond`: fixed ±0.8 * speed deflection by contact side, vy derived
///   so total speed is conserved exactly.
/// - `Wave`: the surface slope at the contact point steers vx (clamped to
///   ±0.95 * speed), vy derived to approximately conserve speed.
///
/// Returns whether a reflection occurred.
pub fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.aabb().intersects(&paddle.aabb()) || ball.vel.y <= 0.0 {
        return false;
    }

    let half_width = paddle.width / 2.0;
    let offset = ((ball.center().x - paddle.center_x()) / half_width).clamp(-1.0, 1.0);
    let speed = ball.speed();

    let snap = match paddle.shape {
        PaddleShape::Rect | PaddleShape::Round => {
            ball.vel.x = speed * offset;
            ball.vel.y = -ball.vel.y.abs();
            FLAT_SNAP
        }
        PaddleShape::Diamond => {
            // Forced deflection magnitude by contact side; dead center goes
            // straight up
            ball.vel.x = if offset < 0.0 {
                -0.8 * speed
            } else if offset > 0.0 {
                0.8 * speed
            } else {
                0.0
            };
            ball.vel.y = -(speed * speed - ball.vel.x * ball.vel.x).sqrt();
            SHAPED_SNAP
        }
        PaddleShape::Wave => {
            let angle = (offset + 1.0) * PI;
            let slope = angle.cos();
            ball.vel.x =
                (speed * (offset + 0.5 * slope)).clamp(-0.95 * speed, 0.95 * speed);
            // abs() guards the radicand against a negative rounding residue
            ball.vel.y = -(speed * speed - ball.vel.x * ball.vel.x).abs().sqrt();
            SHAPED_SNAP
        }
    };

    // Snap above the paddle so the next tick starts separated
    ball.pos.y = paddle.pos.y - ball.size.y - snap;

    true
}

/// Resolve the ball against a level's blocks.
///
/// Scans non-destroyed blocks in collection order; the first intersecting
/// block has the overlap resolved and takes one hit, then the scan stops.
/// At most one block is resolved per tick even if several overlap
/// simultaneously. Returns the index of the
/// hit block so the caller can award score and trigger effects.
pub fn resolve_brick_collisions(ball: &mut Ball, blocks: &mut [Block]) -> Option<usize> {
    for (i, block) in blocks.iter_mut().enumerate() {
        if block.destroyed {
            continue;
        }
        if ball.aabb().intersects(&block.aabb()) {
            resolve_aabb_overlap(ball, &block.aabb());
            block.hit();
            return Some(i);
        }
    }
    None
}

/// Push the ball out of a fixed box along the minimum-penetration axis.
///
/// The four penetration depths are compared in the fixed order left, right,
/// top, bottom; exact ties go to the first-evaluated branch. Level layouts
/// depend on that order, keep it.
pub fn resolve_aabb_overlap(ball: &mut Ball, fixed: &Aabb) {
    let moving = ball.aabb();
    if !moving.intersects(fixed) {
        return;
    }

    let overlap_left = moving.max.x - fixed.min.x;
    let overlap_right = fixed.max.x - moving.min.x;
    let overlap_top = moving.max.y - fixed.min.y;
    let overlap_bottom = fixed.max.y - moving.min.y;

    let mut min_overlap = overlap_left;
    if overlap_right < min_overlap {
        min_overlap = overlap_right;
    }
    if overlap_top < min_overlap {
        min_overlap = overlap_top;
    }
    if overlap_bottom < min_overlap {
        min_overlap = overlap_bottom;
    }

    if min_overlap == overlap_left {
        // Ball came from the left; push it back out and send it leftward
        ball.pos.x -= overlap_left;
        ball.vel.x = -ball.vel.x.abs();
    } else if min_overlap == overlap_right {
        ball.pos.x += overlap_right;
        ball.vel.x = ball.vel.x.abs();
    } else if min_overlap == overlap_top {
        ball.pos.y -= overlap_top;
        ball.vel.y = -ball.vel.y.abs();
    } else {
        ball.pos.y += overlap_bottom;
        ball.vel.y = ball.vel.y.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BlockKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy))
    }

    fn paddle_with(shape: PaddleShape) -> Paddle {
        // x = 300..400 (width 100), top edge at y = 540
        let mut paddle = Paddle::new(Vec2::new(300.0, 540.0));
        paddle.shape = shape;
        paddle
    }

    #[test]
    fn test_left_wall_reflects_inward_ball() {
        let mut ball = ball_at(0.0, 100.0, -4.0, 0.0);
        let reflected = resolve_wall_collision(&mut ball, 0.0, 0.0, 800.0, 600.0);
        assert!(reflected);
        assert_eq!(ball.vel.x, 4.0);
        assert_eq!(ball.pos.x, 0.0);
    }

    #[test]
    fn test_wall_resolution_is_idempotent() {
        let mut ball = ball_at(-3.0, 100.0, -4.0, 2.0);
        resolve_wall_collision(&mut ball, 0.0, 0.0, 800.0, 600.0);

        let pos = ball.pos;
        let vel = ball.vel;
        let reflected = resolve_wall_collision(&mut ball, 0.0, 0.0, 800.0, 600.0);
        assert!(!reflected);
        assert_eq!(ball.pos, pos);
        assert_eq!(ball.vel, vel);
    }

    #[test]
    fn test_no_bottom_wall() {
        let mut ball = ball_at(400.0, 650.0, 0.0, 4.0);
        let reflected = resolve_wall_collision(&mut ball, 0.0, 0.0, 800.0, 600.0);
        assert!(!reflected);
        assert_eq!(ball.vel.y, 4.0);
    }

    #[test]
    fn test_rect_paddle_half_offset() {
        // Ball center at 375 on a 300..400 paddle → offset 0.5
        let mut ball = ball_at(365.0, 535.0, 4.0, 4.0);
        let paddle = paddle_with(PaddleShape::Rect);
        assert_eq!(ball.center().x, 375.0);

        let speed = (32.0f32).sqrt(); // |(4, 4)| ≈ 5.657
        assert!(resolve_paddle_collision(&mut ball, &paddle));
        assert!((ball.vel.x - speed * 0.5).abs() < 1e-3); // ≈ 2.83
        assert_eq!(ball.vel.y, -4.0); // vy flipped at prior magnitude, exactly
        assert_eq!(ball.pos.y, 540.0 - ball.size.y - 1.0);
    }

    #[test]
    fn test_centered_bounce_goes_straight_up() {
        for shape in [PaddleShape::Rect, PaddleShape::Round, PaddleShape::Diamond] {
            let paddle = paddle_with(shape);
            // Ball centered on the paddle center (350)
            let mut ball = ball_at(340.0, 535.0, 3.0, 4.0);
            assert!(resolve_paddle_collision(&mut ball, &paddle));
            assert!(
                ball.vel.x.abs() < 1e-4,
                "{shape:?} centered bounce should be vertical, got vx={}",
                ball.vel.x
            );
            assert!(ball.vel.y < 0.0);
        }
    }

    #[test]
    fn test_upward_ball_is_ignored() {
        let paddle = paddle_with(PaddleShape::Rect);
        let mut ball = ball_at(340.0, 535.0, 3.0, -4.0);
        let before = ball.vel;
        assert!(!resolve_paddle_collision(&mut ball, &paddle));
        assert_eq!(ball.vel, before);
    }

    #[test]
    fn test_diamond_conserves_speed() {
        let paddle = paddle_with(PaddleShape::Diamond);
        let mut ball = ball_at(320.0, 535.0, 2.0, 5.0);
        let speed = ball.speed();

        assert!(resolve_paddle_collision(&mut ball, &paddle));
        assert!((ball.vel.x + 0.8 * speed).abs() < 1e-3); // left of center
        assert!((ball.speed() - speed).abs() < 1e-3);
        assert_eq!(ball.pos.y, 540.0 - ball.size.y - 10.0);
    }

    #[test]
    fn test_aabb_overlap_separates_boxes() {
        // Ball penetrating the left face of a block
        let fixed = Aabb::new(Vec2::new(200.0, 100.0), Vec2::new(80.0, 30.0));
        let mut ball = ball_at(185.0, 105.0, 4.0, 1.0);
        assert!(ball.aabb().intersects(&fixed));

        resolve_aabb_overlap(&mut ball, &fixed);
        assert!(!ball.aabb().intersects(&fixed));
        assert_eq!(ball.vel.x, -4.0); // forced outward
    }

    #[test]
    fn test_aabb_overlap_tie_prefers_left() {
        // Symmetric corner penetration: horizontal and vertical overlaps are
        // equal, so the first-evaluated (left) branch must win
        let fixed = Aabb::new(Vec2::new(100.0, 100.0), Vec2::new(80.0, 80.0));
        let mut ball = ball_at(85.0, 85.0, 2.0, 2.0);
        resolve_aabb_overlap(&mut ball, &fixed);
        assert_eq!(ball.pos.x, 80.0);
        assert_eq!(ball.pos.y, 85.0); // y untouched
    }

    #[test]
    fn test_brick_scan_resolves_first_block_only() {
        let mut blocks = vec![
            Block::new(BlockKind::Glass, Vec2::new(200.0, 100.0)),
            Block::new(BlockKind::Glass, Vec2::new(210.0, 100.0)),
        ];
        // Overlaps both blocks
        let mut ball = ball_at(205.0, 95.0, 0.0, 3.0);

        let hit = resolve_brick_collisions(&mut ball, &mut blocks);
        assert_eq!(hit, Some(0));
        assert!(blocks[0].destroyed);
        assert_eq!(blocks[1].hp, 1); // untouched
    }

    #[test]
    fn test_brick_scan_skips_destroyed() {
        let mut blocks = vec![
            Block::new(BlockKind::Glass, Vec2::new(200.0, 100.0)),
            Block::new(BlockKind::Glass, Vec2::new(210.0, 100.0)),
        ];
        blocks[0].destroyed = true;
        blocks[0].hp = 0;

        let mut ball = ball_at(205.0, 95.0, 0.0, 3.0);
        let hit = resolve_brick_collisions(&mut ball, &mut blocks);
        assert_eq!(hit, Some(1));
    }

    proptest! {
        #[test]
        fn prop_diamond_deflection_bounded(
            offset in -1.0f32..1.0,
            speed in 1.0f32..500.0,
            vy in 0.1f32..500.0,
        ) {
            let paddle = paddle_with(PaddleShape::Diamond);
            // Place the ball center at the requested offset
            let cx = 350.0 + offset * 50.0;
            let mut ball = ball_at(cx - 10.0, 535.0, 0.0, vy);
            // Scale to the requested speed
            let scale = speed / ball.speed();
            ball.vel *= scale;

            let speed_before = ball.speed();
            prop_assume!(resolve_paddle_collision(&mut ball, &paddle));

            prop_assert!(ball.vel.x.abs() <= 0.8 * speed_before + 1e-2);
            // Diamond conserves total speed
            prop_assert!((ball.speed() - speed_before).abs() < speed_before * 1e-3);
        }

        #[test]
        fn prop_wave_deflection_bounded(
            offset in -1.0f32..1.0,
            vy in 1.0f32..400.0,
            vx in -200.0f32..200.0,
        ) {
            let paddle = paddle_with(PaddleShape::Wave);
            let cx = 350.0 + offset * 50.0;
            let mut ball = ball_at(cx - 10.0, 535.0, vx, vy);

            let speed_before = ball.speed();
            prop_assume!(resolve_paddle_collision(&mut ball, &paddle));

            prop_assert!(ball.vel.x.abs() <= 0.95 * speed_before + 1e-2);
            prop_assert!((ball.speed() - speed_before).abs() < speed_before * 1e-3);
        }

        #[test]
        fn prop_wall_resolution_idempotent(
            x in -50.0f32..850.0,
            y in -50.0f32..650.0,
            vx in -300.0f32..300.0,
            vy in -300.0f32..300.0,
        ) {
            let mut ball = ball_at(x, y, vx, vy);
            resolve_wall_collision(&mut ball, 0.0, 0.0, 800.0, 600.0);

            let pos = ball.pos;
            let vel = ball.vel;
            let reflected = resolve_wall_collision(&mut ball, 0.0, 0.0, 800.0, 600.0);
            prop_assert!(!reflected);
            prop_assert_eq!(ball.pos, pos);
            prop_assert_eq!(ball.vel, vel);
        }
    }
}
