//! Per-tick simulation update
//!
//! Advances one fixed timestep: paddle movement from debounced input flags,
//! ball integration, then wall → paddle → brick resolution in that order.
//! Discrete per-tick correction only; no swept collision, so resolution
//! order and the separation snaps in the collision module are what keep
//! the ball out of bodies between ticks.

use super::collision::{
    resolve_brick_collisions, resolve_paddle_collision, resolve_wall_collision,
};
use super::effects::Effects;
use super::explosion::propagate_explosion;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;
use glam::Vec2;

/// Input flags for a single tick, already debounced by the platform layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Launch the served ball (click/tap/space)
    pub launch: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    effects: &mut dyn Effects,
    dt: f32,
) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    move_paddle(state, input, tuning, dt);

    match state.phase {
        GamePhase::Serve => {
            // Ball rides the paddle until launch
            let x = state.paddle.center_x() - state.ball.size.x / 2.0;
            state.ball.pos.x = x;

            if input.launch {
                state.ball.vel = Vec2::new(0.0, -tuning.ball_speed);
                state.phase = GamePhase::Playing;
                log::debug!("ball launched");
            }
        }
        GamePhase::Playing => {
            state.ball.pos += state.ball.vel * dt;

            if resolve_wall_collision(
                &mut state.ball,
                0.0,
                0.0,
                tuning.field_width,
                tuning.field_height,
            ) {
                effects.wall_hit();
            }

            resolve_paddle_collision(&mut state.ball, &state.paddle);

            if let Some(i) = resolve_brick_collisions(&mut state.ball, &mut state.blocks) {
                if state.blocks[i].destroyed {
                    let block = &state.blocks[i];
                    let (value, at, color) = (block.score_value(), block.center(), block.color());
                    let explosive = block.is_explosive();

                    state.score += value;
                    effects.block_destroyed(value, at, color);

                    if explosive {
                        state.score += propagate_explosion(i, &mut state.blocks, effects);
                    }
                }
            }

            // No bottom wall: falling out is a lost life
            if state.ball.pos.y > tuning.field_height {
                lose_life(state);
            }
        }
        GamePhase::GameOver => {}
    }
}

fn move_paddle(state: &mut GameState, input: &TickInput, tuning: &Tuning, dt: f32) {
    let mut dir = 0.0;
    if input.left {
        dir -= 1.0;
    }
    if input.right {
        dir += 1.0;
    }

    let paddle = &mut state.paddle;
    paddle.pos.x = (paddle.pos.x + dir * tuning.paddle_speed * dt)
        .clamp(0.0, tuning.field_width - paddle.width);
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("game over, final score {}", state.score);
    } else {
        log::info!("life lost, {} remaining", state.lives);
        state.spawn_ball_serve();
    }
}
