//! Collision detection and response
//!
//! The ball moves first, then walls, the player paddle and the opponent paddle
//! are each checked in that order. Every check runs; there is no early exit, so
//! a pathological ball can trigger more than one response in the same tick.
//!
//! All triggers use strict comparisons: a ball exactly tangent to a wall, or
//! centred exactly on a paddle's top or bottom edge, does not collide.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Side};
use crate::consts::*;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Ball center after being pushed back to the tangent position
    pub point: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
        }
    }

    fn hit(point: Vec2) -> Self {
        Self { hit: true, point }
    }
}

/// Advance the ball by its velocity
#[inline]
pub fn move_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;
}

/// Bounce off the top edge
pub fn resolve_top_wall(state: &mut GameState) -> CollisionResult {
    let ball = &mut state.ball;
    if ball.pos.y - BALL_RADIUS < 0.0 {
        ball.pos.y = BALL_RADIUS;
        ball.vel.y = -ball.vel.y;
        return CollisionResult::hit(ball.pos);
    }
    CollisionResult::miss()
}

/// Bounce off the bottom edge
pub fn resolve_bottom_wall(state: &mut GameState) -> CollisionResult {
    let height = state.surface.height;
    let ball = &mut state.ball;
    if ball.pos.y + BALL_RADIUS > height {
        ball.pos.y = height - BALL_RADIUS;
        ball.vel.y = -ball.vel.y;
        return CollisionResult::hit(ball.pos);
    }
    CollisionResult::miss()
}

/// Vertical speed added by a paddle hit: -gain at the top tip, +gain at the bottom tip
#[inline]
pub fn deflection(ball_y: f32, paddle_y: f32) -> f32 {
    let half = PADDLE_HEIGHT / 2.0;
    ((ball_y - (paddle_y + half)) / half) * DEFLECTION_GAIN
}

/// Whether the ball center lies strictly between a paddle's top and bottom edges
#[inline]
fn within_paddle_span(ball_y: f32, paddle_y: f32) -> bool {
    ball_y > paddle_y && ball_y < paddle_y + PADDLE_HEIGHT
}

/// Bounce off one paddle
///
/// The ball is placed tangent to the paddle's facing edge, its horizontal speed
/// flips, and the hit offset from the paddle center adds to its vertical speed.
pub fn resolve_paddle(state: &mut GameState, side: Side) -> CollisionResult {
    let paddle_y = state.paddle_y(side);
    let surface = state.surface;
    let ball = &mut state.ball;

    if !within_paddle_span(ball.pos.y, paddle_y) {
        return CollisionResult::miss();
    }

    let (crossed, tangent_x) = match side {
        Side::Player => {
            let face = surface.player_x() + PADDLE_WIDTH;
            (ball.pos.x - BALL_RADIUS < face, face + BALL_RADIUS)
        }
        Side::Opponent => {
            let face = surface.opponent_x();
            (ball.pos.x + BALL_RADIUS > face, face - BALL_RADIUS)
        }
    };
    if !crossed {
        return CollisionResult::miss();
    }

    ball.pos.x = tangent_x;
    ball.vel.x = -ball.vel.x;
    ball.vel.y += deflection(ball.pos.y, paddle_y);
    CollisionResult::hit(ball.pos)
}

/// Move the ball and resolve every collision for this tick
///
/// Paddle hits spawn a particle burst at the contact point in the hit side's color.
pub fn step_physics<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    move_ball(state);

    for wall in [resolve_top_wall(state), resolve_bottom_wall(state)] {
        if wall.hit {
            log::debug!("Wall bounce at {:?}", wall.point);
            events.push(GameEvent::WallBounce {
                contact: wall.point,
            });
        }
    }

    for side in [Side::Player, Side::Opponent] {
        let result = resolve_paddle(state, side);
        if result.hit {
            log::debug!(
                "{:?} paddle hit at {:?}, ball vel now {:?}",
                side,
                result.point,
                state.ball.vel
            );
            state.effects.spawn_burst(result.point, side.color(), rng);
            events.push(GameEvent::PaddleHit {
                side,
                contact: result.point,
            });
        }
    }
}
