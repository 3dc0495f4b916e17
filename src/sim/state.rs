//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame lives here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::effects::Effects;
use crate::clamp_lenient;
use crate::consts::*;

/// Which paddle a thing belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human paddle on the left
    Player,
    /// Scripted paddle on the right
    Opponent,
}

impl Side {
    /// Particle color identifying the side that was hit
    pub fn color(self) -> [f32; 4] {
        match self {
            Side::Player => PLAYER_COLOR,
            Side::Opponent => OPPONENT_COLOR,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Someone reached the winning score; frozen until a full reset
    GameOver,
}

/// Something the simulation did this tick that collaborators may care about
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallBounce { contact: Vec2 },
    /// Ball bounced off a paddle
    PaddleHit { side: Side, contact: Vec2 },
    /// `side` won a point
    Scored { side: Side },
    /// Ball was put back in the middle with a fresh serve
    BallReset,
    /// `winner` reached the winning score
    MatchOver { winner: Side },
}

/// Size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Highest legal top offset for a paddle
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        self.height - PADDLE_HEIGHT
    }

    /// Left edge of the player paddle
    #[inline]
    pub fn player_x(&self) -> f32 {
        PADDLE_MARGIN
    }

    /// Left edge of the opponent paddle
    #[inline]
    pub fn opponent_x(&self) -> f32 {
        self.width - PADDLE_WIDTH - PADDLE_MARGIN
    }

    /// Clamp a paddle top offset into the surface
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        clamp_lenient(y, 0.0, self.max_paddle_y())
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// A ball at `pos` with a fresh random serve
    pub fn serve<R: Rng>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            pos,
            vel: serve_velocity(rng),
        }
    }
}

/// Random serve: fixed horizontal speed toward either side, small vertical drift
pub fn serve_velocity<R: Rng>(rng: &mut R) -> Vec2 {
    let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let vy = rng.random_range(-SERVE_SPREAD..SERVE_SPREAD);
    Vec2::new(BALL_BASE_SPEED * dir, vy)
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub surface: Surface,
    /// Top edge of the player paddle
    pub player_y: f32,
    /// Top edge of the opponent paddle
    pub opponent_y: f32,
    pub ball: Ball,
    pub player_score: u32,
    pub opponent_score: u32,
    pub phase: GamePhase,
    /// Particles and screen shake
    pub effects: Effects,
}

impl GameState {
    /// Fresh match: paddles centered, ball served from the middle
    pub fn new<R: Rng>(surface: Surface, rng: &mut R) -> Self {
        let paddle_y = (surface.height - PADDLE_HEIGHT) / 2.0;
        Self {
            surface,
            player_y: paddle_y,
            opponent_y: paddle_y,
            ball: Ball::serve(surface.center(), rng),
            player_score: 0,
            opponent_score: 0,
            phase: GamePhase::Playing,
            effects: Effects::default(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.player_y,
            Side::Opponent => self.opponent_y,
        }
    }

    /// Map a vertical pointer position (surface coordinates) onto the player paddle.
    /// Non-finite positions are ignored.
    pub fn apply_pointer(&mut self, pointer_y: f32) {
        if !pointer_y.is_finite() {
            return;
        }
        self.player_y = self.surface.clamp_paddle_y(pointer_y - PADDLE_HEIGHT / 2.0);
    }
}
