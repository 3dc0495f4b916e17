//! Paddle Duel - a two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, opponent, scoring, effects)
//! - `game`: Frame orchestration and collaborator wiring
//! - `renderer`: Draw-list generation behind the `Renderer` trait
//! - `audio`: Sound cues behind the `SoundSink` trait
//! - `settings`: Presentation preferences

pub mod audio;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameScheduler, Game, ManualScheduler};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default drawing surface size
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between each paddle and its side of the surface
    pub const PADDLE_MARGIN: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Serve vertical speed is drawn from [-SERVE_SPREAD, SERVE_SPREAD)
    pub const SERVE_SPREAD: f32 = 2.0;
    /// Added vertical speed at the very tip of a paddle
    pub const DEFLECTION_GAIN: f32 = 3.0;

    /// Opponent heuristic
    pub const AI_STEP: f32 = 6.0;
    pub const AI_DEAD_ZONE: f32 = 20.0;

    pub const WINNING_SCORE: u32 = 5;

    /// Particles
    pub const PARTICLE_BURST: usize = 15;
    pub const PARTICLE_LIFE_DECAY: f32 = 0.05;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_SIZE_SPREAD: f32 = 4.0;
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;

    /// Screen shake after a point
    pub const SCORE_SHAKE_FRAMES: i32 = 20;
    pub const SCORE_SHAKE_INTENSITY: f32 = 10.0;
    /// Intensity held by a fresh state before any shake fires
    pub const IDLE_SHAKE_INTENSITY: f32 = 5.0;

    /// Side colors, shared by paddles and their hit particles
    pub const PLAYER_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const OPPONENT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Clamp `value` into `[lo, hi]` without panicking on inverted bounds or NaN.
///
/// Applies the upper bound first, so `lo` wins when `hi < lo`.
#[inline]
pub fn clamp_lenient(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}
