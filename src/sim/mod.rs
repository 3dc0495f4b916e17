//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Randomness only through a caller-supplied RNG
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod effects;
pub mod opponent;
pub mod particle;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, step_physics};
pub use effects::Effects;
pub use opponent::step_opponent;
pub use particle::Particle;
pub use scoring::{check_scoring, full_reset, overlay_message, point_reset, winner};
pub use state::{Ball, GameEvent, GamePhase, GameState, Side, Surface};
pub use tick::tick;
