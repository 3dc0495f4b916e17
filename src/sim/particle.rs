//! Short-lived visual particles
//!
//! Plain data plus free functions; particles never affect gameplay.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Fixed for the particle's whole life
    pub vel: Vec2,
    pub color: [f32; 4],
    /// Radius, fixed at spawn
    pub size: f32,
    /// Starts at 1.0, gone once it reaches 0
    pub life: f32,
}

/// Create a particle at `pos` with a random size and drift
pub fn spawn<R: Rng>(pos: Vec2, color: [f32; 4], rng: &mut R) -> Particle {
    let size = rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MIN_SIZE + PARTICLE_SIZE_SPREAD);
    let vel = Vec2::new(
        rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
        rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
    );
    Particle {
        pos,
        vel,
        color,
        size,
        life: 1.0,
    }
}

/// Move one frame along the fixed velocity and burn some life
#[inline]
pub fn advance(particle: &mut Particle) {
    particle.pos += particle.vel;
    particle.life -= PARTICLE_LIFE_DECAY;
}

#[inline]
pub fn is_expired(particle: &Particle) -> bool {
    particle.life <= 0.0
}
