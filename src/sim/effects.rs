//! Visual feedback driven by simulation events: particle bursts and screen shake

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particle::{self, Particle};
use crate::consts::*;

/// Live particles plus the screen shake countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effects {
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Rendered frames of shake left; only decremented while positive
    pub shake_frames_remaining: i32,
    /// Camera offset magnitude handed to the renderer
    pub shake_intensity: f32,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            particles: Vec::new(),
            shake_frames_remaining: 0,
            shake_intensity: IDLE_SHAKE_INTENSITY,
        }
    }
}

impl Effects {
    /// Start a shake, replacing whatever was running. Values are taken as-is.
    pub fn trigger_shake(&mut self, frames: i32, intensity: f32) {
        self.shake_frames_remaining = frames;
        self.shake_intensity = intensity;
    }

    #[inline]
    pub fn is_shaking(&self) -> bool {
        self.shake_frames_remaining > 0
    }

    /// Use up one frame of shake.
    ///
    /// Returns the intensity to shake this frame with, or `None` when idle.
    /// Call exactly once per rendered frame.
    pub fn consume_shake_frame(&mut self) -> Option<f32> {
        if self.shake_frames_remaining > 0 {
            self.shake_frames_remaining -= 1;
            Some(self.shake_intensity)
        } else {
            None
        }
    }

    /// Append a fixed-size burst at `pos`
    pub fn spawn_burst<R: Rng>(&mut self, pos: Vec2, color: [f32; 4], rng: &mut R) {
        self.particles.reserve(PARTICLE_BURST);
        for _ in 0..PARTICLE_BURST {
            self.particles.push(particle::spawn(pos, color, rng));
        }
    }

    /// Advance every particle one frame and drop the ones that burned out
    pub fn update_particles(&mut self) {
        // Walk backwards so in-place removal never skips an entry
        for i in (0..self.particles.len()).rev() {
            particle::advance(&mut self.particles[i]);
            if particle::is_expired(&self.particles[i]) {
                self.particles.remove(i);
            }
        }
    }
}
