//! Particle record and its render-facing vertex

use crate::foundation::math::Vec3;

/// Lifetime given to slots that have never been spawned or were killed
pub const DEAD_LIFE: f32 = -1.0;

/// Simulated exhaust particle
///
/// A slot is alive while `life > 0`. Dead slots keep their last position and
/// velocity until they are reused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// World position
    pub position: Vec3,
    /// World velocity in units per second
    pub velocity: Vec3,
    /// Seconds left to live
    pub life: f32,
    /// Lifetime at spawn, for the fade ratio
    pub max_life: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
            life: DEAD_LIFE,
            max_life: 1.0,
        }
    }
}

impl Particle {
    /// Whether this slot is currently simulated and drawn
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Remaining fraction of the lifetime, in `(0, 1]` while alive
    pub fn life_ratio(&self) -> f32 {
        self.life / self.max_life
    }

    /// Mark the slot free for reuse
    pub fn kill(&mut self) {
        self.life = DEAD_LIFE;
    }

    /// Advance one step of simple ballistic motion
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.life -= dt;
    }
}

/// Per-particle record uploaded for point-sprite rendering
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    /// World position
    pub position: [f32; 3],
    /// Remaining fraction of the lifetime, drives the fade-out
    pub life_ratio: f32,
}

impl From<&Particle> for ParticleVertex {
    fn from(particle: &Particle) -> Self {
        Self {
            position: particle.position.into(),
            life_ratio: particle.life_ratio(),
        }
    }
}
