//! Exhaust particle simulation
//!
//! A fixed pool of point particles spawned at an emitter, integrated once per
//! frame and handed to the renderer as a compact list of live particles.

pub mod particle;
pub mod pool;

pub use particle::{Particle, ParticleVertex, DEAD_LIFE};
pub use pool::ParticlePool;
