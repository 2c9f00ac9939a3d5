//! Fixed-capacity particle pool
//!
//! All slots are allocated up front and reused, so stepping the simulation
//! never allocates. A frame runs [`ParticlePool::spawn_step`], then
//! [`ParticlePool::integrate_step`], then reads
//! [`ParticlePool::snapshot_for_render`]; [`ParticlePool::update`] does the
//! first two in that order. Spawning before integrating means a new particle
//! has already moved once by the time it is first drawn.

use super::particle::{Particle, ParticleVertex};
use crate::config::{ConfigError, ParticleConfig};
use crate::foundation::math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pool of reusable exhaust particles
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    config: ParticleConfig,
    rng: StdRng,
}

impl ParticlePool {
    /// Create a pool seeded from system entropy
    pub fn new(config: ParticleConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a pool with a fixed seed, for reproducible runs
    pub fn with_seed(config: ParticleConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ParticleConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "Creating particle pool: capacity {}, {} per step",
            config.capacity,
            config.spawn_per_step
        );

        Ok(Self {
            particles: vec![Particle::default(); config.capacity],
            config,
            rng,
        })
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Configuration the pool was built with
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// All slots in pool order, dead ones included
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles
    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }

    /// Revive up to `spawn_per_step` dead slots at `emitter`
    ///
    /// Slots are taken first-fit in pool order. When the pool is full fewer
    /// (possibly zero) particles are spawned. Returns how many were spawned.
    pub fn spawn_step(&mut self, emitter: Vec3, active: bool) -> usize {
        if !active {
            return 0;
        }

        let Self { particles, config, rng } = self;
        let mut spawned = 0;

        for particle in particles.iter_mut().filter(|p| !p.is_alive()) {
            if spawned == config.spawn_per_step {
                break;
            }

            let life = rng.gen_range(config.life_min..config.life_max);
            let rx = rng.gen_range(-config.spread..config.spread);
            let rz = rng.gen_range(-config.spread..config.spread);

            *particle = Particle {
                position: emitter,
                velocity: Vec3::new(rx, -config.fall_speed, rz),
                life,
                max_life: life,
            };
            spawned += 1;
        }

        if spawned < config.spawn_per_step {
            log::trace!(
                "Particle pool saturated: spawned {} of {}",
                spawned,
                config.spawn_per_step
            );
        }
        spawned
    }

    /// Move every live particle and age it by `dt` seconds
    pub fn integrate_step(&mut self, dt: f32) {
        for particle in self.particles.iter_mut().filter(|p| p.is_alive()) {
            particle.integrate(dt);
        }
    }

    /// Spawn then integrate, the per-frame order
    pub fn update(&mut self, dt: f32, emitter: Vec3, active: bool) {
        self.spawn_step(emitter, active);
        self.integrate_step(dt);
        log::trace!("Particles alive: {}", self.alive_count());
    }

    /// Kill every particle immediately
    pub fn kill_all(&mut self) {
        for particle in &mut self.particles {
            particle.kill();
        }
    }

    /// Live particles in pool order as render records
    ///
    /// Computed fresh on every call; nothing is cached.
    pub fn snapshot_for_render(&self) -> impl Iterator<Item = ParticleVertex> + '_ {
        self.particles
            .iter()
            .filter(|p| p.is_alive())
            .map(ParticleVertex::from)
    }

    /// Empty buffer sized for a full pool, for use with [`Self::write_gpu_buffer`]
    pub fn gpu_buffer(&self) -> Vec<ParticleVertex> {
        Vec::with_capacity(self.capacity())
    }

    /// Refill `buffer` with the current snapshot and return the live count
    ///
    /// The buffer is cleared first and never grows past the pool capacity, so
    /// a buffer from [`Self::gpu_buffer`] is reused without reallocating. A
    /// return of zero means there is nothing to draw.
    pub fn write_gpu_buffer(&self, buffer: &mut Vec<ParticleVertex>) -> usize {
        buffer.clear();
        buffer.extend(self.snapshot_for_render());
        buffer.len()
    }
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self {
            particles: vec![Particle::default(); ParticleConfig::default().capacity],
            config: ParticleConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }
}
