//! Scene configuration: particle effect, launch trajectory, cameras and lights
//!
//! Defaults reproduce the stock launch effect, so an empty config file is a
//! valid config.

use super::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// Default particle pool capacity
pub const DEFAULT_PARTICLE_CAPACITY: usize = 1000;

/// Default number of particles spawned per simulation step
pub const DEFAULT_SPAWN_PER_STEP: usize = 2;

/// Exhaust particle effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Fixed number of particle slots
    pub capacity: usize,
    /// Upper bound on particles spawned per step
    pub spawn_per_step: usize,
    /// Shortest lifetime in seconds (inclusive)
    pub life_min: f32,
    /// Longest lifetime in seconds (exclusive)
    pub life_max: f32,
    /// Downward speed given to every new particle
    pub fall_speed: f32,
    /// Sideways speed range `[-spread, spread)` on X and Z
    pub spread: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_PARTICLE_CAPACITY,
            spawn_per_step: DEFAULT_SPAWN_PER_STEP,
            life_min: 1.0,
            life_max: 1.5,
            fall_speed: 3.0,
            spread: 1.0,
        }
    }
}

impl ParticleConfig {
    /// Check ranges the pool relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("particles.capacity must be at least 1".into()));
        }
        if !(self.life_min > 0.0 && self.life_min < self.life_max) || !self.life_max.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "particles life range [{}, {}) must be positive and non-empty",
                self.life_min, self.life_max
            )));
        }
        if !(self.spread > 0.0 && self.spread.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "particles.spread must be positive, got {}",
                self.spread
            )));
        }
        if !self.fall_speed.is_finite() {
            return Err(ConfigError::Invalid("particles.fall_speed must be finite".into()));
        }
        Ok(())
    }
}

/// Launch trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Landing pad positions, placed as scenery
    pub landing_pads: Vec<[f32; 3]>,
    /// Where the rocket sits before launch
    pub start_position: [f32; 3],
    /// Vertical acceleration
    pub vertical_power: f32,
    /// Horizontal drift strength
    pub side_power: f32,
    /// Exhaust emitter offset in rocket model space
    pub emitter_offset: [f32; 3],
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            landing_pads: vec![[30.0, -0.95, 30.0], [0.0, -0.95, -5.0]],
            // one unit above the second pad
            start_position: [0.0, 0.05, -5.0],
            vertical_power: 3.0,
            side_power: 0.8,
            emitter_offset: [0.0, -1.0, 0.0],
        }
    }
}

/// Camera and viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Offset of the chase camera in rocket model space
    pub follow_offset: [f32; 3],
    /// Offset of the ground camera from the launch start position
    pub ground_offset: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 2000.0,
            follow_offset: [10.0, 10.0, 5.0],
            ground_offset: [15.0, -0.5, -5.0],
        }
    }
}

/// Light carried by the rocket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLightConfig {
    /// Position in rocket model space
    pub offset: [f32; 3],
    /// Linear RGB color
    pub color: [f32; 3],
    /// Lit at startup
    pub enabled: bool,
}

impl PointLightConfig {
    fn new(offset: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            offset,
            color,
            enabled: false,
        }
    }
}

/// Scene lighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Global directional light on at startup
    pub directional_enabled: bool,
    /// Lights mounted on the rocket
    pub point_lights: Vec<PointLightConfig>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            directional_enabled: true,
            point_lights: vec![
                PointLightConfig::new([-2.0, 2.0, 0.0], [1.0, 0.0, 0.0]),
                PointLightConfig::new([2.0, 2.0, 0.0], [0.0, 1.0, 0.0]),
                PointLightConfig::new([0.0, 2.0, 2.0], [0.0, 0.0, 1.0]),
            ],
        }
    }
}

/// Top-level scene configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Exhaust particles
    pub particles: ParticleConfig,
    /// Launch trajectory
    pub launch: LaunchConfig,
    /// Cameras
    pub camera: CameraConfig,
    /// Lights
    pub lighting: LightingConfig,
}

impl Config for SceneConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.particles.validate()?;

        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(ConfigError::Invalid(format!(
                "camera clip range near={} far={} is not usable",
                camera.near, camera.far
            )));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.fov_degrees must be in (0, 180), got {}",
                camera.fov_degrees
            )));
        }
        Ok(())
    }
}
