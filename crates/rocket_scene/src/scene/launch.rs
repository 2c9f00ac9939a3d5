//! Rocket launch trajectory
//!
//! The rocket accelerates straight up while drifting sideways with a cubic
//! term, and is kept pointing along its velocity.

use crate::config::LaunchConfig;
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Below this time the velocity is too small to orient the rocket from
const ORIENTATION_START: f32 = 0.01;

/// Launch state machine: idle, running or paused
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchAnimation {
    active: bool,
    paused: bool,
    time: f32,
    config: LaunchConfig,
}

impl LaunchAnimation {
    /// Create an idle launch at the configured start position
    pub fn new(config: LaunchConfig) -> Self {
        Self {
            active: false,
            paused: false,
            time: 0.0,
            config,
        }
    }

    /// True once launched, until reset
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True while launched but frozen
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True while the trajectory is advancing
    pub fn is_running(&self) -> bool {
        self.active && !self.paused
    }

    /// Seconds since launch
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Pad position
    pub fn start_position(&self) -> Vec3 {
        Vec3::from(self.config.start_position)
    }

    /// Launch from the pad when idle, otherwise pause or resume
    pub fn toggle(&mut self) {
        if self.active {
            self.paused = !self.paused;
            log::info!("Launch {}", if self.paused { "paused" } else { "resumed" });
        } else {
            self.active = true;
            self.paused = false;
            self.time = 0.0;
            log::info!("Launch started");
        }
    }

    /// Put the rocket back on the pad
    pub fn reset(&mut self) {
        self.active = false;
        self.paused = false;
        self.time = 0.0;
        log::info!("Launch reset");
    }

    /// Advance the clock by `dt` seconds while running
    pub fn advance(&mut self, dt: f32) {
        if self.is_running() {
            self.time += dt;
        }
    }

    /// Current rocket position
    pub fn position(&self) -> Vec3 {
        let mut position = self.start_position();
        if !self.active {
            return position;
        }

        let t = self.time;
        let (t2, t3) = (t * t, t * t * t);
        let side = self.config.side_power;

        position.y += 0.5 * self.config.vertical_power * t2;
        position.x += 0.33 * side * t3;
        position.z += 0.33 * (side * 0.5) * t3;
        position
    }

    /// Direction of travel used for orientation
    ///
    /// Straight up right after launch, where the true velocity is near zero.
    pub fn velocity(&self) -> Vec3 {
        let t = self.time;
        if !self.active || t < ORIENTATION_START {
            return Vec3::new(0.0, 1.0, 0.0);
        }

        let side = self.config.side_power;
        Vec3::new(side * t * t, self.config.vertical_power * t, side * 0.5 * t * t)
    }

    /// Rocket model matrix: translate to the current position, then turn the
    /// rocket's +Y axis onto the direction of travel
    pub fn model_matrix(&self) -> Mat4 {
        let translation = Mat4::new_translation(&self.position());
        if !self.active {
            return translation;
        }

        let v = self.velocity();
        let pitch = v.x.hypot(v.z).atan2(v.y);
        let yaw = v.x.atan2(v.z);

        translation * Mat4::rotation_y(yaw) * Mat4::rotation_x(pitch)
    }

    /// World position of the exhaust emitter
    pub fn emitter_position(&self) -> Vec3 {
        let offset = Vec3::from(self.config.emitter_offset);
        self.model_matrix().transform_homogeneous(&offset).xyz()
    }
}

impl Default for LaunchAnimation {
    fn default() -> Self {
        Self::new(LaunchConfig::default())
    }
}
