//! Per-frame scene context
//!
//! [`SceneState`] holds everything that changes from frame to frame: the
//! launch, the exhaust pool, the lights, and how each viewport looks at the
//! scene. The
//! application owns one and passes it explicitly to input, update and
//! draw.

use super::camera::{Camera, CameraMode};
use super::launch::LaunchAnimation;
use super::lighting::{PointLight, RocketLights};
use crate::config::{CameraConfig, ConfigError, SceneConfig};
use crate::foundation::math::{Mat4Ext, Vec3};
use crate::render::ParticlePool;

/// Initial free-camera position
const FREE_CAMERA_POSITION: [f32; 3] = [0.0, 4.0, 25.0];

/// Screen-space rectangle drawn with one camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// How this viewport's camera is placed
    pub mode: CameraMode,
}

impl Viewport {
    /// Width over height, with an empty viewport treated as square
    pub fn aspect(&self) -> f32 {
        if self.width == 0 || self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Mutable state of the launch scene
#[derive(Debug)]
pub struct SceneState {
    launch: LaunchAnimation,
    particles: ParticlePool,
    lights: RocketLights,
    camera_config: CameraConfig,
    /// Mode of the full-screen or left viewport
    pub primary_mode: CameraMode,
    /// Mode of the right viewport in split screen
    pub secondary_mode: CameraMode,
    /// Draw two viewports side by side
    pub split_screen: bool,
    /// Pose used by viewports in [`CameraMode::Free`]
    pub free_camera: Camera,
}

impl SceneState {
    /// Build the scene from a validated configuration
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        let particles = ParticlePool::new(config.particles.clone())?;
        Ok(Self::with_pool(config, particles))
    }

    /// Build the scene with a deterministic particle stream
    pub fn with_seed(config: &SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        let particles = ParticlePool::with_seed(config.particles.clone(), seed)?;
        Ok(Self::with_pool(config, particles))
    }

    fn with_pool(config: &SceneConfig, particles: ParticlePool) -> Self {
        let launch = LaunchAnimation::new(config.launch.clone());
        let camera = &config.camera;
        let free_camera = Camera::perspective(
            Vec3::from(FREE_CAMERA_POSITION),
            camera.fov_degrees,
            1.0,
            camera.near,
            camera.far,
        )
        .looking_at(Vec3::from(FREE_CAMERA_POSITION), launch.start_position());

        Self {
            launch,
            particles,
            lights: RocketLights::new(&config.lighting),
            camera_config: camera.clone(),
            primary_mode: CameraMode::Free,
            secondary_mode: CameraMode::GroundRocket,
            split_screen: false,
            free_camera,
        }
    }

    /// Launch animation
    pub fn launch(&self) -> &LaunchAnimation {
        &self.launch
    }

    /// Exhaust particles
    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    /// Light switches
    pub fn lights(&self) -> &RocketLights {
        &self.lights
    }

    /// Flip one rocket-mounted light, returning its new state
    pub fn toggle_point_light(&mut self, index: usize) -> Option<bool> {
        self.lights.toggle(index)
    }

    /// Flip the global directional light
    pub fn toggle_directional_light(&mut self) {
        self.lights.toggle_directional();
    }

    /// Rocket-mounted lights at the rocket's current pose
    pub fn point_lights(&self) -> impl Iterator<Item = PointLight> + '_ {
        let model = self.launch.model_matrix();
        self.lights.lights_at(model)
    }

    /// Start, pause or resume the launch
    pub fn toggle_launch(&mut self) {
        self.launch.toggle();
    }

    /// Put the rocket back on the pad
    pub fn reset_launch(&mut self) {
        self.launch.reset();
    }

    /// Cycle the primary viewport's camera mode
    pub fn cycle_primary_camera(&mut self) {
        self.primary_mode = self.primary_mode.next();
        log::debug!("Primary camera: {:?}", self.primary_mode);
    }

    /// Cycle the secondary viewport's camera mode
    pub fn cycle_secondary_camera(&mut self) {
        self.secondary_mode = self.secondary_mode.next();
        log::debug!("Secondary camera: {:?}", self.secondary_mode);
    }

    /// Switch between one and two viewports
    pub fn toggle_split_screen(&mut self) {
        self.split_screen = !self.split_screen;
        log::debug!("Split screen: {}", self.split_screen);
    }

    /// Advance one frame
    ///
    /// Exhaust is emitted and simulated only while the launch runs. A paused
    /// launch freezes the particles in place, and an idle launch clears them.
    pub fn update(&mut self, dt: f32) {
        self.launch.advance(dt);

        if !self.launch.is_active() {
            self.particles.kill_all();
        } else if self.launch.is_running() {
            let emitter = self.launch.emitter_position();
            self.particles.update(dt, emitter, true);
        }
    }

    /// Viewports for a framebuffer of the given size
    ///
    /// One full viewport, or two side-by-side halves in split screen. The
    /// right half takes any odd pixel.
    pub fn viewports(&self, width: u32, height: u32) -> Vec<Viewport> {
        if !self.split_screen {
            return vec![Viewport {
                x: 0,
                y: 0,
                width,
                height,
                mode: self.primary_mode,
            }];
        }

        let left = width / 2;
        vec![
            Viewport {
                x: 0,
                y: 0,
                width: left,
                height,
                mode: self.primary_mode,
            },
            Viewport {
                x: left,
                y: 0,
                width: width - left,
                height,
                mode: self.secondary_mode,
            },
        ]
    }

    /// Camera for a viewport, placed according to its mode
    pub fn camera_for(&self, viewport: &Viewport) -> Camera {
        let rocket = self.launch.position();
        let mut camera = match viewport.mode {
            CameraMode::Free => self.free_camera.clone(),
            CameraMode::FollowRocket => {
                let offset = Vec3::from(self.camera_config.follow_offset);
                let eye = self.launch.model_matrix().transform_homogeneous(&offset).xyz();
                self.base_camera().looking_at(eye, rocket)
            }
            CameraMode::GroundRocket => {
                let eye = self.launch.start_position() + Vec3::from(self.camera_config.ground_offset);
                self.base_camera().looking_at(eye, rocket)
            }
        };
        camera.aspect = viewport.aspect();
        camera
    }

    fn base_camera(&self) -> Camera {
        let config = &self.camera_config;
        Camera::perspective(Vec3::zeros(), config.fov_degrees, 1.0, config.near, config.far)
    }
}
