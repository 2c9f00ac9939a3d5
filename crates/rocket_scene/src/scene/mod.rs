//! Launch scene: animation, cameras, lights and per-frame state

pub mod camera;
pub mod launch;
pub mod lighting;
pub mod state;

pub use camera::{Camera, CameraMode};
pub use launch::LaunchAnimation;
pub use lighting::{PointLight, RocketLights};
pub use state::{SceneState, Viewport};
