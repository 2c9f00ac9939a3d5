//! # Scene cameras
//!
//! A perspective [`Camera`] plus the three ways the viewer can point it:
//! free flight, chasing the rocket, or watching from the ground.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// How a viewport's camera is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// User-controlled camera
    #[default]
    Free,
    /// Rides along behind the rocket
    FollowRocket,
    /// Fixed near the pad, tracking the rocket
    GroundRocket,
}

impl CameraMode {
    /// Next mode in the Free → Follow → Ground cycle
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Free => Self::FollowRocket,
            Self::FollowRocket => Self::GroundRocket,
            Self::GroundRocket => Self::Free,
        }
    }
}

/// Perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Place the camera and aim it
    #[must_use]
    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// View-to-clip matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined projection · view
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn test_mode_cycle() {
        let mode = CameraMode::default();
        assert_eq!(mode, CameraMode::Free);
        assert_eq!(mode.next(), CameraMode::FollowRocket);
        assert_eq!(mode.next().next(), CameraMode::GroundRocket);
        assert_eq!(mode.next().next().next(), CameraMode::Free);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let camera = Camera::perspective(Vec3::zeros(), 60.0, 16.0 / 9.0, 0.1, 100.0)
            .looking_at(Vec3::new(10.0, 5.0, -3.0), Vec3::new(0.0, 6.0, 0.0));

        let clip = camera.view_projection().transform_point(&Point3::new(0.0, 6.0, 0.0));
        assert_relative_eq!(clip.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, 0.0, epsilon = 1e-5);
        assert!(clip.z > -1.0 && clip.z < 1.0);
    }
}
