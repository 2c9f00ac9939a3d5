//! # Rocket Scene
//!
//! Procedural geometry and exhaust simulation for a rocket launch scene.
//!
//! ## Features
//!
//! - **Primitives**: cube, cone and cylinder generators with a pre-transform
//! - **Composition**: flat triangle-list meshes concatenated into models
//! - **Particles**: fixed-capacity exhaust pool with a GPU-ready snapshot
//! - **Scene**: launch trajectory, camera modes and split-screen viewports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rocket_scene::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rocket = assemble_rocket()?;
//!     let mut scene = SceneState::new(&SceneConfig::default())?;
//!
//!     scene.toggle_launch();
//!     scene.update(1.0 / 60.0);
//!
//!     println!("{} triangles, {} particles", rocket.triangle_count(), scene.particles().alive_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for scene users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData, ObjLoader},
        config::{Config, ConfigError, SceneConfig},
        foundation::math::{Mat4, Mat4Ext, Transform, Vec3},
        render::{
            models::{assemble_rocket, CompositeModel, ModelPart, PrimitiveShape},
            primitives::{concatenate, generate_cone, generate_cube, generate_cylinder},
            Mesh, MeshError, ParticlePool, ParticleVertex,
        },
        scene::{Camera, CameraMode, LaunchAnimation, PointLight, RocketLights, SceneState, Viewport},
    };
}
