//! Render-facing data: procedural meshes, composite models and particles
//!
//! Nothing in here talks to a graphics API. Meshes and particle snapshots
//! are plain data handed to whatever upload/draw layer the application uses.

pub mod primitives;
pub mod models;
pub mod particles;

pub use primitives::{Mesh, MeshError, MeshVertex};
pub use models::{CompositeModel, ModelPart, PrimitiveShape};
pub use particles::{Particle, ParticlePool, ParticleVertex};
