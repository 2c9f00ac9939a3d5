//! Composite models assembled from procedural primitives

pub mod composite;
pub mod rocket;

pub use composite::{CompositeModel, ModelPart, PrimitiveShape};
pub use rocket::{assemble_rocket, rocket_model, ROCKET_SUBDIVISIONS};
