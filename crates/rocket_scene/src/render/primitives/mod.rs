//! Procedural primitive meshes
//!
//! Each generator builds its geometry in a fixed local space and then places
//! it with a caller-supplied pre-transform. Generators either return a fully
//! valid [`Mesh`] or an error; they never hand back partial geometry.

pub mod mesh;
pub mod cube;
pub mod cone;
pub mod cylinder;
mod pre_transform;

// Re-export commonly used types
pub use mesh::{concatenate, concatenate_all, Mesh, MeshError, MeshVertex};
pub use cube::{generate_cube, CUBE_VERTEX_COUNT};
pub use cone::{cone_vertex_count, generate_cone};
pub use cylinder::{cylinder_vertex_count, generate_cylinder};
pub use pre_transform::MIN_SUBDIVISIONS;
