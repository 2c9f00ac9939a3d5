//! Cone generator
//!
//! The local cone has its base on the unit circle in the Y-Z plane at `x = 0`
//! and its apex at `(1, 0, 0)`.

use super::mesh::{Mesh, MeshError};
use super::pre_transform::{check_subdivisions, finish};
use crate::foundation::math::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Vertices emitted per subdivision step
pub const fn cone_vertex_count(capped: bool, subdivisions: usize) -> usize {
    if capped { 6 * subdivisions } else { 3 * subdivisions }
}

/// Generate a single-color cone tessellated into `subdivisions` slices
///
/// Ring vertices carry the smooth lateral normal `normalize(1, y, z)`; the
/// apex vertex of each slice uses the normal halfway between its two ring
/// vertices. With `capped`, each slice also gets a base triangle facing `-X`.
pub fn generate_cone(
    capped: bool,
    subdivisions: usize,
    color: Vec3,
    transform: &Mat4,
) -> Result<Mesh, MeshError> {
    check_subdivisions("cone", subdivisions)?;

    let count = cone_vertex_count(capped, subdivisions);
    let mut positions = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);

    let base_normal = Vec3::new(-1.0, 0.0, 0.0);
    let (mut prev_y, mut prev_z) = (1.0_f32, 0.0_f32);

    for i in 0..subdivisions {
        let angle = (i + 1) as f32 / subdivisions as f32 * TAU;
        let (z, y) = angle.sin_cos();

        positions.push(Vec3::new(0.0, prev_y, prev_z));
        normals.push(Vec3::new(1.0, prev_y, prev_z).normalize());

        positions.push(Vec3::new(0.0, y, z));
        normals.push(Vec3::new(1.0, y, z).normalize());

        positions.push(Vec3::new(1.0, 0.0, 0.0));
        normals.push(Vec3::new(1.0, (prev_y + y) / 2.0, (prev_z + z) / 2.0).normalize());

        if capped {
            positions.push(Vec3::zeros());
            positions.push(Vec3::new(0.0, y, z));
            positions.push(Vec3::new(0.0, prev_y, prev_z));
            normals.extend_from_slice(&[base_normal; 3]);
        }

        prev_y = y;
        prev_z = z;
    }

    finish("cone", positions, normals, color, transform)
}
