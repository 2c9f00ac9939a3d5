//! Cylinder generator
//!
//! The local cylinder runs along X from `x = 0` to `x = 1` with unit radius.

use super::mesh::{Mesh, MeshError};
use super::pre_transform::{check_subdivisions, finish};
use crate::foundation::math::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Vertices emitted for a cylinder with the given tessellation
pub const fn cylinder_vertex_count(capped: bool, subdivisions: usize) -> usize {
    if capped { 12 * subdivisions } else { 6 * subdivisions }
}

/// Generate a single-color cylinder tessellated into `subdivisions` slices
///
/// The side is smooth-shaded with radial normals `(0, y, z)`. With `capped`,
/// the `x = 0` end is closed with a fan facing `-X` and the `x = 1` end with a
/// fan facing `+X`.
pub fn generate_cylinder(
    capped: bool,
    subdivisions: usize,
    color: Vec3,
    transform: &Mat4,
) -> Result<Mesh, MeshError> {
    check_subdivisions("cylinder", subdivisions)?;

    let count = cylinder_vertex_count(capped, subdivisions);
    let mut positions = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);

    let near_cap = Vec3::new(-1.0, 0.0, 0.0);
    let far_cap = Vec3::new(1.0, 0.0, 0.0);
    let (mut prev_y, mut prev_z) = (1.0_f32, 0.0_f32);

    for i in 0..subdivisions {
        let angle = (i + 1) as f32 / subdivisions as f32 * TAU;
        let (z, y) = angle.sin_cos();

        let prev_normal = Vec3::new(0.0, prev_y, prev_z);
        let normal = Vec3::new(0.0, y, z);

        positions.extend_from_slice(&[
            Vec3::new(0.0, prev_y, prev_z),
            Vec3::new(0.0, y, z),
            Vec3::new(1.0, y, z),
            Vec3::new(0.0, prev_y, prev_z),
            Vec3::new(1.0, y, z),
            Vec3::new(1.0, prev_y, prev_z),
        ]);
        normals.extend_from_slice(&[prev_normal, normal, normal, prev_normal, normal, prev_normal]);

        if capped {
            positions.extend_from_slice(&[
                Vec3::zeros(),
                Vec3::new(0.0, y, z),
                Vec3::new(0.0, prev_y, prev_z),
            ]);
            normals.extend_from_slice(&[near_cap; 3]);

            positions.extend_from_slice(&[
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, prev_y, prev_z),
                Vec3::new(1.0, y, z),
            ]);
            normals.extend_from_slice(&[far_cap; 3]);
        }

        prev_y = y;
        prev_z = z;
    }

    finish("cylinder", positions, normals, color, transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_cylinder_vertex_counts() {
        for subdivisions in [3, 5, 16] {
            let open = generate_cylinder(false, subdivisions, Vec3::zeros(), &Mat4::identity()).unwrap();
            assert_eq!(open.vertex_count(), 6 * subdivisions);

            let capped = generate_cylinder(true, subdivisions, Vec3::zeros(), &Mat4::identity()).unwrap();
            assert_eq!(capped.vertex_count(), 12 * subdivisions);
            assert!(capped.validate().is_ok());
        }
    }

    #[test]
    fn test_cylinder_cap_normals() {
        let cylinder = generate_cylinder(true, 6, Vec3::zeros(), &Mat4::identity()).unwrap();

        let near = cylinder.normals.iter().filter(|n| **n == Vec3::new(-1.0, 0.0, 0.0)).count();
        let far = cylinder.normals.iter().filter(|n| **n == Vec3::new(1.0, 0.0, 0.0)).count();
        assert_eq!(near, 18);
        assert_eq!(far, 18);
    }

    #[test]
    fn test_cylinder_side_normals_are_radial() {
        let cylinder = generate_cylinder(false, 12, Vec3::zeros(), &Mat4::identity()).unwrap();

        for (p, n) in cylinder.positions.iter().zip(&cylinder.normals) {
            assert_relative_eq!(n.x, 0.0);
            assert_relative_eq!(n.y, p.y, epsilon = 1e-6);
            assert_relative_eq!(n.z, p.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cylinder_under_rocket_body_transform() {
        let transform = Mat4::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2)
            * Mat4::new_nonuniform_scaling(&Vec3::new(4.0, 0.5, 0.5));
        let cylinder = generate_cylinder(true, 16, Vec3::zeros(), &transform).unwrap();

        let (min, max) = cylinder.bounds().unwrap();
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(max.y, 4.0, epsilon = 1e-5);
        assert_relative_eq!(max.x, 0.5, epsilon = 1e-5);

        for n in &cylinder.normals {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_cylinder_rejects_too_few_subdivisions() {
        assert!(matches!(
            generate_cylinder(false, 2, Vec3::zeros(), &Mat4::identity()),
            Err(MeshError::InvalidSubdivisions { primitive: "cylinder", subdivisions: 2, .. })
        ));
    }
}
