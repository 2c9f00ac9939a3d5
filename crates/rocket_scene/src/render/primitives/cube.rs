//! Flat-shaded cube generator

use super::mesh::{Mesh, MeshError};
use super::pre_transform::finish;
use crate::foundation::math::{Mat4, Vec3};

/// Number of vertices in a generated cube (6 faces, 2 triangles each)
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Outward normal for each face, in the same order as [`CUBE_POSITIONS`]
const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [-1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, -1.0],
];

/// Cube spanning `[-1, 1]` on every axis, six vertices per face
const CUBE_POSITIONS: [[f32; 3]; CUBE_VERTEX_COUNT] = [
    // +Y
    [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0],
    // +Z
    [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0],
    // -X
    [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0],
    // -Y
    [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0],
    // +X
    [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0],
    // -Z
    [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0],
];

/// Generate a single-color cube with one flat normal per face
///
/// The local cube spans `[-1, 1]^3`; `transform` places it.
pub fn generate_cube(color: Vec3, transform: &Mat4) -> Result<Mesh, MeshError> {
    let positions = CUBE_POSITIONS.iter().map(|&p| Vec3::from(p)).collect();
    let normals = (0..CUBE_VERTEX_COUNT)
        .map(|i| Vec3::from(FACE_NORMALS[i / 6]))
        .collect();

    finish("cube", positions, normals, color, transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_vertex_layout() {
        let cube = generate_cube(Vec3::new(1.0, 0.0, 0.0), &Mat4::identity()).unwrap();

        assert_eq!(cube.vertex_count(), CUBE_VERTEX_COUNT);
        assert_eq!(cube.colors.len(), CUBE_VERTEX_COUNT);
        assert_eq!(cube.normals.len(), CUBE_VERTEX_COUNT);
        assert!(cube.colors.iter().all(|c| *c == Vec3::new(1.0, 0.0, 0.0)));
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn test_cube_has_six_flat_faces() {
        let cube = generate_cube(Vec3::zeros(), &Mat4::identity()).unwrap();

        for face in 0..6 {
            let normals = &cube.normals[face * 6..face * 6 + 6];
            assert!(normals.iter().all(|n| *n == normals[0]), "face {face} is not flat");

            let shared = cube.normals.iter().filter(|n| **n == normals[0]).count();
            assert_eq!(shared, 6, "face {face} normal is reused by another face");
        }
    }

    #[test]
    fn test_cube_face_vertices_lie_on_their_face() {
        let cube = generate_cube(Vec3::zeros(), &Mat4::identity()).unwrap();

        for (p, n) in cube.positions.iter().zip(&cube.normals) {
            assert_relative_eq!(p.dot(n), 1.0);
            assert!(p.iter().all(|c| (-1.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_cube_normals_stay_unit_under_nonuniform_scale() {
        let transform = Mat4::new_translation(&Vec3::new(1.0, 1.0, 0.0))
            * Mat4::new_nonuniform_scaling(&Vec3::new(0.5, 0.8, 0.05));
        let cube = generate_cube(Vec3::zeros(), &transform).unwrap();

        for n in &cube.normals {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-5);
        }
        let (min, max) = cube.bounds().unwrap();
        assert_relative_eq!(min, Vec3::new(0.5, 0.2, -0.05), epsilon = 1e-5);
        assert_relative_eq!(max, Vec3::new(1.5, 1.8, 0.05), epsilon = 1e-5);
    }

    #[test]
    fn test_cube_generation_is_deterministic() {
        let transform = Mat4::new_nonuniform_scaling(&Vec3::new(2.0, 3.0, 4.0));
        let a = generate_cube(Vec3::new(0.2, 0.4, 0.6), &transform).unwrap();
        let b = generate_cube(Vec3::new(0.2, 0.4, 0.6), &transform).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cube_rejects_singular_transform() {
        let flat = Mat4::new_nonuniform_scaling(&Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(
            generate_cube(Vec3::zeros(), &flat),
            Err(MeshError::SingularTransform { primitive: "cube" })
        );
    }
}
