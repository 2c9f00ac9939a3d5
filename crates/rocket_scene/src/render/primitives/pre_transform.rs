//! Local-space to model-space transform shared by the primitive generators

use super::mesh::{Mesh, MeshError};
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Smallest subdivision count a tessellated primitive accepts
pub const MIN_SUBDIVISIONS: usize = 3;

/// `w` magnitudes below this are treated as a divide by zero
const HOMOGENEOUS_EPSILON: f32 = 1e-8;

pub(crate) fn check_subdivisions(primitive: &'static str, subdivisions: usize) -> Result<(), MeshError> {
    if subdivisions < MIN_SUBDIVISIONS {
        return Err(MeshError::InvalidSubdivisions {
            primitive,
            subdivisions,
            minimum: MIN_SUBDIVISIONS,
        });
    }
    Ok(())
}

/// Transform local-space geometry into a finished single-color mesh
///
/// Positions go through `transform` as homogeneous points followed by the
/// divide by `w`. Normals go through the inverse-transpose of the linear part
/// and are renormalized, which keeps them perpendicular under non-uniform
/// scale.
pub(crate) fn finish(
    primitive: &'static str,
    mut positions: Vec<Vec3>,
    mut normals: Vec<Vec3>,
    color: Vec3,
    transform: &Mat4,
) -> Result<Mesh, MeshError> {
    let normal_matrix = transform
        .normal_matrix()
        .ok_or(MeshError::SingularTransform { primitive })?;

    for (index, p) in positions.iter_mut().enumerate() {
        let t = transform.transform_homogeneous(p);
        if t.w.abs() < HOMOGENEOUS_EPSILON {
            return Err(MeshError::DegenerateHomogeneous { primitive, index });
        }
        *p = t.xyz() / t.w;
    }

    for n in &mut normals {
        *n = (normal_matrix * *n).normalize();
    }

    let colors = vec![color; positions.len()];

    log::debug!("Generated {} with {} vertices", primitive, positions.len());
    Ok(Mesh::from_attributes(positions, colors, normals))
}
