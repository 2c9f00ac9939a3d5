//! Multi-part models built from procedural primitives
//!
//! A [`CompositeModel`] is an ordered list of parts. Each part names a
//! primitive, a color and a pre-transform; assembling the model generates
//! every part independently and concatenates them in list order into one
//! static [`Mesh`]. The assembled mesh keeps no record of its parts, so
//! animating a part on its own means rebuilding from [`CompositeModel::build_parts`].

use crate::foundation::math::{Transform, Vec3};
use crate::render::primitives::{
    concatenate_all, generate_cone, generate_cube, generate_cylinder, Mesh, MeshError,
};

/// Which primitive generator a part uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveShape {
    /// Unit cube spanning `[-1, 1]^3`
    Cube,
    /// Cone with base at `x = 0` and apex at `x = 1`
    Cone {
        /// Close the base
        capped: bool,
        /// Angular steps around the axis
        subdivisions: usize,
    },
    /// Cylinder from `x = 0` to `x = 1`
    Cylinder {
        /// Close both ends
        capped: bool,
        /// Angular steps around the axis
        subdivisions: usize,
    },
}

impl PrimitiveShape {
    /// Generate this shape with a uniform color under `transform`
    pub fn generate(&self, color: Vec3, transform: &Transform) -> Result<Mesh, MeshError> {
        let matrix = transform.to_matrix();
        match *self {
            Self::Cube => generate_cube(color, &matrix),
            Self::Cone { capped, subdivisions } => generate_cone(capped, subdivisions, color, &matrix),
            Self::Cylinder { capped, subdivisions } => {
                generate_cylinder(capped, subdivisions, color, &matrix)
            }
        }
    }
}

/// One primitive placed inside a composite model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPart {
    /// Part name, used in logs and errors
    pub name: String,
    /// Primitive to generate
    pub shape: PrimitiveShape,
    /// Uniform vertex color
    pub color: Vec3,
    /// Placement within the model (scale, then rotate, then translate)
    pub transform: Transform,
}

impl ModelPart {
    /// Create a part with an identity placement
    pub fn new(name: impl Into<String>, shape: PrimitiveShape, color: Vec3) -> Self {
        Self {
            name: name.into(),
            shape,
            color,
            transform: Transform::identity(),
        }
    }

    /// Set the part's placement
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Generate this part's mesh
    pub fn build(&self) -> Result<Mesh, MeshError> {
        self.shape.generate(self.color, &self.transform)
    }
}

/// Named, ordered collection of parts that flattens into a single mesh
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeModel {
    /// Model name
    pub name: String,
    /// Parts in assembly order
    pub parts: Vec<ModelPart>,
}

impl CompositeModel {
    /// Create an empty model
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
        }
    }

    /// Append a part
    #[must_use]
    pub fn with_part(mut self, part: ModelPart) -> Self {
        self.parts.push(part);
        self
    }

    /// Generate every part's mesh, keeping them separate
    ///
    /// Fails on the first part that cannot be generated; the error names the
    /// model and the part.
    pub fn build_parts(&self) -> Result<Vec<(String, Mesh)>, MeshError> {
        self.parts
            .iter()
            .map(|part| {
                part.build()
                    .map(|mesh| (part.name.clone(), mesh))
                    .map_err(|source| MeshError::Part {
                        model: self.name.clone(),
                        part: part.name.clone(),
                        source: Box::new(source),
                    })
            })
            .collect()
    }

    /// Generate every part and concatenate them in part order
    pub fn assemble(&self) -> Result<Mesh, MeshError> {
        let parts = self.build_parts()?;
        let mesh = concatenate_all(parts.iter().map(|(_, mesh)| mesh));

        log::info!(
            "Assembled model '{}' from {} parts ({} vertices)",
            self.name,
            parts.len(),
            mesh.vertex_count()
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Quat;
    use crate::render::primitives::CUBE_VERTEX_COUNT;

    fn two_cubes() -> CompositeModel {
        CompositeModel::new("pair")
            .with_part(ModelPart::new("left", PrimitiveShape::Cube, Vec3::x()).with_transform(
                Transform::from_position(Vec3::new(-2.0, 0.0, 0.0)),
            ))
            .with_part(ModelPart::new("right", PrimitiveShape::Cube, Vec3::y()).with_transform(
                Transform::from_position(Vec3::new(2.0, 0.0, 0.0)),
            ))
    }

    #[test]
    fn test_assemble_concatenates_in_part_order() {
        let model = two_cubes();
        let mesh = model.assemble().unwrap();

        assert_eq!(mesh.vertex_count(), 2 * CUBE_VERTEX_COUNT);
        assert!(mesh.colors[..CUBE_VERTEX_COUNT].iter().all(|c| *c == Vec3::x()));
        assert!(mesh.colors[CUBE_VERTEX_COUNT..].iter().all(|c| *c == Vec3::y()));
        assert!(mesh.positions[..CUBE_VERTEX_COUNT].iter().all(|p| p.x <= -1.0));
        assert!(mesh.positions[CUBE_VERTEX_COUNT..].iter().all(|p| p.x >= 1.0));
    }

    #[test]
    fn test_build_parts_matches_assembly() {
        let model = two_cubes();
        let parts = model.build_parts().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].0, "left");

        let joined = concatenate_all(parts.iter().map(|(_, mesh)| mesh));
        assert_eq!(joined, model.assemble().unwrap());
    }

    #[test]
    fn test_failing_part_is_named() {
        let model = two_cubes().with_part(ModelPart::new(
            "broken",
            PrimitiveShape::Cone { capped: true, subdivisions: 1 },
            Vec3::zeros(),
        ));

        match model.assemble() {
            Err(MeshError::Part { model, part, source }) => {
                assert_eq!(model, "pair");
                assert_eq!(part, "broken");
                assert!(matches!(*source, MeshError::InvalidSubdivisions { subdivisions: 1, .. }));
            }
            other => panic!("expected part error, got {other:?}"),
        }
    }

    #[test]
    fn test_part_transform_is_scale_rotate_translate() {
        let part = ModelPart::new("fin", PrimitiveShape::Cube, Vec3::zeros()).with_transform(Transform::new(
            Vec3::new(0.0, 10.0, 0.0),
            Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2),
            Vec3::new(3.0, 1.0, 1.0),
        ));
        let (min, max) = part.build().unwrap().bounds().unwrap();

        // Scaled along X, rotated onto Y, then lifted by 10
        approx::assert_relative_eq!(min, Vec3::new(-1.0, 7.0, -1.0), epsilon = 1e-5);
        approx::assert_relative_eq!(max, Vec3::new(1.0, 13.0, 1.0), epsilon = 1e-5);
    }
}
