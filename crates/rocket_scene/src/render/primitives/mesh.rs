//! Flat triangle-list mesh representation
//!
//! A [`Mesh`] is a set of parallel per-vertex attribute arrays. Every three
//! consecutive entries form one triangle and there is no index buffer, so two
//! triangles sharing a corner each carry their own copy of that vertex. This
//! keeps generation and concatenation trivial for the small procedural assets
//! the scene uses.
//!
//! # Optional attributes
//! `texcoords` and `shininess` are optional. An optional attribute counts as
//! present when its length equals the position count (an empty mesh therefore
//! has every attribute present). A non-empty mesh that does not carry the
//! attribute leaves it empty.

use crate::foundation::math::{Vec2, Vec3};
use thiserror::Error;

/// Errors raised while generating or validating mesh data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Tessellated primitive asked for too few angular steps
    #[error("{primitive}: {subdivisions} subdivisions requested, at least {minimum} required")]
    InvalidSubdivisions {
        /// Generator that rejected the request
        primitive: &'static str,
        /// Requested subdivision count
        subdivisions: usize,
        /// Smallest accepted count
        minimum: usize,
    },

    /// Pre-transform has no inverse, so normals cannot be corrected
    #[error("{primitive}: pre-transform is singular and cannot transform normals")]
    SingularTransform {
        /// Generator that received the transform
        primitive: &'static str,
    },

    /// Homogeneous divide would divide by (nearly) zero
    #[error("{primitive}: vertex {index} maps to w = 0 under the pre-transform")]
    DegenerateHomogeneous {
        /// Generator that received the transform
        primitive: &'static str,
        /// Offending vertex index
        index: usize,
    },

    /// An attribute array does not line up with the positions
    #[error("attribute '{attribute}' has {actual} entries, expected {expected}")]
    AttributeMismatch {
        /// Attribute name
        attribute: &'static str,
        /// Position count
        expected: usize,
        /// Attribute count
        actual: usize,
    },

    /// Vertex count is not a multiple of three
    #[error("mesh has {vertices} vertices, which is not a whole number of triangles")]
    NotTriangleList {
        /// Vertex count
        vertices: usize,
    },

    /// A part of a composite model failed to build
    #[error("model '{model}', part '{part}': {source}")]
    Part {
        /// Composite model name
        model: String,
        /// Part name
        part: String,
        /// Underlying generator error
        #[source]
        source: Box<MeshError>,
    },
}

/// Interleaved vertex record for GPU upload
///
/// Built on demand by [`Mesh::interleaved`]; the mesh itself stays in
/// structure-of-arrays form.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Position
    pub position: [f32; 3],
    /// RGB color
    pub color: [f32; 3],
    /// Unit normal
    pub normal: [f32; 3],
    /// Texture coordinate, `(0, 0)` when the mesh has none
    pub tex_coord: [f32; 2],
    /// Specular exponent, `0` when the mesh has none
    pub shininess: f32,
}

/// Non-indexed triangle list with per-vertex attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Vec3>,

    /// Per-vertex RGB color
    pub colors: Vec<Vec3>,

    /// Per-vertex unit normal
    pub normals: Vec<Vec3>,

    /// Optional texture coordinates
    pub texcoords: Vec<Vec2>,

    /// Optional per-vertex specular exponent
    pub shininess: Vec<f32>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from the three mandatory attributes
    pub fn from_attributes(positions: Vec<Vec3>, colors: Vec<Vec3>, normals: Vec<Vec3>) -> Self {
        Self {
            positions,
            colors,
            normals,
            texcoords: Vec::new(),
            shininess: Vec::new(),
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// True when the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True when texture coordinates line up with positions
    pub fn has_texcoords(&self) -> bool {
        self.texcoords.len() == self.positions.len()
    }

    /// True when shininess values line up with positions
    pub fn has_shininess(&self) -> bool {
        self.shininess.len() == self.positions.len()
    }

    /// Check the attribute-length and triangle-list invariants
    pub fn validate(&self) -> Result<(), MeshError> {
        let expected = self.positions.len();

        let mandatory = [("colors", self.colors.len()), ("normals", self.normals.len())];
        for (attribute, actual) in mandatory {
            if actual != expected {
                return Err(MeshError::AttributeMismatch { attribute, expected, actual });
            }
        }

        let optional = [("texcoords", self.texcoords.len()), ("shininess", self.shininess.len())];
        for (attribute, actual) in optional {
            if actual != 0 && actual != expected {
                return Err(MeshError::AttributeMismatch { attribute, expected, actual });
            }
        }

        if expected % 3 != 0 {
            return Err(MeshError::NotTriangleList { vertices: expected });
        }

        Ok(())
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        }))
    }

    /// Append another mesh's vertices after this one's
    ///
    /// Optional attributes survive only when both meshes carry them; otherwise
    /// the attribute is dropped from the result so it cannot fall out of step
    /// with the positions.
    pub fn append(&mut self, other: &Mesh) {
        let keep_texcoords = self.has_texcoords() && other.has_texcoords();
        let keep_shininess = self.has_shininess() && other.has_shininess();

        if !keep_texcoords && !(self.texcoords.is_empty() && other.texcoords.is_empty()) {
            log::warn!(
                "Dropping texcoords while concatenating meshes ({} + {} vertices)",
                self.vertex_count(),
                other.vertex_count()
            );
        }
        if !keep_shininess && !(self.shininess.is_empty() && other.shininess.is_empty()) {
            log::warn!(
                "Dropping shininess while concatenating meshes ({} + {} vertices)",
                self.vertex_count(),
                other.vertex_count()
            );
        }

        self.positions.extend_from_slice(&other.positions);
        self.colors.extend_from_slice(&other.colors);
        self.normals.extend_from_slice(&other.normals);

        if keep_texcoords {
            self.texcoords.extend_from_slice(&other.texcoords);
        } else {
            self.texcoords.clear();
        }

        if keep_shininess {
            self.shininess.extend_from_slice(&other.shininess);
        } else {
            self.shininess.clear();
        }
    }

    /// Interleave the attributes into GPU vertex records
    ///
    /// Fails if the attribute arrays have fallen out of step.
    pub fn interleaved(&self) -> Result<Vec<MeshVertex>, MeshError> {
        self.validate()?;

        let texcoords = self.has_texcoords();
        let shininess = self.has_shininess();

        Ok(self
            .positions
            .iter()
            .zip(&self.colors)
            .zip(&self.normals)
            .enumerate()
            .map(|(i, ((position, color), normal))| MeshVertex {
                position: (*position).into(),
                color: (*color).into(),
                normal: (*normal).into(),
                tex_coord: if texcoords { self.texcoords[i].into() } else { [0.0, 0.0] },
                shininess: if shininess { self.shininess[i] } else { 0.0 },
            })
            .collect())
    }
}

/// Concatenate two meshes into a new one, `a` first
///
/// See [`Mesh::append`] for how optional attributes are treated.
pub fn concatenate(mut a: Mesh, b: &Mesh) -> Mesh {
    a.append(b);
    a
}

/// Fold any number of meshes together in iteration order
pub fn concatenate_all<'a, I>(meshes: I) -> Mesh
where
    I: IntoIterator<Item = &'a Mesh>,
{
    meshes.into_iter().fold(Mesh::new(), concatenate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(offset: f32, color: Vec3) -> Mesh {
        Mesh::from_attributes(
            vec![
                Vec3::new(offset, 0.0, 0.0),
                Vec3::new(offset + 1.0, 0.0, 0.0),
                Vec3::new(offset, 1.0, 0.0),
            ],
            vec![color; 3],
            vec![Vec3::z(); 3],
        )
    }

    fn textured_triangle(offset: f32) -> Mesh {
        let mut mesh = triangle(offset, Vec3::new(1.0, 1.0, 1.0));
        mesh.texcoords = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        mesh.shininess = vec![32.0; 3];
        mesh
    }

    #[test]
    fn test_concatenate_preserves_order_and_length() {
        let a = triangle(0.0, Vec3::new(1.0, 0.0, 0.0));
        let b = triangle(5.0, Vec3::new(0.0, 1.0, 0.0));

        let result = concatenate(a.clone(), &b);

        assert_eq!(result.vertex_count(), a.vertex_count() + b.vertex_count());
        assert_eq!(&result.positions[..3], &a.positions[..]);
        assert_eq!(&result.positions[3..], &b.positions[..]);
        assert_eq!(&result.colors[..3], &a.colors[..]);
        assert_eq!(&result.colors[3..], &b.colors[..]);
        assert_eq!(&result.normals[3..], &b.normals[..]);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_concatenate_keeps_shared_optional_attributes() {
        let result = concatenate(textured_triangle(0.0), &textured_triangle(2.0));
        assert_eq!(result.texcoords.len(), 6);
        assert_eq!(result.shininess.len(), 6);
        assert!(result.has_texcoords());
    }

    #[test]
    fn test_concatenate_drops_mismatched_optional_attributes() {
        let result = concatenate(textured_triangle(0.0), &triangle(2.0, Vec3::zeros()));
        assert_eq!(result.vertex_count(), 6);
        assert!(result.texcoords.is_empty());
        assert!(result.shininess.is_empty());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_concatenate_onto_empty_mesh_keeps_attributes() {
        let result = concatenate(Mesh::new(), &textured_triangle(0.0));
        assert_eq!(result, textured_triangle(0.0));
    }

    #[test]
    fn test_concatenate_all_is_ordered_fold() {
        let parts = [
            triangle(0.0, Vec3::x()),
            triangle(1.0, Vec3::y()),
            triangle(2.0, Vec3::z()),
        ];
        let result = concatenate_all(&parts);
        assert_eq!(result.vertex_count(), 9);
        assert_eq!(result.colors[0], Vec3::x());
        assert_eq!(result.colors[3], Vec3::y());
        assert_eq!(result.colors[6], Vec3::z());
    }

    #[test]
    fn test_validate_rejects_misaligned_attributes() {
        let mut mesh = triangle(0.0, Vec3::zeros());
        mesh.normals.pop();
        assert_eq!(
            mesh.validate(),
            Err(MeshError::AttributeMismatch { attribute: "normals", expected: 3, actual: 2 })
        );

        let mut mesh = triangle(0.0, Vec3::zeros());
        mesh.texcoords.push(Vec2::zeros());
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::AttributeMismatch { attribute: "texcoords", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_partial_triangles() {
        let mut mesh = triangle(0.0, Vec3::zeros());
        mesh.positions.push(Vec3::zeros());
        mesh.colors.push(Vec3::zeros());
        mesh.normals.push(Vec3::z());
        assert_eq!(mesh.validate(), Err(MeshError::NotTriangleList { vertices: 4 }));
    }

    #[test]
    fn test_bounds() {
        let mesh = concatenate(triangle(-1.0, Vec3::zeros()), &triangle(3.0, Vec3::zeros()));
        let (min, max) = mesh.bounds().expect("mesh is not empty");
        assert_eq!(min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(max, Vec3::new(4.0, 1.0, 0.0));
        assert!(Mesh::new().bounds().is_none());
    }

    #[test]
    fn test_interleaved_fills_missing_optional_attributes() {
        let vertices = triangle(0.0, Vec3::new(0.5, 0.5, 0.5)).interleaved().unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].color, [0.5, 0.5, 0.5]);
        assert_eq!(vertices[1].tex_coord, [0.0, 0.0]);
        assert_eq!(vertices[1].shininess, 0.0);

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 3 * std::mem::size_of::<MeshVertex>());
    }

    #[test]
    fn test_interleaved_rejects_mismatched_attributes() {
        let mut mesh = triangle(0.0, Vec3::new(0.5, 0.5, 0.5));
        mesh.normals.pop();

        assert_eq!(
            mesh.interleaved(),
            Err(MeshError::AttributeMismatch {
                attribute: "normals",
                expected: 3,
                actual: 2,
            })
        );
    }
}
