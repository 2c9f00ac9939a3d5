//! OBJ file loader for externally authored meshes
//!
//! Parsing is done by `tobj`; this module flattens its indexed output into the
//! crate's non-indexed [`Mesh`] and attaches material color and shininess to
//! every vertex.

use super::AssetError;
use crate::foundation::math::{Vec2, Vec3};
use crate::render::Mesh;
use std::path::Path;

/// Normal used when the file has none for a vertex
const FALLBACK_NORMAL: [f32; 3] = [1.0, 0.0, 0.0];

/// Color used when a face has no material
const FALLBACK_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Loader for Wavefront OBJ (+ MTL) assets
pub struct ObjLoader;

impl ObjLoader {
    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ..Default::default()
        }
    }

    /// Load an OBJ file and its material library into a flat mesh
    ///
    /// Missing texture coordinates become `(0, 0)` and missing normals a fixed
    /// direction; both only degrade shading. A missing or broken material
    /// library is logged and the mesh falls back to white, non-shiny vertices.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, AssetError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        if !path.exists() {
            return Err(AssetError::NotFound(source));
        }

        let (models, materials) = tobj::load_obj(path, &Self::load_options())
            .map_err(|e| AssetError::LoadFailed(format!("{source}: {e}")))?;
        let materials = Self::materials_or_default(materials, &source);

        let mesh = Self::flatten(&models, &materials, &source)?;
        log::info!(
            "Loaded OBJ {} ({} models, {} triangles)",
            source,
            models.len(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Load an OBJ from in-memory text, with an optional MTL library
    pub fn load_obj_from_str(obj: &str, mtl: Option<&str>) -> Result<Mesh, AssetError> {
        let source = "<memory>";
        let (models, materials) = tobj::load_obj_buf(&mut obj.as_bytes(), &Self::load_options(), |_| {
            mtl.map_or(Err(tobj::LoadError::OpenFileFailed), |text| {
                tobj::load_mtl_buf(&mut text.as_bytes())
            })
        })
        .map_err(|e| AssetError::LoadFailed(format!("{source}: {e}")))?;
        let materials = Self::materials_or_default(materials, source);

        Self::flatten(&models, &materials, source)
    }

    fn materials_or_default(
        materials: Result<Vec<tobj::Material>, tobj::LoadError>,
        source: &str,
    ) -> Vec<tobj::Material> {
        materials.unwrap_or_else(|e| {
            log::warn!("{}: material library unavailable ({}), using defaults", source, e);
            Vec::new()
        })
    }

    fn flatten(
        models: &[tobj::Model],
        materials: &[tobj::Material],
        source: &str,
    ) -> Result<Mesh, AssetError> {
        let mut mesh = Mesh::new();
        let mut missing_normals = 0usize;

        for model in models {
            let data = &model.mesh;
            let material = data.material_id.and_then(|id| materials.get(id));
            let color = Vec3::from(material.and_then(|m| m.diffuse).unwrap_or(FALLBACK_COLOR));
            let shininess = material.and_then(|m| m.shininess).unwrap_or(0.0);

            for (i, &index) in data.indices.iter().enumerate() {
                let position = read3(&data.positions, index).ok_or_else(|| {
                    AssetError::InvalidData(format!(
                        "{source}: model '{}' position index {index} out of range",
                        model.name
                    ))
                })?;

                let normal = data
                    .normal_indices
                    .get(i)
                    .and_then(|&n| read3(&data.normals, n))
                    .unwrap_or_else(|| {
                        missing_normals += 1;
                        Vec3::from(FALLBACK_NORMAL)
                    });

                let tex_coord = data
                    .texcoord_indices
                    .get(i)
                    .and_then(|&t| read2(&data.texcoords, t))
                    .unwrap_or_else(Vec2::zeros);

                mesh.positions.push(position);
                mesh.normals.push(normal);
                mesh.texcoords.push(tex_coord);
                mesh.colors.push(color);
                mesh.shininess.push(shininess);
            }
        }

        if mesh.is_empty() {
            return Err(AssetError::InvalidData(format!("{source}: no triangles found")));
        }
        if missing_normals > 0 {
            log::warn!(
                "{}: {} vertices have no normal, shading will be approximate",
                source,
                missing_normals
            );
        }

        mesh.validate()
            .map_err(|e| AssetError::InvalidData(format!("{source}: {e}")))?;
        Ok(mesh)
    }
}

fn read3(values: &[f32], index: u32) -> Option<Vec3> {
    let start = index as usize * 3;
    values.get(start..start + 3).map(Vec3::from_column_slice)
}

fn read2(values: &[f32], index: u32) -> Option<Vec2> {
    let start = index as usize * 2;
    values.get(start..start + 2).map(Vec2::from_column_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD_OBJ: &str = "\
mtllib pad.mtl
v 0 0 0
v 1 0 0
v 1 0 1
v 0 0 1
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 1 0
usemtl metal
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    const PAD_MTL: &str = "\
newmtl metal
Kd 0.5 0.25 0.125
Ns 96
";

    #[test]
    fn test_quad_is_triangulated_with_material() {
        let mesh = ObjLoader::load_obj_from_str(QUAD_OBJ, Some(PAD_MTL)).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert!(mesh.has_texcoords());
        assert!(mesh.has_shininess());
        assert!(mesh.colors.iter().all(|c| *c == Vec3::new(0.5, 0.25, 0.125)));
        assert!(mesh.shininess.iter().all(|s| *s == 96.0));
        assert!(mesh.normals.iter().all(|n| *n == Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(mesh.texcoords[1], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_missing_normals_and_texcoords_fall_back() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = ObjLoader::load_obj_from_str(obj, None).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert!(mesh.normals.iter().all(|n| *n == Vec3::new(1.0, 0.0, 0.0)));
        assert!(mesh.texcoords.iter().all(|t| *t == Vec2::zeros()));
        assert!(mesh.colors.iter().all(|c| *c == Vec3::new(1.0, 1.0, 1.0)));
        assert!(mesh.shininess.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_empty_obj_is_rejected() {
        let err = ObjLoader::load_obj_from_str("# nothing here\n", None).unwrap_err();
        assert!(matches!(err, AssetError::InvalidData(_)));
    }

    #[test]
    fn test_missing_file_is_reported_with_path() {
        let err = ObjLoader::load_obj("does/not/exist.obj").unwrap_err();
        match err {
            AssetError::NotFound(path) => assert!(path.contains("exist.obj")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_loaded_mesh_concatenates_with_generated_mesh() {
        use crate::render::primitives::{concatenate, generate_cube};
        use crate::foundation::math::Mat4;

        let pad = ObjLoader::load_obj_from_str(QUAD_OBJ, Some(PAD_MTL)).unwrap();
        let cube = generate_cube(Vec3::zeros(), &Mat4::identity()).unwrap();

        let combined = concatenate(pad, &cube);
        assert_eq!(combined.vertex_count(), 42);
        assert!(combined.texcoords.is_empty());
        assert!(combined.validate().is_ok());
    }
}
