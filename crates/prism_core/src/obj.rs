//! Wavefront OBJ loading.
//!
//! Faces are triangulated on load (polygons are fanned from their first
//! vertex) and grouped by the file's `g`/`o` statements.

use std::path::Path;

use prism_math::DVec3;
use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur while loading OBJ data.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("Failed to load OBJ data: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("No faces found in OBJ data")]
    NoGeometry,
}

/// Result type for OBJ loading.
pub type ObjResult<T> = Result<T, ObjError>;

/// One named group of faces from an OBJ file.
#[derive(Clone, Debug)]
pub struct ObjGroup {
    /// Group name as written in the file
    pub name: String,

    /// Triangulated geometry of the group
    pub mesh: Mesh,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Load an OBJ file from disk.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<Vec<ObjGroup>> {
    let path = path.as_ref();
    log::info!("Loading OBJ file {}", path.display());

    let (models, _materials) = tobj::load_obj(path, &load_options())?;
    groups_from_models(models)
}

/// Parse OBJ data held in memory.
///
/// `mtllib` references are ignored; materials come from the scene description.
pub fn parse_obj(source: &str) -> ObjResult<Vec<ObjGroup>> {
    let mut reader = source.as_bytes();
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
        Ok((Vec::new(), Default::default()))
    })?;
    groups_from_models(models)
}

fn groups_from_models(models: Vec<tobj::Model>) -> ObjResult<Vec<ObjGroup>> {
    let groups: Vec<ObjGroup> = models
        .into_iter()
        .filter_map(|model| {
            if model.mesh.indices.is_empty() {
                log::debug!("OBJ group {} has no faces, skipping", model.name);
                return None;
            }

            let positions = model
                .mesh
                .positions
                .chunks_exact(3)
                .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
                .collect();

            Some(ObjGroup {
                name: model.name,
                mesh: Mesh::new(positions, model.mesh.indices),
            })
        })
        .collect();

    if groups.is_empty() {
        return Err(ObjError::NoGeometry);
    }

    log::info!(
        "Loaded {} OBJ groups, {} triangles",
        groups.len(),
        groups.iter().map(|g| g.mesh.triangle_count()).sum::<usize>()
    );

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLES: &str = "
v -1 1 0
v -1 0 0
v 1 0 0
v 1 1 0

f 1 2 3
f 1 3 4
";

    #[test]
    fn test_parse_triangle_faces() {
        let groups = parse_obj(TRIANGLES).unwrap();
        let triangles: Vec<_> = groups.iter().flat_map(|g| g.mesh.triangles()).collect();

        assert_eq!(triangles.len(), 2);
        assert_eq!(
            triangles[0],
            [
                DVec3::new(-1.0, 1.0, 0.0),
                DVec3::new(-1.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0)
            ]
        );
        assert_eq!(
            triangles[1],
            [
                DVec3::new(-1.0, 1.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_polygons_are_fanned() {
        let source = "
v -1 1 0
v -1 0 0
v 1 0 0
v 1 1 0
v 0 2 0

f 1 2 3 4 5
";
        let groups = parse_obj(source).unwrap();
        let triangles: Vec<_> = groups.iter().flat_map(|g| g.mesh.triangles()).collect();

        assert_eq!(triangles.len(), 3);
        // Every triangle of the fan shares the polygon's first vertex
        for tri in &triangles {
            assert!(tri.contains(&DVec3::new(-1.0, 1.0, 0.0)));
        }
        assert!(triangles[2].contains(&DVec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_named_groups() {
        let source = "
v -1 1 0
v -1 0 0
v 1 0 0
v 1 1 0

g FirstGroup
f 1 2 3
g SecondGroup
f 1 3 4
";
        let groups = parse_obj(source).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "FirstGroup");
        assert_eq!(groups[1].name, "SecondGroup");
        assert_eq!(groups[0].mesh.triangle_count(), 1);
        assert_eq!(groups[1].mesh.triangle_count(), 1);
    }

    #[test]
    fn test_vertices_only_is_an_error() {
        let result = parse_obj("v 1 2 3\nv 4 5 6\n");
        assert!(matches!(result, Err(ObjError::NoGeometry)));
    }

    #[test]
    fn test_missing_file() {
        let result = load_obj("does/not/exist.obj");
        assert!(matches!(result, Err(ObjError::Load(_))));
    }
}
