//! Triangle mesh geometry for Prism scenes.
//!
//! A renderer-agnostic mesh representation populated from OBJ files and
//! turned into triangle shapes by the renderer.

use prism_math::{Aabb, DVec3};

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one DVec3 per vertex)
    pub positions: Vec<DVec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box
    pub bounds: Aabb,
}

impl Mesh {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<DVec3>, indices: Vec<u32>) -> Self {
        let bounds = Self::compute_bounds(&positions);
        Self {
            positions,
            indices,
            bounds,
        }
    }

    /// Compute axis-aligned bounding box from positions.
    fn compute_bounds(positions: &[DVec3]) -> Aabb {
        if positions.is_empty() {
            return Aabb::EMPTY;
        }

        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);

        for pos in positions {
            min = min.min(*pos);
            max = max.max(*pos);
        }

        Aabb::from_points(min, max)
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Extract triangle corners as `[v0, v1, v2]` triplets.
    ///
    /// Triangles referencing missing vertices and triangles with no area are
    /// skipped, since neither can be intersected meaningfully.
    pub fn triangles(&self) -> Vec<[DVec3; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks_exact(3) {
            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            // Bounds check
            let (Some(&p0), Some(&p1), Some(&p2)) = (
                self.positions.get(i0),
                self.positions.get(i1),
                self.positions.get(i2),
            ) else {
                log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    i0,
                    i1,
                    i2,
                    self.positions.len()
                );
                continue;
            };

            if (p1 - p0).cross(p2 - p0).length_squared() == 0.0 {
                log::debug!("Skipping degenerate triangle [{}, {}, {}]", i0, i1, i2);
                continue;
            }

            triangles.push([p0, p1, p2]);
        }

        triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let positions = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(positions, vec![0, 1, 2]);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_bounds_computation() {
        let positions = vec![
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(0.0, 0.0, 0.0),
        ];
        let mesh = Mesh::new(positions, vec![0, 1, 2]);

        assert_eq!(mesh.bounds.min(), DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(mesh.bounds.max(), DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_triangles_skips_bad_faces() {
        let positions = vec![
            DVec3::new(0.0, 0.0, 0.0), // v0
            DVec3::new(1.0, 0.0, 0.0), // v1
            DVec3::new(0.0, 1.0, 0.0), // v2
            DVec3::new(2.0, 0.0, 0.0), // v3, collinear with v0 and v1
        ];
        // Valid, out of range, degenerate
        let indices = vec![0, 1, 2, 0, 1, 9, 0, 1, 3];
        let mesh = Mesh::new(positions.clone(), indices);

        let triangles = mesh.triangles();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0], [positions[0], positions[1], positions[2]]);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new(Vec::new(), Vec::new());
        assert!(mesh.bounds.is_empty());
        assert!(mesh.triangles().is_empty());
    }
}
