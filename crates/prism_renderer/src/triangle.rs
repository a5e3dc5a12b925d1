//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use prism_math::{Aabb, DVec3, Ray};

/// Parallel-ray cutoff for the determinant, relative to the edge and
/// direction lengths it is built from.
const PARALLEL_TOLERANCE: f64 = 1e-12;

/// A flat triangle in object space.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub p1: DVec3,
    pub p2: DVec3,
    pub p3: DVec3,
    /// Pre-computed edges from `p1`
    e1: DVec3,
    e2: DVec3,
    /// Pre-computed face normal (unit length)
    normal: DVec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        let e1 = p2 - p1;
        let e2 = p3 - p1;
        let normal = e2.cross(e1).normalize_or_zero();

        Self {
            p1,
            p2,
            p3,
            e1,
            e2,
            normal,
        }
    }

    pub fn e1(&self) -> DVec3 {
        self.e1
    }

    pub fn e2(&self) -> DVec3 {
        self.e2
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Object-space bounds, padded so flat triangles keep some thickness.
    pub fn bounds(&self) -> Aabb {
        let min = self.p1.min(self.p2).min(self.p3);
        let max = self.p1.max(self.p2).max(self.p3);
        Aabb::from_points(min, max)
    }

    /// Möller-Trumbore ray-triangle intersection in object space.
    pub(crate) fn local_intersect(&self, ray: &Ray) -> Option<f64> {
        let dir_cross_e2 = ray.direction.cross(self.e2);
        let det = self.e1.dot(dir_cross_e2);

        // Ray is parallel to triangle
        let scale = self.e1.length() * self.e2.length() * ray.direction.length();
        if det.abs() <= PARALLEL_TOLERANCE * scale {
            return None;
        }

        let f = 1.0 / det;
        let p1_to_origin = ray.origin - self.p1;
        let u = f * p1_to_origin.dot(dir_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let origin_cross_e1 = p1_to_origin.cross(self.e1);
        let v = f * ray.direction.dot(origin_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        Some(f * self.e2.dot(origin_cross_e1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Triangle {
        Triangle::new(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_construction_precomputes_edges_and_normal() {
        let t = tri();

        assert_eq!(t.e1(), DVec3::new(-1.0, -1.0, 0.0));
        assert_eq!(t.e2(), DVec3::new(1.0, -1.0, 0.0));
        assert_eq!(t.normal(), DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_parallel_ray_misses() {
        let r = Ray::new(DVec3::new(0.0, -1.0, -2.0), DVec3::Y);
        assert_eq!(tri().local_intersect(&r), None);
    }

    #[test]
    fn test_ray_misses_each_edge() {
        let t = tri();
        for origin in [
            DVec3::new(1.0, 1.0, -2.0),
            DVec3::new(-1.0, 1.0, -2.0),
            DVec3::new(0.0, -1.0, -2.0),
        ] {
            let r = Ray::new(origin, DVec3::Z);
            assert_eq!(t.local_intersect(&r), None, "origin {origin}");
        }
    }

    #[test]
    fn test_ray_strikes_triangle() {
        let r = Ray::new(DVec3::new(0.0, 0.5, -2.0), DVec3::Z);
        let t = tri().local_intersect(&r).unwrap();
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_millimetre_triangle_is_hit() {
        let k = 2e-3;
        let small = Triangle::new(
            DVec3::new(0.0, k, 0.0),
            DVec3::new(-k, 0.0, 0.0),
            DVec3::new(k, 0.0, 0.0),
        );
        let r = Ray::new(DVec3::new(0.0, k / 2.0, -2.0), DVec3::Z);

        let t = small.local_intersect(&r).unwrap();
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_ray_misses_small_triangle() {
        let k = 2e-3;
        let small = Triangle::new(
            DVec3::new(0.0, k, 0.0),
            DVec3::new(-k, 0.0, 0.0),
            DVec3::new(k, 0.0, 0.0),
        );
        let r = Ray::new(DVec3::new(0.0, -k, -2.0), DVec3::Y);
        assert_eq!(small.local_intersect(&r), None);
    }

    #[test]
    fn test_bounds() {
        let b = tri().bounds();
        assert_eq!(b.min().x, -1.0);
        assert_eq!(b.max().y, 1.0);
        assert!(b.z.size() > 0.0);
    }
}
