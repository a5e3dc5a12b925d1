// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod aabb;
mod interval;
mod ray;
mod transform;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;
pub use transform::{shearing, view_transform, Mat4Ext};

/// Offset used to lift shading points off a surface and to reject
/// rays that run parallel to planar geometry.
pub const EPSILON: f64 = 1e-5;

/// Reflect `v` about the normal `n`.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - n * 2.0 * v.dot(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_at_45_degrees() {
        let v = DVec3::new(1.0, -1.0, 0.0);
        let n = DVec3::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(v, n), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_straight_down() {
        let v = DVec3::new(0.0, -1.0, 0.0);
        let n = DVec3::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(v, n), DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_off_slanted_surface() {
        let half = 2.0_f64.sqrt() / 2.0;
        let v = DVec3::new(1.0, -1.0, 0.0);
        let n = DVec3::new(half, half, 0.0);
        let r = reflect(v, n);
        assert!(r.abs_diff_eq(DVec3::new(1.0, 0.0, 0.0), 1e-10), "got {r}");
    }
}
