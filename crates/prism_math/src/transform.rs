// Transform utilities for DMat4
//
// Extends glam::DMat4 with the extra operations shapes need when moving
// between object and world space.
// Note: glam::DMat4 already provides transform_point3(), transform_vector3() and inverse()

use crate::Aabb;
use glam::{DMat4, DVec3, DVec4};

/// Extension trait for DMat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Carry an object-space normal into world space.
    ///
    /// `self` is the object's *inverse* transform; the normal is multiplied by
    /// its transpose (w forced to 0) and renormalized.
    fn normal_to_world(&self, local_normal: DVec3) -> DVec3;

    /// Transform an axis-aligned bounding box.
    /// Computes the bounding box of all 8 transformed corners.
    fn transform_aabb(&self, aabb: &Aabb) -> Aabb;
}

impl Mat4Ext for DMat4 {
    fn normal_to_world(&self, local_normal: DVec3) -> DVec3 {
        (self.transpose() * local_normal.extend(0.0))
            .truncate()
            .normalize()
    }

    fn transform_aabb(&self, aabb: &Aabb) -> Aabb {
        if aabb.is_empty() {
            return Aabb::EMPTY;
        }
        if aabb.is_unbounded() {
            return Aabb::UNIVERSE;
        }

        let min_point = aabb.min();
        let max_point = aabb.max();

        let corners = [
            DVec3::new(min_point.x, min_point.y, min_point.z),
            DVec3::new(max_point.x, min_point.y, min_point.z),
            DVec3::new(min_point.x, max_point.y, min_point.z),
            DVec3::new(max_point.x, max_point.y, min_point.z),
            DVec3::new(min_point.x, min_point.y, max_point.z),
            DVec3::new(max_point.x, min_point.y, max_point.z),
            DVec3::new(min_point.x, max_point.y, max_point.z),
            DVec3::new(max_point.x, max_point.y, max_point.z),
        ];

        let mut result_min = DVec3::splat(f64::INFINITY);
        let mut result_max = DVec3::splat(f64::NEG_INFINITY);

        for corner in corners {
            let p = self.transform_point3(corner);
            result_min = result_min.min(p);
            result_max = result_max.max(p);
        }

        Aabb::from_points(result_min, result_max)
    }
}

/// Shearing matrix: each argument moves one coordinate in proportion to another
/// (`xy` moves x in proportion to y, and so on).
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> DMat4 {
    DMat4::from_cols(
        DVec4::new(1.0, yx, zx, 0.0),
        DVec4::new(xy, 1.0, zy, 0.0),
        DVec4::new(xz, yz, 1.0, 0.0),
        DVec4::W,
    )
}

/// World-to-eye transform for an eye at `from` looking at `to`.
pub fn view_transform(from: DVec3, to: DVec3, up: DVec3) -> DMat4 {
    DMat4::look_at_rh(from, to, up)
}
