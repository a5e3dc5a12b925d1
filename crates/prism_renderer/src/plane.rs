//! Infinite plane primitive: the object-space xz plane.

use prism_math::{DVec3, Ray, EPSILON};

/// Distance to the plane, or `None` for a ray parallel to it.
///
/// A ray lying inside the plane is treated as parallel.
pub(crate) fn local_intersect(ray: &Ray) -> Option<f64> {
    if ray.direction.y.abs() < EPSILON {
        return None;
    }
    Some(-ray.origin.y / ray.direction.y)
}

/// The plane's normal is constant everywhere.
pub(crate) fn local_normal_at(_point: DVec3) -> DVec3 {
    DVec3::Y
}
