//! Unit sphere primitive, centered at the object-space origin.

use prism_math::{Aabb, DVec3, Ray};

/// Both roots of the ray-sphere quadratic in object space, nearest first.
///
/// A tangent ray yields the same root twice.
pub(crate) fn local_intersect(ray: &Ray) -> Option<(f64, f64)> {
    let a = ray.direction.length_squared();
    // Degenerate direction, e.g. from a singular transform. Huge scales
    // shrink object-space directions, so only exact zero counts.
    if a == 0.0 {
        return None;
    }

    let b = 2.0 * ray.direction.dot(ray.origin);
    let c = ray.origin.length_squared() - 1.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let t1 = (-b - sqrtd) / (2.0 * a);
    let t2 = (-b + sqrtd) / (2.0 * a);

    Some((t1, t2))
}

/// Object-space normal at a point on the unit sphere.
pub(crate) fn local_normal_at(point: DVec3) -> DVec3 {
    point
}

/// Object-space bounds.
pub(crate) fn bounds() -> Aabb {
    Aabb::from_points(DVec3::splat(-1.0), DVec3::splat(1.0))
}
