use crate::{DMat4, DVec3};

/// A ray in 3D space with an origin point and a direction vector.
///
/// Points along the ray are `origin + t * direction`. The direction is not
/// required to be unit length, and `t` is preserved when the ray is moved
/// between spaces with [`Ray::transform`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Apply a transform, treating the origin as a point and the direction
    /// as a vector.
    pub fn transform(&self, matrix: &DMat4) -> Ray {
        Ray {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}
