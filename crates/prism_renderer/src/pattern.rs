//! Procedural color patterns.
//!
//! A pattern is a pure function from a point in pattern space to a color.
//! [`Pattern`] wraps one with its own transform so it can be scaled, rotated
//! or moved independently of the object it is painted on.

use std::fmt;
use std::sync::Arc;

use crate::{Color, Shape};
use prism_math::{DMat4, DVec3};

/// Trait for color functions evaluated in pattern space.
pub trait PatternFn: Send + Sync + fmt::Debug {
    /// Color at a point already expressed in pattern space.
    fn pattern_at(&self, point: DVec3) -> Color;
}

/// Parity of a floored coordinate, safe for negative values.
#[inline]
fn is_even(x: f64) -> bool {
    (x.floor() as i64).rem_euclid(2) == 0
}

/// A single flat color.
#[derive(Debug, Clone, Copy)]
pub struct Solid(pub Color);

impl PatternFn for Solid {
    fn pattern_at(&self, _point: DVec3) -> Color {
        self.0
    }
}

/// Alternating bands along x, one unit wide.
#[derive(Debug, Clone, Copy)]
pub struct Stripe {
    pub a: Color,
    pub b: Color,
}

impl PatternFn for Stripe {
    fn pattern_at(&self, point: DVec3) -> Color {
        if is_even(point.x) {
            self.a
        } else {
            self.b
        }
    }
}

/// Linear blend from `a` to `b` across each unit of x.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    pub a: Color,
    pub b: Color,
}

impl PatternFn for Gradient {
    fn pattern_at(&self, point: DVec3) -> Color {
        let fraction = point.x - point.x.floor();
        self.a + (self.b - self.a) * fraction
    }
}

/// Concentric rings in the xz plane.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    pub a: Color,
    pub b: Color,
}

impl PatternFn for Ring {
    fn pattern_at(&self, point: DVec3) -> Color {
        if is_even((point.x * point.x + point.z * point.z).sqrt()) {
            self.a
        } else {
            self.b
        }
    }
}

/// Three-dimensional checkerboard of unit cubes.
#[derive(Debug, Clone, Copy)]
pub struct Checker {
    pub a: Color,
    pub b: Color,
}

impl PatternFn for Checker {
    fn pattern_at(&self, point: DVec3) -> Color {
        if is_even(point.x.floor() + point.y.floor() + point.z.floor()) {
            self.a
        } else {
            self.b
        }
    }
}

/// A shareable pattern with its own transform.
#[derive(Clone, Debug)]
pub struct Pattern {
    inner: Arc<dyn PatternFn>,
    transform: DMat4,
    inverse: DMat4,
}

impl Pattern {
    /// Wrap a pattern function with an identity transform.
    pub fn new(pattern: impl PatternFn + 'static) -> Self {
        Self {
            inner: Arc::new(pattern),
            transform: DMat4::IDENTITY,
            inverse: DMat4::IDENTITY,
        }
    }

    /// Set the object-to-pattern transform.
    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.transform = transform;
        self.inverse = transform.inverse();
        self
    }

    pub fn transform(&self) -> DMat4 {
        self.transform
    }

    /// Color of the pattern on `object` at a world-space point.
    pub fn color_at(&self, object: &Shape, world_point: DVec3) -> Color {
        self.color_at_object_point(object.world_to_object(world_point))
    }

    /// Color of the pattern at a point already in the object's space.
    pub fn color_at_object_point(&self, object_point: DVec3) -> Color {
        self.inner
            .pattern_at(self.inverse.transform_point3(object_point))
    }
}
