//! Per-hit shading data.

use crate::{Intersection, Shape};
use prism_math::{reflect, DVec3, Ray, EPSILON};

/// Everything the shader needs to know about one hit.
#[derive(Debug, Clone, Copy)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a Shape,
    /// World-space hit point
    pub point: DVec3,
    /// `point` nudged along the normal, used as the origin of shadow and reflection rays
    pub over_point: DVec3,
    /// `point` nudged against the normal, used as the origin of refraction rays
    pub under_point: DVec3,
    /// Unit vector from the hit back toward the ray origin
    pub eye_v: DVec3,
    /// Unit surface normal, flipped to face the eye
    pub normal_v: DVec3,
    pub reflect_v: DVec3,
    /// True when the ray hit the surface from inside the object
    pub inside: bool,
    /// Refractive index of the medium being exited
    pub n1: f64,
    /// Refractive index of the medium being entered
    pub n2: f64,
    /// Fresnel reflectance in [0, 1]
    pub schlick: f64,
}

impl<'a> Computations<'a> {
    /// Compute shading data for `hit`.
    ///
    /// `xs` is the full sorted intersection list that `hit` belongs to. If the
    /// hit is not in it, both refractive indices stay at 1.0.
    pub fn prepare(hit: &Intersection<'a>, ray: &Ray, xs: &[Intersection<'a>]) -> Self {
        let point = ray.at(hit.t);
        let eye_v = -ray.direction;
        let mut normal_v = hit.object.normal_at(point);

        let inside = normal_v.dot(eye_v) < 0.0;
        if inside {
            normal_v = -normal_v;
        }

        let reflect_v = reflect(ray.direction, normal_v);
        let over_point = point + normal_v * EPSILON;
        let under_point = point - normal_v * EPSILON;
        let (n1, n2) = refractive_indices(hit, xs);

        Self {
            t: hit.t,
            object: hit.object,
            point,
            over_point,
            under_point,
            eye_v,
            normal_v,
            reflect_v,
            inside,
            n1,
            n2,
            schlick: schlick(eye_v, normal_v, n1, n2),
        }
    }
}

/// Walk the intersections up to `hit`, tracking which objects the ray is
/// inside, to find the refractive indices on either side of the surface.
fn refractive_indices(hit: &Intersection<'_>, xs: &[Intersection<'_>]) -> (f64, f64) {
    fn innermost_index(containers: &[&Shape]) -> f64 {
        containers
            .last()
            .map_or(1.0, |s| s.material.refractive_index)
    }

    let mut containers: Vec<&Shape> = Vec::new();

    for i in xs {
        let is_hit = i == hit;
        let n1 = if is_hit { innermost_index(&containers) } else { 1.0 };

        match containers.iter().position(|s| s.id() == i.object.id()) {
            Some(pos) => {
                containers.remove(pos);
            }
            None => containers.push(i.object),
        }

        if is_hit {
            return (n1, innermost_index(&containers));
        }
    }

    (1.0, 1.0)
}

/// Schlick's approximation of the Fresnel reflectance.
///
/// Returns 1.0 under total internal reflection.
fn schlick(eye_v: DVec3, normal_v: DVec3, n1: f64, n2: f64) -> f64 {
    let mut cos = eye_v.dot(normal_v);

    if n1 > n2 {
        let n = n1 / n2;
        let sin2_t = n * n * (1.0 - cos * cos);
        if sin2_t > 1.0 {
            return 1.0;
        }
        cos = (1.0 - sin2_t).sqrt();
    }

    let r0 = ((n1 - n2) / (n1 + n2)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos).powi(5)
}
