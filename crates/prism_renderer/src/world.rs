//! The world: every object in the scene plus the light that illuminates it.
//!
//! Shading is Whitted-style recursion. A hit spawns a shadow ray toward the
//! light, plus a reflection ray and a refraction ray when the material calls
//! for them. `depth` counts how many more bounces may be spawned; at zero the
//! secondary contributions are black.

use crate::{Color, Computations, Intersections, Material, PointLight, Shape};
use prism_math::{DMat4, DVec3, Ray};

/// Bounce limit used when callers have no preference.
pub const DEFAULT_RECURSION_DEPTH: u32 = 5;

/// A collection of shapes lit by a single point light.
#[derive(Debug)]
pub struct World {
    pub objects: Vec<Shape>,
    pub light: PointLight,
}

impl Default for World {
    /// No objects, white light at the origin.
    fn default() -> Self {
        Self::new(Vec::new(), PointLight::default())
    }
}

impl World {
    pub fn new(objects: Vec<Shape>, light: PointLight) -> Self {
        Self { objects, light }
    }

    /// Two concentric spheres under a white light at (-10, 10, -10).
    ///
    /// The outer sphere is a unit sphere with a green-ish matte material; the
    /// inner one is half its size with the default material.
    pub fn default_world() -> Self {
        let outer = Shape::sphere().with_material(Material {
            color: Color::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Default::default()
        });
        let inner = Shape::sphere().with_transform(DMat4::from_scale(DVec3::splat(0.5)));

        Self::new(
            vec![outer, inner],
            PointLight::new(DVec3::new(-10.0, 10.0, -10.0), Color::ONE),
        )
    }

    pub fn add(&mut self, shape: Shape) {
        self.objects.push(shape);
    }

    /// All intersections of `ray` with every object, sorted by `t`.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs = Vec::new();
        for object in &self.objects {
            object.intersect_into(ray, &mut xs);
        }
        Intersections::new(xs)
    }

    /// True when something lies between `point` and the light.
    pub fn is_shadowed(&self, point: DVec3) -> bool {
        let to_light = self.light.position - point;
        let distance = to_light.length();
        let Some(direction) = to_light.try_normalize() else {
            return false;
        };

        let ray = Ray::new(point, direction);
        matches!(self.intersect(&ray).hit(), Some(hit) if hit.t < distance)
    }

    /// Color at a prepared hit: surface lighting plus reflection and refraction.
    ///
    /// Materials that both reflect and transmit blend the two by the Fresnel
    /// reflectance; otherwise the contributions are added.
    pub fn shade_hit(&self, comps: &Computations<'_>, depth: u32) -> Color {
        let material = &comps.object.material;
        let shadowed = self.is_shadowed(comps.over_point);

        let surface = material.lighting(
            comps.object,
            &self.light,
            comps.over_point,
            comps.eye_v,
            comps.normal_v,
            shadowed,
        );
        let reflected = self.reflected_color(comps, depth);
        let refracted = self.refracted_color(comps, depth);

        if material.reflective > 0.0 && material.transparency > 0.0 {
            let reflectance = comps.schlick;
            surface + reflected * reflectance + refracted * (1.0 - reflectance)
        } else {
            surface + reflected + refracted
        }
    }

    /// Contribution of the mirror-reflection ray, scaled by `reflective`.
    pub fn reflected_color(&self, comps: &Computations<'_>, depth: u32) -> Color {
        let reflective = comps.object.material.reflective;
        if depth == 0 || reflective == 0.0 {
            return Color::ZERO;
        }

        let reflect_ray = Ray::new(comps.over_point, comps.reflect_v);
        self.color_at(&reflect_ray, depth - 1) * reflective
    }

    /// Contribution of the refraction ray, scaled by `transparency`.
    ///
    /// Black under total internal reflection.
    pub fn refracted_color(&self, comps: &Computations<'_>, depth: u32) -> Color {
        let transparency = comps.object.material.transparency;
        if depth == 0 || transparency == 0.0 {
            return Color::ZERO;
        }

        // Snell's law
        let n_ratio = comps.n1 / comps.n2;
        let cos_i = comps.eye_v.dot(comps.normal_v);
        let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);
        if sin2_t > 1.0 {
            return Color::ZERO;
        }

        let cos_t = (1.0 - sin2_t).sqrt();
        let direction = comps.normal_v * (n_ratio * cos_i - cos_t) - comps.eye_v * n_ratio;
        let refract_ray = Ray::new(comps.under_point, direction);

        self.color_at(&refract_ray, depth - 1) * transparency
    }

    /// Color seen along `ray`, or black when it hits nothing.
    pub fn color_at(&self, ray: &Ray, depth: u32) -> Color {
        let xs = self.intersect(ray);
        match xs.hit() {
            Some(hit) => {
                let comps = hit.prepare_computations(ray, &xs);
                self.shade_hit(&comps, depth)
            }
            None => Color::ZERO,
        }
    }
}
