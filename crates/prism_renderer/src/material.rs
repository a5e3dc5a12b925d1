//! Surface materials and Phong lighting.

use crate::{Color, Pattern, PointLight, Shape};
use prism_math::{reflect, DVec3};

/// Surface appearance of a shape.
///
/// `reflective` and `transparency` are fractions in [0, 1] that scale the
/// secondary rays spawned at a hit. `refractive_index` is 1.0 for vacuum.
#[derive(Clone, Debug)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub reflective: f64,
    pub transparency: f64,
    pub refractive_index: f64,
    /// When set, replaces `color` as the surface color
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            pattern: None,
        }
    }
}

impl Material {
    /// Fully transparent material with the refractive index of glass.
    pub fn glass() -> Self {
        Self {
            transparency: 1.0,
            refractive_index: 1.5,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Surface color of `object` at a world-space point.
    pub fn resolve_color(&self, object: &Shape, point: DVec3) -> Color {
        match &self.pattern {
            Some(pattern) => pattern.color_at(object, point),
            None => self.color,
        }
    }

    /// Phong lighting for a single point light.
    ///
    /// Returns ambient + diffuse + specular, or only the ambient term when
    /// `in_shadow` is set.
    pub fn lighting(
        &self,
        object: &Shape,
        light: &PointLight,
        point: DVec3,
        eye_v: DVec3,
        normal_v: DVec3,
        in_shadow: bool,
    ) -> Color {
        let effective_color = self.resolve_color(object, point) * light.intensity;
        let ambient = effective_color * self.ambient;

        if in_shadow {
            return ambient;
        }

        // No direction to a light sitting on the point
        let Some(light_v) = (light.position - point).try_normalize() else {
            return ambient;
        };
        let light_dot_normal = light_v.dot(normal_v);

        // Light on the far side of the surface, or grazing it
        if light_dot_normal <= 0.0 {
            return ambient;
        }

        let diffuse = effective_color * self.diffuse * light_dot_normal;

        let reflect_v = reflect(-light_v, normal_v);
        let reflect_dot_eye = reflect_v.dot(eye_v);
        let specular = if reflect_dot_eye <= 0.0 {
            Color::ZERO
        } else {
            light.intensity * self.specular * reflect_dot_eye.powf(self.shininess)
        };

        ambient + diffuse + specular
    }
}
