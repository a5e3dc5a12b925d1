//! Point light source.

use crate::Color;
use prism_math::DVec3;

/// An omnidirectional light with no size, radiating from a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub intensity: Color,
}

impl PointLight {
    /// Create a new point light.
    pub fn new(position: DVec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Default for PointLight {
    /// White light at the origin.
    fn default() -> Self {
        Self::new(DVec3::ZERO, Color::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_has_position_and_intensity() {
        let light = PointLight::new(DVec3::ZERO, Color::new(1.0, 1.0, 1.0));

        assert_eq!(light.position, DVec3::ZERO);
        assert_eq!(light.intensity, Color::ONE);
    }
}
