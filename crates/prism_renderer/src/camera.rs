//! Pinhole camera for ray generation.
//!
//! The camera looks down its local -z axis at a canvas one unit away. The
//! canvas spans the field of view across the wider image dimension.

use prism_math::{view_transform, DMat4, DVec3, Ray};
use rand::{Rng, RngCore};

/// Camera for generating primary rays.
#[derive(Clone, Debug)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Field of view in radians
    fov: f64,
    /// View transform (world to camera)
    transform: DMat4,

    // Cached values, refreshed whenever a setting changes
    inverse: DMat4,
    origin: DVec3,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Create a camera at the origin looking down -z.
    pub fn new(image_width: u32, image_height: u32, fov: f64) -> Self {
        let mut camera = Self {
            image_width,
            image_height,
            fov,
            transform: DMat4::IDENTITY,
            inverse: DMat4::IDENTITY,
            origin: DVec3::ZERO,
            half_width: 0.0,
            half_height: 0.0,
            pixel_size: 0.0,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.initialize();
        self
    }

    /// Set the field of view in radians.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self.initialize();
        self
    }

    /// Place the camera at `from`, looking at `to`.
    pub fn with_position(self, from: DVec3, to: DVec3, up: DVec3) -> Self {
        self.with_transform(view_transform(from, to, up))
    }

    /// Set the world-to-camera transform directly.
    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.transform = transform;
        self.initialize();
        self
    }

    fn initialize(&mut self) {
        let half_view = (self.fov / 2.0).tan();
        let aspect = self.image_width as f64 / self.image_height.max(1) as f64;

        if aspect >= 1.0 {
            self.half_width = half_view;
            self.half_height = half_view / aspect;
        } else {
            self.half_width = half_view * aspect;
            self.half_height = half_view;
        }

        self.pixel_size = self.half_width * 2.0 / self.image_width.max(1) as f64;
        self.inverse = self.transform.inverse();
        self.origin = self.inverse.transform_point3(DVec3::ZERO);
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn transform(&self) -> DMat4 {
        self.transform
    }

    /// World-space size of one pixel on the canvas.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Ray through the center of pixel (px, py).
    pub fn ray_for_pixel(&self, px: u32, py: u32) -> Ray {
        self.ray_for_sample(px, py, 0.5, 0.5)
    }

    /// Ray through pixel (px, py) at offset (dx, dy) within it, each in [0, 1).
    pub fn ray_for_sample(&self, px: u32, py: u32, dx: f64, dy: f64) -> Ray {
        let x_offset = (px as f64 + dx) * self.pixel_size;
        let y_offset = (py as f64 + dy) * self.pixel_size;

        // The camera looks toward -z, so +x is to the left
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self
            .inverse
            .transform_point3(DVec3::new(world_x, world_y, -1.0));
        let direction = (pixel - self.origin).normalize();

        Ray::new(self.origin, direction)
    }

    /// Ray through a random point of pixel (px, py), for anti-aliasing.
    pub fn get_ray(&self, px: u32, py: u32, rng: &mut dyn RngCore) -> Ray {
        self.ray_for_sample(px, py, rng.gen::<f64>(), rng.gen::<f64>())
    }
}
