//! Image rendering.
//!
//! Implements:
//! - Whitted-style shading through [`World::color_at`] with a bounce limit
//! - Optional anti-aliasing via jittered multi-sampling
//! - Parallel bucket rendering with rayon

use std::path::Path;
use std::time::Instant;

use rand::RngCore;
use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, World, DEFAULT_RECURSION_DEPTH};

/// Errors that can occur while producing output images.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer of {len} bytes does not match a {width}x{height} image")]
    BufferSize { width: u32, height: u32, len: usize },
}

/// Result type for render output.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel. One sample shoots a single ray through the pixel center
    pub samples_per_pixel: u32,
    /// Maximum reflection/refraction bounce depth
    pub max_depth: u32,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Seed for the per-bucket sample jitter
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            max_depth: DEFAULT_RECURSION_DEPTH,
            bucket_size: DEFAULT_BUCKET_SIZE,
            seed: 0,
        }
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)).round() as u8;
    let g = (255.0 * clamp_01(color.y)).round() as u8;
    let b = (255.0 * clamp_01(color.z)).round() as u8;
    [r, g, b, 255]
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel <= 1 {
        let ray = camera.ray_for_pixel(x, y);
        return world.color_at(&ray, config.max_depth);
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += world.color_at(&ray, config.max_depth);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f64
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let x = bucket.x + i as u32 % bucket.width;
            let y = bucket.y + i as u32 / bucket.width;
            self.set(x, y, *color);
        }
    }

    /// Convert to RGBA bytes (for saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Write the image to disk. The format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        let rgba = self.to_rgba();
        let len = rgba.len();

        let image = image::RgbaImage::from_raw(self.width, self.height, rgba).ok_or(
            RenderError::BufferSize {
                width: self.width,
                height: self.height,
                len,
            },
        )?;
        image.save(path)?;

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are rendered in parallel, center first. Each bucket seeds its own
/// generator from `config.seed`, so output is deterministic for a given seed.
pub fn render(camera: &Camera, world: &World, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(camera.image_width, camera.image_height, config.bucket_size);

    log::info!(
        "Rendering {}x{} ({} buckets, {} spp, depth {}) with {} objects",
        camera.image_width,
        camera.image_height,
        buckets.len(),
        config.samples_per_pixel,
        config.max_depth,
        world.objects.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, camera, world, config))
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_math::DVec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_PI_2;

    fn default_view(width: u32, height: u32) -> Camera {
        Camera::new(width, height, FRAC_PI_2).with_position(
            DVec3::new(0.0, 0.0, -5.0),
            DVec3::ZERO,
            DVec3::Y,
        )
    }

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(1.5, 0.0, -0.5)), [255, 0, 0, 255]);
        assert_eq!(color_to_rgba(Color::new(0.0, 0.5, 1.0)), [0, 128, 255, 255]);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(10, 20);
        let red = Color::new(1.0, 0.0, 0.0);
        image.set(2, 3, red);

        assert_eq!(image.get(2, 3), red);
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.to_rgba().len(), 10 * 20 * 4);
    }

    #[test]
    fn test_render_pixel_single_sample() {
        let world = World::default_world();
        let camera = default_view(11, 11);
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&camera, &world, 5, 5, &config, &mut rng);
        assert!(
            color.abs_diff_eq(Color::new(0.38066, 0.47583, 0.2855), 1e-4),
            "got {color}"
        );
    }

    #[test]
    fn test_render_pixel_multi_sample() {
        let world = World::default_world();
        let camera = default_view(11, 11);
        let config = RenderConfig {
            samples_per_pixel: 8,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        // Every sample of the center pixel lands on the sphere
        let color = render_pixel(&camera, &world, 5, 5, &config, &mut rng);
        assert!(color.length() > 0.1, "got {color}");
    }

    #[test]
    fn test_render_default_world() {
        let world = World::default_world();
        let camera = default_view(11, 11);
        let config = RenderConfig {
            bucket_size: 4,
            ..Default::default()
        };

        let image = render(&camera, &world, &config);

        assert_eq!(image.width, 11);
        assert_eq!(image.height, 11);
        assert!(image
            .get(5, 5)
            .abs_diff_eq(Color::new(0.38066, 0.47583, 0.2855), 1e-4));
        // Corners miss the sphere
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_render_is_deterministic() {
        let world = World::default_world();
        let camera = default_view(8, 8);
        let config = RenderConfig {
            samples_per_pixel: 4,
            bucket_size: 3,
            seed: 7,
            ..Default::default()
        };

        let a = render(&camera, &world, &config);
        let b = render(&camera, &world, &config);
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn test_save_png() {
        let mut image = ImageBuffer::new(4, 2);
        image.set(1, 1, Color::ONE);
        let path = std::env::temp_dir().join(format!("prism_test_{}.png", std::process::id()));

        image.save(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (4, 2));
        assert_eq!(loaded.get_pixel(1, 1).0, [255, 255, 255, 255]);
        assert_eq!(loaded.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
