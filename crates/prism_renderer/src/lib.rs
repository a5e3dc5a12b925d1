//! Prism Renderer - Whitted-style CPU ray tracing.
//!
//! Traces rays against spheres, planes, triangles and groups, shading each
//! hit with Phong lighting, hard shadows from a single point light, and
//! recursive mirror reflection and refraction with Fresnel blending.
//!
//! # Example
//!
//! ```ignore
//! use prism_renderer::{render, Camera, DVec3, RenderConfig, World};
//!
//! let world = World::default_world();
//! let camera = Camera::new(320, 160, std::f64::consts::FRAC_PI_3)
//!     .with_position(DVec3::new(0.0, 1.5, -5.0), DVec3::Y, DVec3::Y);
//! render(&camera, &world, &RenderConfig::default()).save("out.png")?;
//! ```

mod bucket;
mod camera;
mod computations;
mod group;
mod intersection;
mod light;
mod material;
pub mod pattern;
mod plane;
mod renderer;
mod scene;
mod shape;
mod sphere;
mod triangle;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use computations::Computations;
pub use group::Group;
pub use intersection::{Intersection, Intersections};
pub use light::PointLight;
pub use material::Material;
pub use pattern::{Pattern, PatternFn};
pub use renderer::{
    color_to_rgba, render, render_pixel, ImageBuffer, RenderConfig, RenderError, RenderResult,
};
pub use scene::{build_scene, obj_to_group};
pub use shape::{Geometry, Shape, ShapeId};
pub use triangle::Triangle;
pub use world::{World, DEFAULT_RECURSION_DEPTH};

/// Linear RGB color. Components are nominally in [0, 1] but may exceed it
/// before output clamping.
pub type Color = prism_math::DVec3;

/// Re-export common math types from prism_math
pub use prism_math::{Aabb, DMat4, DVec3, Ray};
