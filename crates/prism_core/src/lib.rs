//! Prism Core - scene data for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry data**: `Mesh`, plus OBJ loading into named groups
//! - **Scene descriptions**: JSON scene files describing camera, light and objects
//!
//! # Example
//!
//! ```ignore
//! use prism_core::scene::load_scene;
//!
//! let scene = load_scene("scenes/demo.json")?;
//! println!("Loaded {} objects", scene.object_count());
//! ```

pub mod mesh;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use mesh::Mesh;
pub use obj::{load_obj, parse_obj, ObjError, ObjGroup, ObjResult};
pub use scene::{load_scene, SceneDescription, SceneError, SceneResult};
