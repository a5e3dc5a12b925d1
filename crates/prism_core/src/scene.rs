//! Scene description types for Prism.
//!
//! A renderer-agnostic, serde-backed description of a scene: camera, the
//! single point light, and a list of objects with their transforms and
//! materials. The renderer turns a description into a traceable world.
//!
//! # Example
//!
//! ```json
//! {
//!   "camera": { "width": 320, "height": 160, "fov": 60.0,
//!               "from": [0, 1.5, -5], "to": [0, 1, 0], "up": [0, 1, 0] },
//!   "light": { "position": [-10, 10, -10], "intensity": [1, 1, 1] },
//!   "objects": [
//!     { "type": "plane",
//!       "material": { "pattern": { "type": "checker", "a": [1, 1, 1], "b": [0, 0, 0] } } },
//!     { "type": "sphere", "transform": [ { "translate": [0, 1, 0] } ],
//!       "material": { "color": [0.1, 1, 0.5], "reflective": 0.3 } }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use prism_math::{shearing, DMat4, DVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::obj::ObjError;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mesh error: {0}")]
    Obj(#[from] ObjError),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A complete scene: what to look at, from where, under which light.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,

    #[serde(default)]
    pub light: LightDescription,

    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// Parse a scene from JSON text.
    pub fn from_json(source: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Total number of objects, counting group members.
    pub fn object_count(&self) -> usize {
        fn count(objects: &[ObjectDescription]) -> usize {
            objects
                .iter()
                .map(|o| match &o.shape {
                    ShapeDescription::Group { children } => 1 + count(children),
                    _ => 1,
                })
                .sum()
        }
        count(&self.objects)
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let scene = SceneDescription::from_json(&source)?;

    log::info!(
        "Loaded scene {} with {} objects",
        path.display(),
        scene.object_count()
    );

    Ok(scene)
}

/// Camera placement and image size.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub width: u32,
    pub height: u32,
    /// Field of view in degrees, across the wider image dimension
    pub fov: f64,
    pub from: DVec3,
    pub to: DVec3,
    pub up: DVec3,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            fov: 60.0,
            from: DVec3::new(0.0, 1.5, -5.0),
            to: DVec3::new(0.0, 1.0, 0.0),
            up: DVec3::Y,
        }
    }
}

/// The scene's single point light.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LightDescription {
    pub position: DVec3,
    pub intensity: DVec3,
}

impl Default for LightDescription {
    fn default() -> Self {
        Self {
            position: DVec3::new(-10.0, 10.0, -10.0),
            intensity: DVec3::ONE,
        }
    }
}

/// One object in the scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,

    /// Transform steps, applied in the order listed
    #[serde(default)]
    pub transform: Vec<TransformOp>,

    #[serde(default)]
    pub material: MaterialDescription,
}

/// The geometry of an object.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere,
    /// Sphere with a transparent, glass-like default material
    GlassSphere,
    Plane,
    Triangle {
        p1: DVec3,
        p2: DVec3,
        p3: DVec3,
    },
    /// Triangle mesh loaded from an OBJ file; relative paths resolve against
    /// the scene file's directory
    Obj {
        path: PathBuf,
    },
    Group {
        children: Vec<ObjectDescription>,
    },
}

/// Material overrides. Unset fields keep the renderer's material defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    pub color: Option<DVec3>,
    pub ambient: Option<f64>,
    pub diffuse: Option<f64>,
    pub specular: Option<f64>,
    pub shininess: Option<f64>,
    pub reflective: Option<f64>,
    pub transparency: Option<f64>,
    pub refractive_index: Option<f64>,
    pub pattern: Option<PatternDescription>,
}

impl MaterialDescription {
    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.ambient.is_none()
            && self.diffuse.is_none()
            && self.specular.is_none()
            && self.shininess.is_none()
            && self.reflective.is_none()
            && self.transparency.is_none()
            && self.refractive_index.is_none()
            && self.pattern.is_none()
    }
}

/// A two-color procedural pattern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternDescription {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub a: DVec3,
    /// Unused by `solid`
    #[serde(default)]
    pub b: DVec3,
    #[serde(default)]
    pub transform: Vec<TransformOp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Flat color `a`
    Solid,
    Stripe,
    Gradient,
    Ring,
    Checker,
}

/// One step of an object transform. Rotations are in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    Translate(DVec3),
    Scale(DVec3),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    /// xy, xz, yx, yz, zx, zy
    Shear([f64; 6]),
}

impl TransformOp {
    /// The matrix for this single step.
    pub fn matrix(&self) -> DMat4 {
        match *self {
            TransformOp::Translate(v) => DMat4::from_translation(v),
            TransformOp::Scale(v) => DMat4::from_scale(v),
            TransformOp::RotateX(deg) => DMat4::from_rotation_x(deg.to_radians()),
            TransformOp::RotateY(deg) => DMat4::from_rotation_y(deg.to_radians()),
            TransformOp::RotateZ(deg) => DMat4::from_rotation_z(deg.to_radians()),
            TransformOp::Shear([xy, xz, yx, yz, zx, zy]) => shearing(xy, xz, yx, yz, zx, zy),
        }
    }
}

/// Chain transform steps; the first step listed is applied first.
pub fn compose(ops: &[TransformOp]) -> DMat4 {
    ops.iter()
        .fold(DMat4::IDENTITY, |acc, op| op.matrix() * acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_scene() {
        let json = r#"{
            "camera": { "width": 32, "height": 16, "fov": 90.0,
                        "from": [0, 0, -5], "to": [0, 0, 0], "up": [0, 1, 0] },
            "light": { "position": [-10, 10, -10], "intensity": [1, 1, 1] },
            "objects": [
                { "type": "plane",
                  "material": { "pattern": { "type": "checker", "a": [1, 1, 1], "b": [0, 0, 0],
                                             "transform": [ { "scale": [0.5, 0.5, 0.5] } ] } } },
                { "type": "sphere",
                  "transform": [ { "scale": [2, 2, 2] }, { "translate": [0, 1, 0] } ],
                  "material": { "color": [0.1, 1, 0.5], "reflective": 0.3 } },
                { "type": "group", "children": [
                    { "type": "glass_sphere" },
                    { "type": "triangle", "p1": [0, 1, 0], "p2": [-1, 0, 0], "p3": [1, 0, 0] }
                ] }
            ]
        }"#;

        let scene = SceneDescription::from_json(json).unwrap();

        assert_eq!(scene.camera.width, 32);
        assert_eq!(scene.camera.from, DVec3::new(0.0, 0.0, -5.0));
        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.object_count(), 5);

        let plane = &scene.objects[0];
        assert!(matches!(plane.shape, ShapeDescription::Plane));
        let pattern = plane.material.pattern.as_ref().unwrap();
        assert_eq!(pattern.kind, PatternKind::Checker);

        let sphere = &scene.objects[1];
        assert_eq!(sphere.material.reflective, Some(0.3));
        assert_eq!(sphere.material.ambient, None);
        assert_eq!(sphere.transform.len(), 2);
        assert!(!sphere.material.is_empty());

        let ShapeDescription::Group { children } = &scene.objects[2].shape else {
            panic!("expected a group");
        };
        assert!(children[0].material.is_empty());
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let scene = SceneDescription::from_json("{}").unwrap();

        assert!(scene.objects.is_empty());
        assert_eq!(scene.light.position, DVec3::new(-10.0, 10.0, -10.0));
        assert_eq!(scene.camera.width, 400);
    }

    #[test]
    fn test_solid_pattern_needs_one_color() {
        let pattern: PatternDescription =
            serde_json::from_str(r#"{ "type": "solid", "a": [0.5, 0.5, 0.5] }"#).unwrap();

        assert_eq!(pattern.kind, PatternKind::Solid);
        assert_eq!(pattern.a, DVec3::splat(0.5));
        assert_eq!(pattern.b, DVec3::ZERO);
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let result = SceneDescription::from_json(r#"{ "objects": [ { "type": "torus" } ] }"#);
        assert!(matches!(result, Err(SceneError::Json(_))));
    }

    #[test]
    fn test_compose_applies_in_listed_order() {
        let ops = vec![
            TransformOp::RotateX(90.0),
            TransformOp::Scale(DVec3::splat(5.0)),
            TransformOp::Translate(DVec3::new(10.0, 5.0, 7.0)),
        ];
        let p = compose(&ops).transform_point3(DVec3::new(1.0, 0.0, 1.0));

        assert!(p.abs_diff_eq(DVec3::new(15.0, 0.0, 7.0), 1e-9), "got {p}");
    }

    #[test]
    fn test_missing_scene_file() {
        let result = load_scene("no/such/scene.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }
}
