//! Build a traceable world from a scene description.

use std::path::Path;

use prism_core::scene::{
    compose, MaterialDescription, ObjectDescription, PatternDescription, PatternKind,
    ShapeDescription,
};
use prism_core::{load_obj, ObjGroup, SceneDescription, SceneResult};

use crate::pattern::{Checker, Gradient, Ring, Solid, Stripe};
use crate::{Camera, Material, Pattern, PointLight, Shape, World};

/// Build the world and camera for a scene.
///
/// OBJ paths in the description are resolved against `base_dir`.
pub fn build_scene(scene: &SceneDescription, base_dir: &Path) -> SceneResult<(World, Camera)> {
    let objects = scene
        .objects
        .iter()
        .map(|object| build_object(object, base_dir))
        .collect::<SceneResult<Vec<_>>>()?;

    let light = PointLight::new(scene.light.position, scene.light.intensity);
    let world = World::new(objects, light);

    let cam = &scene.camera;
    let camera = Camera::new(cam.width, cam.height, cam.fov.to_radians())
        .with_position(cam.from, cam.to, cam.up);

    log::info!(
        "Built world with {} top-level objects, camera {}x{}",
        world.objects.len(),
        camera.image_width,
        camera.image_height
    );

    Ok((world, camera))
}

fn build_object(object: &ObjectDescription, base_dir: &Path) -> SceneResult<Shape> {
    let mut shape = match &object.shape {
        ShapeDescription::Sphere => Shape::sphere(),
        ShapeDescription::GlassSphere => Shape::glass_sphere(),
        ShapeDescription::Plane => Shape::plane(),
        ShapeDescription::Triangle { p1, p2, p3 } => Shape::triangle(*p1, *p2, *p3),
        ShapeDescription::Obj { path } => {
            let groups = load_obj(base_dir.join(path))?;
            obj_to_group(&groups)
        }
        ShapeDescription::Group { children } => {
            let children = children
                .iter()
                .map(|child| build_object(child, base_dir))
                .collect::<SceneResult<Vec<_>>>()?;
            Shape::group(children)
        }
    };

    shape.set_transform(compose(&object.transform));

    // Group members keep their own materials unless the group overrides them
    let is_group = matches!(object.shape, ShapeDescription::Group { .. });
    if !(is_group && object.material.is_empty()) {
        let material = build_material(&object.material, shape.material.clone());
        shape.set_material(material);
    }

    Ok(shape)
}

/// Apply the overrides in `desc` on top of `base`.
fn build_material(desc: &MaterialDescription, base: Material) -> Material {
    Material {
        color: desc.color.unwrap_or(base.color),
        ambient: desc.ambient.unwrap_or(base.ambient),
        diffuse: desc.diffuse.unwrap_or(base.diffuse),
        specular: desc.specular.unwrap_or(base.specular),
        shininess: desc.shininess.unwrap_or(base.shininess),
        reflective: desc.reflective.unwrap_or(base.reflective),
        transparency: desc.transparency.unwrap_or(base.transparency),
        refractive_index: desc.refractive_index.unwrap_or(base.refractive_index),
        pattern: desc.pattern.as_ref().map(build_pattern).or(base.pattern),
    }
}

fn build_pattern(desc: &PatternDescription) -> Pattern {
    let (a, b) = (desc.a, desc.b);
    let pattern = match desc.kind {
        PatternKind::Solid => Pattern::new(Solid(a)),
        PatternKind::Stripe => Pattern::new(Stripe { a, b }),
        PatternKind::Gradient => Pattern::new(Gradient { a, b }),
        PatternKind::Ring => Pattern::new(Ring { a, b }),
        PatternKind::Checker => Pattern::new(Checker { a, b }),
    };
    pattern.with_transform(compose(&desc.transform))
}

/// Turn loaded OBJ groups into one group shape with a subgroup per OBJ group.
pub fn obj_to_group(groups: &[ObjGroup]) -> Shape {
    let subgroups = groups
        .iter()
        .map(|group| {
            let triangles = group
                .mesh
                .triangles()
                .into_iter()
                .map(|[p1, p2, p3]| Shape::triangle(p1, p2, p3))
                .collect();
            log::debug!("OBJ group {} -> {} triangles", group.name, group.mesh.triangle_count());
            Shape::group(triangles)
        })
        .collect();

    Shape::group(subgroups)
}
