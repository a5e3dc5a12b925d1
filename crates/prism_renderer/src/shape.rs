//! Scene objects.
//!
//! A [`Shape`] pairs a geometry with a material and a transform. Transforms
//! are baked: every shape stores its full object-to-world matrix and its
//! inverse, already composed with the transforms of any enclosing groups.
//! Shapes never point back at their parent.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::group::Group;
use crate::triangle::Triangle;
use crate::{plane, sphere, Intersection, Material};
use prism_math::{Aabb, DMat4, DVec3, Mat4Ext, Ray};

static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(0);

/// Opaque identity of a shape.
///
/// Two shapes compare equal by id only when they are the same object, even if
/// their geometry, transform and material match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(usize);

impl ShapeId {
    fn next() -> Self {
        Self(NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The kinds of geometry a shape can hold.
#[derive(Debug)]
pub enum Geometry {
    /// Unit sphere at the origin
    Sphere,
    /// The xz plane
    Plane,
    Triangle(Triangle),
    Group(Group),
}

/// A traceable object.
#[derive(Debug)]
pub struct Shape {
    id: ShapeId,
    transform: DMat4,
    inverse: DMat4,
    pub material: Material,
    geometry: Geometry,
}

impl Shape {
    fn new(geometry: Geometry) -> Self {
        Self {
            id: ShapeId::next(),
            transform: DMat4::IDENTITY,
            inverse: DMat4::IDENTITY,
            material: Material::default(),
            geometry,
        }
    }

    /// Unit sphere with the default material.
    pub fn sphere() -> Self {
        Self::new(Geometry::Sphere)
    }

    /// Unit sphere with a clear glass material.
    pub fn glass_sphere() -> Self {
        Self::sphere().with_material(Material::glass())
    }

    /// The xz plane with the default material.
    pub fn plane() -> Self {
        Self::new(Geometry::Plane)
    }

    pub fn triangle(p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        Self::new(Geometry::Triangle(Triangle::new(p1, p2, p3)))
    }

    /// Group the given shapes. Their current transforms become relative to the group.
    pub fn group(children: Vec<Shape>) -> Self {
        Self::new(Geometry::Group(Group::new(children)))
    }

    pub fn with_transform(mut self, transform: DMat4) -> Self {
        self.set_transform(transform);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.set_material(material);
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Object-to-world transform.
    pub fn transform(&self) -> DMat4 {
        self.transform
    }

    /// World-to-object transform.
    pub fn inverse(&self) -> DMat4 {
        self.inverse
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Members of a group; empty for every other shape.
    pub fn children(&self) -> &[Shape] {
        match &self.geometry {
            Geometry::Group(group) => group.children(),
            _ => &[],
        }
    }

    /// Replace this shape's transform.
    ///
    /// For a group, the change is propagated to all descendants so their
    /// stored transforms stay composed with it.
    pub fn set_transform(&mut self, transform: DMat4) {
        let delta = transform * self.inverse;
        self.transform = transform;
        self.inverse = transform.inverse();

        if let Geometry::Group(group) = &mut self.geometry {
            for child in group.children_mut() {
                child.apply_parent(&delta);
            }
            group.update_bounds();
        }
    }

    /// Set the material. A group hands a copy to every descendant.
    pub fn set_material(&mut self, material: Material) {
        if let Geometry::Group(group) = &mut self.geometry {
            for child in group.children_mut() {
                child.set_material(material.clone());
            }
        }
        self.material = material;
    }

    /// Add a shape to a group, placing it inside the group's transform.
    pub fn add_child(&mut self, mut child: Shape) {
        match &mut self.geometry {
            Geometry::Group(group) => {
                child.apply_parent(&self.transform);
                group.push(child);
            }
            _ => log::warn!("Shape {:?} is not a group, dropping child", self.id),
        }
    }

    fn apply_parent(&mut self, parent: &DMat4) {
        self.transform = *parent * self.transform;
        self.inverse = self.transform.inverse();

        if let Geometry::Group(group) = &mut self.geometry {
            for child in group.children_mut() {
                child.apply_parent(parent);
            }
            group.update_bounds();
        }
    }

    /// Convert a world-space point into this shape's object space.
    pub fn world_to_object(&self, point: DVec3) -> DVec3 {
        self.inverse.transform_point3(point)
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Aabb {
        match &self.geometry {
            Geometry::Sphere => self.transform.transform_aabb(&sphere::bounds()),
            Geometry::Plane => Aabb::UNIVERSE,
            Geometry::Triangle(triangle) => self.transform.transform_aabb(&triangle.bounds()),
            Geometry::Group(group) => group.bounds(),
        }
    }

    /// All intersections of a world-space ray with this shape, in no
    /// particular order. Hits behind the ray origin are included.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        let mut out = Vec::new();
        self.intersect_into(ray, &mut out);
        out
    }

    pub(crate) fn intersect_into<'a>(&'a self, ray: &Ray, out: &mut Vec<Intersection<'a>>) {
        let local = match &self.geometry {
            Geometry::Group(group) => return group.intersect_into(ray, out),
            _ => ray.transform(&self.inverse),
        };

        match &self.geometry {
            Geometry::Sphere => {
                if let Some((t1, t2)) = sphere::local_intersect(&local) {
                    out.push(Intersection::new(t1, self));
                    out.push(Intersection::new(t2, self));
                }
            }
            Geometry::Plane => {
                if let Some(t) = plane::local_intersect(&local) {
                    out.push(Intersection::new(t, self));
                }
            }
            Geometry::Triangle(triangle) => {
                if let Some(t) = triangle.local_intersect(&local) {
                    out.push(Intersection::new(t, self));
                }
            }
            Geometry::Group(_) => {}
        }
    }

    /// Unit surface normal at a world-space point.
    ///
    /// Groups have no surface; asking one for a normal logs a warning and
    /// returns the zero vector.
    pub fn normal_at(&self, world_point: DVec3) -> DVec3 {
        let local_point = self.world_to_object(world_point);
        let local_normal = match &self.geometry {
            Geometry::Sphere => sphere::local_normal_at(local_point),
            Geometry::Plane => plane::local_normal_at(local_point),
            Geometry::Triangle(triangle) => triangle.normal(),
            Geometry::Group(_) => {
                log::warn!("normal_at called on group {:?}", self.id);
                return DVec3::ZERO;
            }
        };
        self.inverse.normal_to_world(local_normal)
    }
}
