//! Shape groups.
//!
//! A group owns its children. Child transforms are stored already composed
//! with every enclosing group transform, so a group is only a container with
//! a cached world-space bounding box used to skip rays that miss it.

use crate::{Intersection, Shape};
use prism_math::{Aabb, Interval, Ray};

/// A collection of shapes treated as one object.
#[derive(Debug)]
pub struct Group {
    children: Vec<Shape>,
    bounds: Aabb,
}

impl Group {
    pub(crate) fn new(children: Vec<Shape>) -> Self {
        let mut group = Self {
            children,
            bounds: Aabb::EMPTY,
        };
        group.update_bounds();
        group
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// World-space bounds of all children.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Shape] {
        &mut self.children
    }

    pub(crate) fn push(&mut self, child: Shape) {
        self.bounds = Aabb::surrounding(&self.bounds, &child.bounds());
        self.children.push(child);
    }

    pub(crate) fn update_bounds(&mut self) {
        self.bounds = self
            .children
            .iter()
            .fold(Aabb::EMPTY, |acc, child| Aabb::surrounding(&acc, &child.bounds()));
    }

    /// Intersect every child, skipping the group when the ray misses its bounds.
    pub(crate) fn intersect_into<'a>(&'a self, ray: &Ray, out: &mut Vec<Intersection<'a>>) {
        if self.children.is_empty() || !self.bounds.hit(ray, Interval::UNIVERSE) {
            return;
        }
        for child in &self.children {
            child.intersect_into(ray, out);
        }
    }
}
