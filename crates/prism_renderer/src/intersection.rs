//! Ray-object intersections and hit selection.

use std::ops::Index;

use crate::{Computations, Shape};
use prism_math::Ray;

/// A ray parameter paired with the object hit there.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Shape,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Shape) -> Self {
        Self { t, object }
    }

    /// Shading data for this hit. `xs` must be the full sorted list the hit
    /// came from; it is used to find the refractive indices on either side.
    pub fn prepare_computations(&self, ray: &Ray, xs: &Intersections<'a>) -> Computations<'a> {
        Computations::prepare(self, ray, xs.as_slice())
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && self.object.id() == other.object.id()
    }
}

/// A list of intersections sorted by ascending `t`.
#[derive(Debug, Clone, Default)]
pub struct Intersections<'a> {
    items: Vec<Intersection<'a>>,
}

impl<'a> Intersections<'a> {
    /// Build a sorted list from intersections in any order.
    pub fn new(mut items: Vec<Intersection<'a>>) -> Self {
        items.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { items }
    }

    /// The visible hit: the intersection with the smallest non-negative `t`.
    pub fn hit(&self) -> Option<Intersection<'a>> {
        self.items.iter().find(|i| i.t >= 0.0).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Intersection<'a>] {
        &self.items
    }
}

impl<'a> Index<usize> for Intersections<'a> {
    type Output = Intersection<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> FromIterator<Intersection<'a>> for Intersections<'a> {
    fn from_iter<I: IntoIterator<Item = Intersection<'a>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for Intersections<'a> {
    type Item = Intersection<'a>;
    type IntoIter = std::vec::IntoIter<Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Intersections<'a> {
    type Item = &'b Intersection<'a>;
    type IntoIter = std::slice::Iter<'b, Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_holds_t_and_object() {
        let s = Shape::sphere();
        let i = Intersection::new(3.5, &s);

        assert_eq!(i.t, 3.5);
        assert_eq!(i.object.id(), s.id());
    }

    #[test]
    fn test_list_is_sorted() {
        let s = Shape::sphere();
        let xs = Intersections::new(vec![
            Intersection::new(5.0, &s),
            Intersection::new(-3.0, &s),
            Intersection::new(2.0, &s),
        ]);

        let ts: Vec<f64> = xs.iter().map(|i| i.t).collect();
        assert_eq!(ts, vec![-3.0, 2.0, 5.0]);
    }

    #[test]
    fn test_hit_all_positive() {
        let s = Shape::sphere();
        let i1 = Intersection::new(1.0, &s);
        let i2 = Intersection::new(2.0, &s);
        let xs = Intersections::new(vec![i2, i1]);

        assert_eq!(xs.hit(), Some(i1));
    }

    #[test]
    fn test_hit_some_negative() {
        let s = Shape::sphere();
        let i1 = Intersection::new(-1.0, &s);
        let i2 = Intersection::new(1.0, &s);
        let xs = Intersections::new(vec![i2, i1]);

        assert_eq!(xs.hit(), Some(i2));
    }

    #[test]
    fn test_hit_all_negative() {
        let s = Shape::sphere();
        let xs = Intersections::new(vec![
            Intersection::new(-2.0, &s),
            Intersection::new(-1.0, &s),
        ]);

        assert_eq!(xs.hit(), None);
    }

    #[test]
    fn test_hit_is_lowest_nonnegative() {
        let s = Shape::sphere();
        let i1 = Intersection::new(5.0, &s);
        let i2 = Intersection::new(7.0, &s);
        let i3 = Intersection::new(-3.0, &s);
        let i4 = Intersection::new(2.0, &s);
        let xs = Intersections::new(vec![i1, i2, i3, i4]);

        assert_eq!(xs.hit(), Some(i4));
    }

    #[test]
    fn test_hit_at_zero_counts() {
        let s = Shape::sphere();
        let xs = Intersections::new(vec![Intersection::new(0.0, &s)]);

        assert_eq!(xs.hit().map(|i| i.t), Some(0.0));
    }

    #[test]
    fn test_equality_uses_object_identity() {
        let a = Shape::sphere();
        let b = Shape::sphere();

        assert_eq!(Intersection::new(1.0, &a), Intersection::new(1.0, &a));
        assert_ne!(Intersection::new(1.0, &a), Intersection::new(1.0, &b));
    }

    #[test]
    fn test_empty_list() {
        let xs = Intersections::default();
        assert!(xs.is_empty());
        assert_eq!(xs.hit(), None);
    }
}
