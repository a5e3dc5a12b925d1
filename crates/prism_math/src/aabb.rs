use crate::{DVec3, Interval, Ray};

/// Thinnest extent a box may have on any axis
const MIN_EXTENT: f64 = 0.0001;

/// Axis-Aligned Bounding Box used to cull rays against shape groups.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// Infinite extents are allowed so unbounded shapes (planes) can take part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: DVec3, b: DVec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));

        Self::new(x, y, z)
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// True when the box has no volume on some axis (nothing was added to it).
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// True when any axis extends to infinity.
    pub fn is_unbounded(&self) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .any(|i| i.min.is_infinite() || i.max.is_infinite())
    }

    /// Minimum corner.
    pub fn min(&self) -> DVec3 {
        DVec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Maximum corner.
    pub fn max(&self) -> DVec3 {
        DVec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Uses the slab method. Axis-parallel rays produce infinite slab
    /// distances, which `f64::max`/`f64::min` handle without special cases.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        if self.is_empty() {
            return false;
        }

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let adinv = 1.0 / r.direction[axis];
            let mut t0 = (slab.min - r.origin[axis]) * adinv;
            let mut t1 = (slab.max - r.origin[axis]) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Flat triangles and planes would otherwise give zero-width boxes.
    fn pad_to_minimums(&mut self) {
        for interval in [&mut self.x, &mut self.y, &mut self.z] {
            *interval = interval.pad(MIN_EXTENT);
        }
    }

    /// Static constants
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };
}
