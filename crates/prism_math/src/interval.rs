/// Closed range of `f64` values, used for box extents and ray `t` ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Contains nothing; the identity for [`Interval::surrounding`].
    pub const EMPTY: Interval = Interval::new(f64::INFINITY, f64::NEG_INFINITY);

    pub const UNIVERSE: Interval = Interval::new(f64::NEG_INFINITY, f64::INFINITY);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Widen to at least `width`, keeping the midpoint.
    pub fn pad(&self, width: f64) -> Interval {
        if self.is_empty() || self.size() >= width {
            return *self;
        }
        let half = width / 2.0;
        let mid = (self.min + self.max) / 2.0;
        Interval::new(mid - half, mid + half)
    }

    /// Smallest interval covering both.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_degenerate() {
        assert_eq!(Interval::new(-2.0, 3.0).size(), 5.0);
        assert!(!Interval::new(1.0, 1.0).is_empty());
        assert!(Interval::new(1.0, 0.5).is_empty());
    }

    #[test]
    fn test_surrounding_with_empty_is_identity() {
        let a = Interval::new(1.0, 5.0);

        assert_eq!(Interval::surrounding(&Interval::EMPTY, &a), a);
        assert_eq!(
            Interval::surrounding(&a, &Interval::new(-2.0, 3.0)),
            Interval::new(-2.0, 5.0)
        );
    }

    #[test]
    fn test_pad_flat_extent() {
        let flat = Interval::new(2.0, 2.0).pad(0.5);
        assert_eq!(flat, Interval::new(1.75, 2.25));

        let wide = Interval::new(0.0, 3.0);
        assert_eq!(wide.pad(0.5), wide);
    }

    #[test]
    fn test_empty_and_universe() {
        assert!(Interval::EMPTY.is_empty());
        assert_eq!(Interval::EMPTY.pad(1.0), Interval::EMPTY);
        assert!(!Interval::UNIVERSE.is_empty());
        assert_eq!(Interval::UNIVERSE.size(), f64::INFINITY);
    }
}
