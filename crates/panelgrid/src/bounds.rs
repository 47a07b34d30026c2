//! Axis-aligned bounding box accumulator (x/y only).
//!
//! Assumptions and conventions
//! - The empty box is `min = +∞`, `max = -∞`; after at least one extension
//!   `min_x <= max_x` and `min_y <= max_y`.
//! - Containment and equality are exact and inclusive of the boundary.
//! - Derived values (corners, midpoint) are fresh copies; a scratch `Bounds`
//!   reused across operations never aliases them.

use crate::error::GeomError;
use crate::linalg::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Empty box.
    #[inline]
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn from_points(points: &[Vec3]) -> Self {
        let mut b = Self::new();
        b.extend_many(points);
        b
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Reset to the box spanned by two points.
    pub fn reset_between(&mut self, a: &Vec3, b: &Vec3) {
        self.min_x = a.x.min(b.x);
        self.max_x = a.x.max(b.x);
        self.min_y = a.y.min(b.y);
        self.max_y = a.y.max(b.y);
    }

    #[inline]
    pub fn extend_point(&mut self, p: &Vec3) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    #[inline]
    pub fn extend_box(&mut self, other: &Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Single pass over `points`; same result as repeated `extend_point`.
    pub fn extend_many(&mut self, points: &[Vec3]) {
        let (mut min_x, mut max_x) = (self.min_x, self.max_x);
        let (mut min_y, mut max_y) = (self.min_y, self.max_y);
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        self.min_x = min_x;
        self.max_x = max_x;
        self.min_y = min_y;
        self.max_y = max_y;
    }

    #[inline]
    pub fn contains_point(&self, p: &Vec3) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    #[inline]
    pub fn contains_box(&self, other: &Bounds) -> bool {
        self.min_x <= other.min_x
            && other.max_x <= self.max_x
            && self.min_y <= other.min_y
            && other.max_y <= self.max_y
    }

    /// Index of the first point inside the box.
    pub fn find_point(&self, points: &[Vec3]) -> Option<usize> {
        points.iter().position(|p| self.contains_point(p))
    }

    pub fn contains_any(&self, points: &[Vec3]) -> bool {
        self.find_point(points).is_some()
    }

    /// True unless the boxes are disjoint on some axis; touching counts.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.min_x > other.max_x
            || self.max_x < other.min_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }

    pub fn translate(&mut self, v: &Vec3) {
        self.min_x += v.x;
        self.max_x += v.x;
        self.min_y += v.y;
        self.max_y += v.y;
    }

    /// Grow (or shrink, for negative margins) symmetrically.
    pub fn expand(&mut self, horizontal: f64, vertical: f64) {
        self.min_x -= horizontal;
        self.max_x += horizontal;
        self.min_y -= vertical;
        self.max_y += vertical;
    }

    #[inline]
    pub fn top_left(&self) -> Vec3 {
        Vec3::new(self.min_x, self.max_y, 0.0)
    }

    #[inline]
    pub fn top_right(&self) -> Vec3 {
        Vec3::new(self.max_x, self.max_y, 0.0)
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec3 {
        Vec3::new(self.max_x, self.min_y, 0.0)
    }

    #[inline]
    pub fn bottom_left(&self) -> Vec3 {
        Vec3::new(self.min_x, self.min_y, 0.0)
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left.
    pub fn path(&self) -> [Vec3; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn midpoint(&self) -> Vec3 {
        Vec3::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            0.0,
        )
    }
}

/// Midpoint of the bounding box of `path`, accumulated in `scratch`.
///
/// `scratch` is reset first; its contents afterwards are the path's box.
pub fn path_midpoint(path: &[Vec3], scratch: &mut Bounds) -> Result<Vec3, GeomError> {
    if path.is_empty() {
        return Err(GeomError::invalid("path midpoint needs at least one point"));
    }
    scratch.reset();
    scratch.extend_many(path);
    Ok(scratch.midpoint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn square() -> Vec<Vec3> {
        vec![
            vector![0.0, 0.0, 0.0],
            vector![4.0, 0.0, 0.0],
            vector![4.0, 2.0, 0.0],
            vector![0.0, 2.0, 0.0],
        ]
    }

    #[test]
    fn empty_sentinel_and_reset() {
        let mut b = Bounds::new();
        assert!(b.is_empty());
        assert_eq!(b.min_x, f64::INFINITY);
        assert_eq!(b.max_y, f64::NEG_INFINITY);
        b.extend_point(&vector![1.0, 2.0, 0.0]);
        assert!(!b.is_empty());
        assert_eq!(b.width(), 0.0);
        b.reset();
        assert_eq!(b, Bounds::new());
    }

    #[test]
    fn extend_and_derived_values() {
        let b = Bounds::from_points(&square());
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (0.0, 4.0, 0.0, 2.0));
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 2.0);
        assert_eq!(b.midpoint(), vector![2.0, 1.0, 0.0]);
        assert_eq!(b.top_left(), vector![0.0, 2.0, 0.0]);
        assert_eq!(b.bottom_right(), vector![4.0, 0.0, 0.0]);
        assert_eq!(b.path()[1], b.top_right());
        assert_eq!(b.path()[3], b.bottom_left());

        let mut merged = b;
        let mut other = Bounds::new();
        other.reset_between(&vector![5.0, -1.0, 0.0], &vector![3.0, 1.0, 0.0]);
        merged.extend_box(&other);
        assert_eq!(
            (merged.min_x, merged.max_x, merged.min_y, merged.max_y),
            (0.0, 5.0, -1.0, 2.0)
        );
    }

    #[test]
    fn containment_is_inclusive() {
        let b = Bounds::from_points(&square());
        assert!(b.contains_point(&vector![0.0, 0.0, 0.0]));
        assert!(b.contains_point(&vector![4.0, 2.0, 0.0]));
        assert!(!b.contains_point(&vector![4.0 + 1e-12, 1.0, 0.0]));
        assert!(b.contains_box(&b));
        let mut inner = b;
        inner.expand(-1.0, -0.5);
        assert!(b.contains_box(&inner));
        assert!(!inner.contains_box(&b));
        let pts = [vector![9.0, 9.0, 0.0], vector![1.0, 1.0, 0.0]];
        assert_eq!(b.find_point(&pts), Some(1));
        assert!(b.contains_any(&pts));
        assert!(!b.contains_any(&pts[..1]));
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = Bounds::from_points(&square());
        let mut b = a;
        b.translate(&vector![4.0, 2.0, 0.0]);
        assert!(a.intersects(&b));
        b.translate(&vector![1e-9, 0.0, 0.0]);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn path_midpoint_reuses_scratch() {
        let mut scratch = Bounds::new();
        let m1 = path_midpoint(&square(), &mut scratch).unwrap();
        let m2 = path_midpoint(&[vector![10.0, 10.0, 0.0]], &mut scratch).unwrap();
        assert_eq!(m1, vector![2.0, 1.0, 0.0]);
        assert_eq!(m2, vector![10.0, 10.0, 0.0]);
        assert!(matches!(
            path_midpoint(&[], &mut scratch),
            Err(GeomError::InvalidInput { .. })
        ));
    }

    proptest! {
        #[test]
        fn extend_is_order_independent(
            pts in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 1..40),
            seed in 0u64..1000,
        ) {
            use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
            let points: Vec<Vec3> = pts.iter().map(|&(x, y)| vector![x, y, 0.0]).collect();
            let mut shuffled = points.clone();
            shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
            let mut one_by_one = Bounds::new();
            for p in shuffled.iter().rev() {
                one_by_one.extend_point(p);
            }
            prop_assert_eq!(Bounds::from_points(&points), Bounds::from_points(&shuffled));
            prop_assert_eq!(Bounds::from_points(&points), one_by_one);
        }
    }
}
