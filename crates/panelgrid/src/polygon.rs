//! Planar polygon predicates on paths of `Vec3` (x/y only).
//!
//! Paths are implicitly closed: the last point connects back to the first and
//! the first point is not repeated. A sanitized path has no consecutive
//! duplicate points and counter-clockwise winding ("y increases north").
//!
//! Known limitations
//! - `point_in_polygon` classifies points exactly on an edge by the even-odd
//!   rule's arithmetic (left/bottom edges in, right/top edges out for an
//!   axis-aligned box).
//! - `segment_intersects` does not special-case collinear or overlapping
//!   segments; such pairs may report no intersection.
//! - Self-intersecting and multi-ring polygons are out of scope.

use crate::error::{ensure_finite, GeomError};
use crate::linalg::{Vec3, Vec3Ext};

/// Even-odd ray casting (PNPOLY).
pub fn point_in_polygon(point: &Vec3, polygon: &[Vec3]) -> bool {
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut j = match polygon.len() {
        0 => return false,
        n => n - 1,
    };
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Shoelace area; positive for counter-clockwise winding.
pub fn signed_area(path: &[Vec3]) -> f64 {
    let Some(mut last) = path.last() else {
        return 0.0;
    };
    let mut area = 0.0;
    for p in path {
        area += last.x * p.y - p.x * last.y;
        last = p;
    }
    area / 2.0
}

/// True if the path winds counter-clockwise; zero area counts as oriented.
#[inline]
pub fn path_orientation(path: &[Vec3]) -> bool {
    signed_area(path) >= 0.0
}

/// Reverse `path` unless it is already counter-clockwise.
pub fn correct_orientation(mut path: Vec<Vec3>) -> Vec<Vec3> {
    if !path_orientation(&path) {
        path.reverse();
    }
    path
}

/// Drop consecutive exact duplicates, keeping the first of each run.
///
/// A closing point equal to the first point is kept.
pub fn dedupe_path(path: &[Vec3]) -> Vec<Vec3> {
    let mut out = path.to_vec();
    out.dedup();
    out
}

/// Normalize an externally supplied path: dedupe, then orient CCW.
///
/// Fails on an empty path or a non-finite coordinate.
pub fn sanitize_path(path: &[Vec3]) -> Result<Vec<Vec3>, GeomError> {
    if path.is_empty() {
        return Err(GeomError::invalid("path needs at least one point"));
    }
    for p in path {
        ensure_finite(p.x, "path x")?;
        ensure_finite(p.y, "path y")?;
        ensure_finite(p.z, "path z")?;
    }
    Ok(correct_orientation(dedupe_path(path)))
}

/// Length of the closed path.
pub fn perimeter(path: &[Vec3]) -> f64 {
    let Some(mut last) = path.last() else {
        return 0.0;
    };
    let mut total = 0.0;
    for p in path {
        total += last.distance_to(p);
        last = p;
    }
    total
}

#[inline]
fn is_ccw(p1: &Vec3, p2: &Vec3, p3: &Vec3) -> bool {
    (p3.y - p1.y) * (p2.x - p1.x) > (p2.y - p1.y) * (p3.x - p1.x)
}

/// Proper intersection of segments `p1p2` and `q1q2`.
#[inline]
pub fn segment_intersects(p1: &Vec3, p2: &Vec3, q1: &Vec3, q2: &Vec3) -> bool {
    is_ccw(p1, q1, q2) != is_ccw(p2, q1, q2) && is_ccw(p1, p2, q1) != is_ccw(p1, p2, q2)
}

/// True if any edge pair crosses or either polygon's first vertex lies
/// inside the other, which catches full containment of simple polygons.
pub fn path_intersects(path1: &[Vec3], path2: &[Vec3]) -> bool {
    let (Some(first1), Some(first2)) = (path1.first(), path2.first()) else {
        return false;
    };
    let mut p1 = &path1[path1.len() - 1];
    for p2 in path1 {
        let mut q1 = &path2[path2.len() - 1];
        for q2 in path2 {
            if segment_intersects(p1, p2, q1, q2) {
                return true;
            }
            q1 = q2;
        }
        p1 = p2;
    }
    point_in_polygon(first1, path2) || point_in_polygon(first2, path1)
}

/// Decomposition of a displacement in a grid rotated by some angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridVector {
    /// `source` moved along the rotated x axis only.
    pub midpoint: Vec3,
    /// Manhattan distance between `source` and `dest` in the rotated grid.
    pub distance: f64,
}

/// Split `dest - source` into components along a grid rotated by `angle`
/// degrees counter-clockwise.
pub fn rotated_grid_vector(source: &Vec3, dest: &Vec3, angle: f64) -> GridVector {
    let rotated = (dest - source).rotated_z(-angle, None);
    GridVector {
        midpoint: source + Vec3::new(rotated.x, 0.0, 0.0).rotated_z(angle, None),
        distance: rotated.x.abs() + rotated.y.abs(),
    }
}
