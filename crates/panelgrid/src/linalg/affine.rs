use nalgebra::{Matrix3, Vector3};

use crate::math::sin_cos_degrees;

/// Affine map `x ↦ M x + t` covering rotate/scale/translate.
///
/// Equivalent to the row-major 4×4 matrix
/// `[m00 m01 m02 t0; m10 m11 m12 t1; m20 m21 m22 t2; 0 0 0 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine3 {
    pub m: Matrix3<f64>,
    pub t: Vector3<f64>,
}

impl Default for Affine3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine3 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
            t: Vector3::zeros(),
        }
    }

    #[inline]
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self {
            m: Matrix3::identity(),
            t: Vector3::new(x, y, z),
        }
    }

    #[inline]
    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            m: Matrix3::from_diagonal(&Vector3::new(sx, sy, sz)),
            t: Vector3::zeros(),
        }
    }

    /// Rotation by `degrees` around the Z axis, optionally through `pivot`.
    ///
    /// With a pivot `(px, py)` the translation is written in closed form:
    /// `tx = px - px·cos + py·sin`, `ty = py - px·sin - py·cos`.
    pub fn rotation_z(degrees: f64, pivot: Option<&Vector3<f64>>) -> Self {
        let (sin, cos) = sin_cos_degrees(degrees);
        let (tx, ty) = match pivot {
            Some(p) => (p.x - p.x * cos + p.y * sin, p.y - p.x * sin - p.y * cos),
            None => (0.0, 0.0),
        };
        Self {
            m: Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0),
            t: Vector3::new(tx, ty, 0.0),
        }
    }

    /// Rotation by `degrees` around the X axis, optionally through `pivot`.
    ///
    /// Only the pivot's `y` and `z` matter; the translation uses the same
    /// closed form as [`Affine3::rotation_z`] in the Y/Z plane.
    pub fn rotation_x(degrees: f64, pivot: Option<&Vector3<f64>>) -> Self {
        let (sin, cos) = sin_cos_degrees(degrees);
        let (ty, tz) = match pivot {
            Some(p) => (p.y - p.y * cos + p.z * sin, p.z - p.y * sin - p.z * cos),
            None => (0.0, 0.0),
        };
        Self {
            m: Matrix3::new(1.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, sin, cos),
            t: Vector3::new(0.0, ty, tz),
        }
    }

    /// Entry `(i, j)` of the equivalent 4×4 matrix.
    ///
    /// Panics if `i` or `j` is greater than 3.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match (i, j) {
            (0..=2, 0..=2) => self.m[(i, j)],
            (0..=2, 3) => self.t[i],
            (3, 0..=2) => 0.0,
            (3, 3) => 1.0,
            _ => panic!("Affine3 index ({i}, {j}) out of range"),
        }
    }

    /// Composition `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// `other ∘ self`: apply `self` first, then `other`.
    ///
    /// Non-commutative; `a.transform(&b)` equals the matrix product `B·A`.
    #[inline]
    pub fn transform(&self, other: &Self) -> Self {
        other.compose(self)
    }

    pub fn translate(&self, x: f64, y: f64, z: f64) -> Self {
        self.transform(&Self::translation(x, y, z))
    }

    pub fn scale(&self, sx: f64, sy: f64, sz: f64) -> Self {
        self.transform(&Self::scaling(sx, sy, sz))
    }

    pub fn rotate_x(&self, degrees: f64) -> Self {
        self.transform(&Self::rotation_x(degrees, None))
    }

    pub fn rotate_z(&self, degrees: f64) -> Self {
        self.transform(&Self::rotation_z(degrees, None))
    }

    /// Map a point. Row sums are evaluated left to right, translation last.
    #[inline]
    pub fn apply(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let m = &self.m;
        Vector3::new(
            v.x * m[(0, 0)] + v.y * m[(0, 1)] + v.z * m[(0, 2)] + self.t.x,
            v.x * m[(1, 0)] + v.y * m[(1, 1)] + v.z * m[(1, 2)] + self.t.y,
            v.x * m[(2, 0)] + v.y * m[(2, 1)] + v.z * m[(2, 2)] + self.t.z,
        )
    }

    #[inline]
    pub fn apply_mut(&self, v: &mut Vector3<f64>) {
        *v = self.apply(v);
    }

    /// Transform every point of `path` in place.
    pub fn apply_path_mut(&self, path: &mut [Vector3<f64>]) {
        for v in path.iter_mut() {
            self.apply_mut(v);
        }
    }
}
