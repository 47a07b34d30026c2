use nalgebra::Vector3;

use super::Affine3;
use crate::error::GeomError;
use crate::math::to_radians;

/// Point or displacement in a local frame (meters).
pub type Vec3 = Vector3<f64>;

/// Kernel operations on `Vec3` that nalgebra does not provide directly.
///
/// Arithmetic, `dot`, `cross`, `norm` (length) and `norm_squared` come from
/// nalgebra itself.
pub trait Vec3Ext: Sized {
    /// Per-axis scale.
    fn scaled_xyz(&self, sx: f64, sy: f64, sz: f64) -> Self;
    /// Euclidean distance to `other`.
    fn distance_to(&self, other: &Self) -> f64;
    /// Unit vector times `scale`; fails on a zero-length vector.
    fn normalized_scaled(&self, scale: f64) -> Result<Self, GeomError>;
    fn transformed_by(&self, transform: &Affine3) -> Self;
    fn transform_by_mut(&mut self, transform: &Affine3);
    /// Rotate around Z, optionally through `pivot`.
    fn rotated_z(&self, degrees: f64, pivot: Option<&Self>) -> Self;
    fn rotate_z_mut(&mut self, degrees: f64);
    /// Rotate around X through the origin.
    fn rotated_x(&self, degrees: f64) -> Self;
    fn rotate_x_mut(&mut self, degrees: f64);
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn scaled_xyz(&self, sx: f64, sy: f64, sz: f64) -> Self {
        self.component_mul(&Vec3::new(sx, sy, sz))
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> f64 {
        (self - other).norm()
    }

    fn normalized_scaled(&self, scale: f64) -> Result<Self, GeomError> {
        let len = self.norm();
        if len == 0.0 {
            return Err(GeomError::DivideByZero);
        }
        Ok(self * (scale / len))
    }

    #[inline]
    fn transformed_by(&self, transform: &Affine3) -> Self {
        transform.apply(self)
    }

    #[inline]
    fn transform_by_mut(&mut self, transform: &Affine3) {
        transform.apply_mut(self);
    }

    fn rotated_z(&self, degrees: f64, pivot: Option<&Self>) -> Self {
        Affine3::rotation_z(degrees, pivot).apply(self)
    }

    fn rotate_z_mut(&mut self, degrees: f64) {
        Affine3::rotation_z(degrees, None).apply_mut(self);
    }

    fn rotated_x(&self, degrees: f64) -> Self {
        Affine3::rotation_x(degrees, None).apply(self)
    }

    fn rotate_x_mut(&mut self, degrees: f64) {
        Affine3::rotation_x(degrees, None).apply_mut(self);
    }
}

/// Unit direction of an incoming ray from the sun.
///
/// `elevation` 0 is the horizon and 90 the zenith; `azimuth` is a compass
/// bearing (180 = due south). The ray points from the sun toward the ground.
pub fn create_ray(elevation: f64, azimuth: f64) -> Vec3 {
    let phi = to_radians((90.0 - azimuth) % 360.0);
    let theta = to_radians(90.0 - elevation);
    Vec3::new(
        -theta.sin() * phi.cos(),
        -theta.sin() * phi.sin(),
        -theta.cos(),
    )
}
