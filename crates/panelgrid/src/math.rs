//! Scalar helpers: angle conversion and linear interpolation.

use std::f64::consts::{PI, TAU};

const TO_RADIANS: f64 = PI / 180.0;

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * TO_RADIANS
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians / TO_RADIANS
}

/// Wrap an angle into `[0, 2π]` by whole turns; NaN and infinities pass through.
pub fn clamp_radians(radians: f64) -> f64 {
    if !radians.is_finite() {
        return radians;
    }
    radians.rem_euclid(TAU)
}

/// `(sin, cos)` of an angle in degrees, exact at multiples of 90°.
pub fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    if degrees.is_finite() && degrees.rem_euclid(90.0) == 0.0 {
        match (degrees / 90.0).rem_euclid(4.0) as u8 {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        to_radians(degrees).sin_cos()
    }
}

/// `start + (end - start) * t`.
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Inverse of [`lerp`]: the `t` at which `lerp(start, end, t) == value`.
///
/// Returns a non-finite value when `start == end`.
#[inline]
pub fn inv_lerp(start: f64, end: f64, value: f64) -> f64 {
    (value - start) / (end - start)
}
