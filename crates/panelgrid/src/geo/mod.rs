//! Geographic points on a sphere and a local tangent-plane frame.
//!
//! Purpose
//! - `GeoPoint` carries latitude/longitude in degrees on a sphere of radius
//!   `RADIUS_OF_EARTH`; `offset` is the single implementation of "move by
//!   distance and heading" and every other offset helper routes through it.
//! - `LocalCoordinateSystem` maps `GeoPoint`s to `Vec3` meters (x east,
//!   y north) around one center and back.
//!
//! Assumptions and conventions
//! - Bearings are compass degrees: 0 = north (+y), 90 = east (+x).
//! - The local frame is a flat-earth approximation, valid for small extents.
//!   It is created per operation and never cached globally.
//! - Paths crossing the 0/360 longitude seam (antimeridian) are not handled.
//!
//! Code cross-refs: `GeoPoint`, `LocalCoordinateSystem`, `bearing_from_vector`

mod local;
mod point;

pub use local::LocalCoordinateSystem;
pub use point::{bearing_from_vector, geo_path_midpoint, GeoPoint, RADIUS_OF_EARTH};
