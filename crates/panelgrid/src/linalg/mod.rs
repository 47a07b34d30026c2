//! Vector and affine-transform kernel.
//!
//! Purpose
//! - Points and displacements are `nalgebra::Vector3<f64>` (`Vec3`) in a local
//!   Cartesian frame, meters, `z = 0` for planar use.
//! - `Affine3` restricts 4×4 homogeneous matrices to rotation, scale and
//!   translation: a 3×3 block plus a translation column, bottom row implicit.
//!
//! Assumptions and conventions
//! - Angles are degrees at the API; rotations are counter-clockwise when
//!   looking down the rotation axis.
//! - Pure operations return new values; the `*_mut` variants write in place.
//! - Equality is exact component equality (no epsilon).
//!
//! Code cross-refs: `Vec3Ext`, `Affine3`, `create_ray`

mod affine;
mod vec3;

pub use affine::Affine3;
pub use vec3::{create_ray, Vec3, Vec3Ext};
