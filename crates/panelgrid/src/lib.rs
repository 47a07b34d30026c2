//! Geometric kernel for laying out rectangular modules inside a boundary.
//!
//! Layers, leaf to root:
//! - `math`: degree/radian conversion and interpolation.
//! - `linalg`: `Vec3` helpers and the `Affine3` rotate/scale/translate transform.
//! - `bounds`: axis-aligned bounding box accumulator.
//! - `polygon`: containment, orientation, sanitization, intersection.
//! - `geo`: `GeoPoint` on a sphere and the per-operation `LocalCoordinateSystem`.
//! - `packing`: greedy module grid inside a sanitized boundary.
//!
//! API Policy
//! - The kernel is synchronous and allocation-light; it performs no I/O and no
//!   logging. Hosts (see the `panelgrid` CLI) own presentation.
//! - Predicates never fail: "outside" and "no intersection" are `false`.
//!   Only invalid numeric input surfaces as `GeomError`.

pub mod bounds;
pub mod error;
pub mod geo;
pub mod linalg;
pub mod math;
pub mod packing;
pub mod polygon;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use linalg::{Affine3, Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::error::GeomError;
    pub use crate::geo::{GeoPoint, LocalCoordinateSystem, RADIUS_OF_EARTH};
    pub use crate::linalg::{Affine3, Vec3, Vec3Ext};
    pub use crate::packing::{
        pack, pack_geo, GeoModule, LayoutRules, Module, Orientation, PackingCfg, PackingReport,
    };
    pub use crate::polygon::{
        path_intersects, point_in_polygon, sanitize_path, segment_intersects, signed_area,
    };
}
