//! Packing engine: fill a boundary polygon with a grid of equal modules.
//!
//! Purpose
//! - Given a boundary and `LayoutRules`, place a maximal greedy set of
//!   non-overlapping `width × height` rectangles whose four corners all lie
//!   inside the boundary, rows separated by `row_spacing`.
//!
//! Scan convention
//! - Origin at the south-west corner of the boundary's bounding box; rows run
//!   west to east and advance northwards. Candidates that do not fit are
//!   rejected whole, never clipped; the scan then probes forward by
//!   `PackingCfg::probe_step` so concave regions still yield partial rows.
//! - Other corner choices give different, equally valid tilings; this one is
//!   used consistently.
//!
//! Azimuth
//! - With an azimuth the boundary is rotated by `-θ` (see
//!   `LayoutRules::grid_rotation`) about its box midpoint, scanned axis
//!   aligned, and each module rotated back by `+θ`. Containment is decided in
//!   the scan frame only; rotation is an isometry, and a second test in the
//!   boundary frame would wrongly reject modules touching an edge that the
//!   half-open containment rule treats as outside.
//!
//! Termination
//! - Every step is strictly positive, so both loops leave the bounding box;
//!   `PackingCfg::max_iterations` caps total candidate evaluations.
//!
//! Code cross-refs: `scan::scan`, `polygon::point_in_polygon`, `geo::LocalCoordinateSystem`

mod scan;
mod types;

pub use types::{
    GeoModule, GeoPacking, LayoutRules, Module, Orientation, Packing, PackingCfg, PackingReport,
};

use crate::bounds::Bounds;
use crate::error::GeomError;
use crate::geo::{geo_path_midpoint, GeoPoint, LocalCoordinateSystem};
use crate::linalg::{Affine3, Vec3};
use crate::polygon::sanitize_path;
use scan::Grid;

/// Pack a planar boundary (meters).
pub fn pack(
    boundary: &[Vec3],
    rules: &LayoutRules,
    cfg: &PackingCfg,
) -> Result<Packing, GeomError> {
    rules.validate()?;
    cfg.validate()?;
    let boundary = sanitize_path(boundary)?;
    let (width, height) = rules.module_size();
    let grid = Grid {
        width,
        height,
        row_spacing: rules.row_spacing,
        column_spacing: rules.column_spacing,
    };

    let (modules, mut report) = match rules.grid_rotation() {
        None => scan::scan(&boundary, grid, cfg)?,
        Some(theta) => {
            let pivot = Bounds::from_points(&boundary).midpoint();
            let mut rotated = boundary.clone();
            Affine3::rotation_z(-theta, Some(&pivot)).apply_path_mut(&mut rotated);
            let (scanned, report) = scan::scan(&rotated, grid, cfg)?;
            let back = Affine3::rotation_z(theta, Some(&pivot));
            let modules: Vec<Module> = scanned.iter().map(|m| m.transformed_by(&back)).collect();
            (modules, report)
        }
    };
    report.covered_area = modules.len() as f64 * width * height;
    Ok(Packing { modules, report })
}

/// Pack a geographic boundary through a local frame at its midpoint.
///
/// The frame lives only for this call; modules come back as `GeoPoint`s.
pub fn pack_geo(
    boundary: &[GeoPoint],
    rules: &LayoutRules,
    cfg: &PackingCfg,
) -> Result<GeoPacking, GeomError> {
    for p in boundary {
        GeoPoint::try_new(p.latitude, p.longitude)?;
    }
    let center = geo_path_midpoint(boundary)?;
    let frame = LocalCoordinateSystem::new(center);
    let local = frame.to_local_path(boundary);
    let Packing { modules, report } = pack(&local, rules, cfg)?;
    let modules = modules
        .iter()
        .map(|m| GeoModule {
            corners: m.corners.map(|c| frame.to_geo(&c)),
        })
        .collect();
    Ok(GeoPacking {
        center,
        modules,
        report,
    })
}

#[cfg(test)]
mod tests;
