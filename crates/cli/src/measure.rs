//! Boundary geometry summary for `panelgrid measure`.

use crate::boundary::Boundary;
use anyhow::Result;
use panelgrid::bounds::{path_midpoint, Bounds};
use panelgrid::geo::{geo_path_midpoint, LocalCoordinateSystem};
use panelgrid::polygon::{path_orientation, perimeter, signed_area};
use panelgrid::Vec3;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Measurement {
    pub frame: &'static str,
    pub points: usize,
    /// Signed shoelace area in square meters; positive when counter-clockwise.
    pub signed_area: f64,
    pub orientation: &'static str,
    pub perimeter: f64,
    /// `[min_x, min_y, max_x, max_y]` in meters, local frame for geo input.
    pub bounds: [f64; 4],
    pub midpoint: [f64; 2],
    /// Local frame origin `[lat, lng]`; geo input only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,
}

pub fn measure(boundary: &Boundary) -> Result<Measurement> {
    let (path, center): (Vec<Vec3>, _) = match boundary {
        Boundary::Planar(points) => (points.clone(), None),
        Boundary::Geo(points) => {
            let center = geo_path_midpoint(points)?;
            let frame = LocalCoordinateSystem::new(center);
            (
                frame.to_local_path(points),
                Some([center.latitude, center.longitude]),
            )
        }
    };
    let mut scratch = Bounds::new();
    let mid = path_midpoint(&path, &mut scratch)?;
    Ok(Measurement {
        frame: boundary.kind(),
        points: path.len(),
        signed_area: signed_area(&path),
        orientation: if path_orientation(&path) { "ccw" } else { "cw" },
        perimeter: perimeter(&path),
        bounds: [scratch.min_x, scratch.min_y, scratch.max_x, scratch.max_y],
        midpoint: [mid.x, mid.y],
        center,
    })
}
