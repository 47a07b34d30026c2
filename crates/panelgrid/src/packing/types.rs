//! Configuration and output types for the packing engine.

use crate::error::{ensure_finite, GeomError};
use crate::geo::GeoPoint;
use crate::linalg::{Affine3, Vec3};
use crate::polygon::point_in_polygon;

/// Module orientation relative to the row axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// `width` runs along the row.
    #[default]
    Portrait,
    /// `width` and `height` swapped.
    Landscape,
}

/// User-facing layout rules (meters and compass degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRules {
    pub width: f64,
    pub height: f64,
    /// Gap between consecutive rows.
    pub row_spacing: f64,
    /// Gap between neighbouring modules inside a row.
    pub column_spacing: f64,
    /// Facing direction of the modules; `None` keeps rows east-west.
    pub azimuth: Option<f64>,
    pub orientation: Option<Orientation>,
}

impl LayoutRules {
    pub fn new(width: f64, height: f64, row_spacing: f64) -> Self {
        Self {
            width,
            height,
            row_spacing,
            column_spacing: 0.0,
            azimuth: None,
            orientation: None,
        }
    }

    pub fn validate(&self) -> Result<(), GeomError> {
        for (value, what) in [
            (self.width, "width"),
            (self.height, "height"),
            (self.row_spacing, "row spacing"),
        ] {
            ensure_finite(value, what)?;
            if value <= 0.0 {
                return Err(GeomError::invalid(format!("{what} must be > 0, got {value}")));
            }
        }
        ensure_finite(self.column_spacing, "column spacing")?;
        if self.column_spacing < 0.0 {
            return Err(GeomError::invalid(format!(
                "column spacing must be >= 0, got {}",
                self.column_spacing
            )));
        }
        if let Some(azimuth) = self.azimuth {
            ensure_finite(azimuth, "azimuth")?;
        }
        Ok(())
    }

    /// `(along_row, along_column)` module extent after orientation.
    pub fn module_size(&self) -> (f64, f64) {
        match self.orientation.unwrap_or_default() {
            Orientation::Portrait => (self.width, self.height),
            Orientation::Landscape => (self.height, self.width),
        }
    }

    /// Counter-clockwise rotation of the row axis in degrees, in `(-90, 90]`.
    ///
    /// Rows run perpendicular to the facing direction, so azimuth 180 (south)
    /// and azimuth 0 (north) both give `None`.
    pub fn grid_rotation(&self) -> Option<f64> {
        let azimuth = self.azimuth?;
        let mut theta = (180.0 - azimuth).rem_euclid(180.0);
        if theta > 90.0 {
            theta -= 180.0;
        }
        (theta != 0.0).then_some(theta)
    }
}

/// Scan tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackingCfg {
    /// Advance after a rejected candidate or an empty row (meters).
    pub probe_step: f64,
    /// Upper bound on candidate evaluations per run.
    pub max_iterations: usize,
}

impl Default for PackingCfg {
    fn default() -> Self {
        Self {
            probe_step: 0.25,
            max_iterations: 50_000_000,
        }
    }
}

impl PackingCfg {
    pub fn validate(&self) -> Result<(), GeomError> {
        if !(self.probe_step.is_finite() && self.probe_step > 0.0) {
            return Err(GeomError::non_termination(format!(
                "probe step must be finite and > 0, got {}",
                self.probe_step
            )));
        }
        if self.max_iterations == 0 {
            return Err(GeomError::invalid("max_iterations must be > 0"));
        }
        Ok(())
    }
}

/// One placed module: corners top-left, bottom-left, bottom-right, top-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Module {
    pub corners: [Vec3; 4],
}

impl Module {
    /// Axis-aligned module with its bottom-left corner at `(x, y)`.
    pub fn axis_aligned(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            corners: [
                Vec3::new(x, y + height, 0.0),
                Vec3::new(x, y, 0.0),
                Vec3::new(x + width, y, 0.0),
                Vec3::new(x + width, y + height, 0.0),
            ],
        }
    }

    #[inline]
    pub fn top_left(&self) -> Vec3 {
        self.corners[0]
    }

    #[inline]
    pub fn bottom_left(&self) -> Vec3 {
        self.corners[1]
    }

    #[inline]
    pub fn bottom_right(&self) -> Vec3 {
        self.corners[2]
    }

    #[inline]
    pub fn top_right(&self) -> Vec3 {
        self.corners[3]
    }

    pub fn transformed_by(&self, transform: &Affine3) -> Self {
        Self {
            corners: self.corners.map(|c| transform.apply(&c)),
        }
    }

    /// All four corners inside `boundary` under the even-odd rule.
    pub fn is_inside(&self, boundary: &[Vec3]) -> bool {
        self.corners.iter().all(|c| point_in_polygon(c, boundary))
    }
}

/// A module projected back to geographic coordinates (same corner order).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoModule {
    pub corners: [GeoPoint; 4],
}

/// Counters from one packing run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackingReport {
    pub rows_scanned: usize,
    pub productive_rows: usize,
    pub candidates: usize,
    pub covered_area: f64,
}

/// Planar packing result.
#[derive(Clone, Debug, PartialEq)]
pub struct Packing {
    pub modules: Vec<Module>,
    pub report: PackingReport,
}

/// Geographic packing result; `center` is the local frame's origin.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPacking {
    pub center: GeoPoint,
    pub modules: Vec<GeoModule>,
    pub report: PackingReport,
}
