//! Greedy axis-aligned scan from the south-west corner of the boundary box.

use super::types::{Module, PackingCfg, PackingReport};
use crate::bounds::Bounds;
use crate::error::GeomError;
use crate::linalg::Vec3;

/// Module extent and gaps in the scan frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Grid {
    pub width: f64,
    pub height: f64,
    pub row_spacing: f64,
    pub column_spacing: f64,
}

/// Fill `boundary` row by row.
///
/// Rows run along +x starting at `min_x`, and advance along +y starting at
/// `min_y`. An accepted candidate advances `x` by `width + column_spacing`, a
/// rejected one by `probe_step`. A productive row advances `y` by
/// `height + row_spacing`, an empty row by `probe_step`.
pub(crate) fn scan(
    boundary: &[Vec3],
    grid: Grid,
    cfg: &PackingCfg,
) -> Result<(Vec<Module>, PackingReport), GeomError> {
    let bounds = Bounds::from_points(boundary);
    let mut modules = Vec::new();
    let mut report = PackingReport::default();
    let x_step = grid.width + grid.column_spacing;
    let y_step = grid.height + grid.row_spacing;

    let mut y = bounds.min_y;
    while y <= bounds.max_y {
        let mut placed = 0usize;
        let mut x = bounds.min_x;
        while x <= bounds.max_x {
            report.candidates += 1;
            if report.candidates > cfg.max_iterations {
                return Err(GeomError::IterationCapExceeded {
                    cap: cfg.max_iterations,
                });
            }
            let candidate = Module::axis_aligned(x, y, grid.width, grid.height);
            if candidate.is_inside(boundary) {
                modules.push(candidate);
                placed += 1;
                x += x_step;
            } else {
                x += cfg.probe_step;
            }
        }
        report.rows_scanned += 1;
        if placed > 0 {
            report.productive_rows += 1;
            y += y_step;
        } else {
            y += cfg.probe_step;
        }
    }
    Ok((modules, report))
}
