//! Serialized pack results: JSON document or a long parquet table.

use anyhow::{bail, Context, Result};
use panelgrid::packing::{GeoPacking, Packing, PackingReport};
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

#[derive(Debug, Serialize, PartialEq)]
pub struct ReportOut {
    pub rows_scanned: usize,
    pub productive_rows: usize,
    pub candidates: usize,
    pub covered_area: f64,
}

impl From<&PackingReport> for ReportOut {
    fn from(r: &PackingReport) -> Self {
        Self {
            rows_scanned: r.rows_scanned,
            productive_rows: r.productive_rows,
            candidates: r.candidates,
            covered_area: r.covered_area,
        }
    }
}

/// Modules as four `[a, b]` corners each (TL, BL, BR, TR); `[lat, lng]` for
/// geographic input, `[x, y]` for planar input.
#[derive(Debug, Serialize)]
pub struct LayoutOut {
    pub frame: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,
    pub modules: Vec<[[f64; 2]; 4]>,
    pub report: ReportOut,
}

impl From<&Packing> for LayoutOut {
    fn from(p: &Packing) -> Self {
        Self {
            frame: "planar",
            center: None,
            modules: p
                .modules
                .iter()
                .map(|m| m.corners.map(|c| [c.x, c.y]))
                .collect(),
            report: ReportOut::from(&p.report),
        }
    }
}

impl From<&GeoPacking> for LayoutOut {
    fn from(p: &GeoPacking) -> Self {
        Self {
            frame: "geo",
            center: Some([p.center.latitude, p.center.longitude]),
            modules: p
                .modules
                .iter()
                .map(|m| m.corners.map(|c| [c.latitude, c.longitude]))
                .collect(),
            report: ReportOut::from(&p.report),
        }
    }
}

impl LayoutOut {
    /// One row per corner: `module, corner, <a>, <b>`.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let (a_name, b_name) = match self.frame {
            "geo" => ("latitude", "longitude"),
            _ => ("x", "y"),
        };
        let n = self.modules.len() * 4;
        let mut module = Vec::with_capacity(n);
        let mut corner = Vec::with_capacity(n);
        let mut a = Vec::with_capacity(n);
        let mut b = Vec::with_capacity(n);
        for (i, corners) in self.modules.iter().enumerate() {
            for (j, [ca, cb]) in corners.iter().enumerate() {
                module.push(i as u32);
                corner.push(j as u32);
                a.push(*ca);
                b.push(*cb);
            }
        }
        df!(
            "module" => module,
            "corner" => corner,
            a_name => a,
            b_name => b,
        )
    }
}

/// Write `layout` to `out`; the extension picks the format.
pub fn write(out: &Path, layout: &LayoutOut) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => fs::write(out, serde_json::to_vec_pretty(layout)?)
            .with_context(|| format!("writing {}", out.display()))?,
        Some("parquet") => {
            let mut df = layout.to_frame()?;
            let file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        _ => bail!(
            "unsupported output file {} (expected .json or .parquet)",
            out.display()
        ),
    }
    Ok(())
}
