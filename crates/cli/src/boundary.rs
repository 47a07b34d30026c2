//! Boundary file loading (JSON via serde, CSV via polars).

use anyhow::{bail, Context, Result};
use panelgrid::geo::GeoPoint;
use panelgrid::Vec3;
use polars::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A boundary as supplied by the user, before projection.
#[derive(Clone, Debug, PartialEq)]
pub enum Boundary {
    /// `[latitude, longitude]` degrees.
    Geo(Vec<GeoPoint>),
    /// `[x, y]` meters.
    Planar(Vec<Vec3>),
}

impl Boundary {
    pub fn len(&self) -> usize {
        match self {
            Boundary::Geo(p) => p.len(),
            Boundary::Planar(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Boundary::Geo(_) => "geo",
            Boundary::Planar(_) => "planar",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase", deny_unknown_fields)]
enum BoundaryFile {
    Geo(Vec<[f64; 2]>),
    Planar(Vec<[f64; 2]>),
}

impl From<BoundaryFile> for Boundary {
    fn from(file: BoundaryFile) -> Self {
        match file {
            BoundaryFile::Geo(pts) => {
                Boundary::Geo(pts.into_iter().map(|[lat, lng]| GeoPoint::new(lat, lng)).collect())
            }
            BoundaryFile::Planar(pts) => {
                Boundary::Planar(pts.into_iter().map(|[x, y]| Vec3::new(x, y, 0.0)).collect())
            }
        }
    }
}

pub fn load(path: &Path) -> Result<Boundary> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let boundary = match ext.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => bail!(
            "unsupported boundary file {} (expected .json or .csv)",
            path.display()
        ),
    };
    if boundary.is_empty() {
        bail!("boundary {} has no points", path.display());
    }
    Ok(boundary)
}

fn load_json(path: &Path) -> Result<Boundary> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: BoundaryFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing boundary JSON {}", path.display()))?;
    Ok(file.into())
}

fn load_csv(path: &Path) -> Result<Boundary> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading boundary CSV {}", path.display()))?;
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    let has = |name: &str| names.iter().any(|n| n == name);
    if has("latitude") && has("longitude") {
        let lat = f64_column(&df, "latitude")?;
        let lng = f64_column(&df, "longitude")?;
        Ok(Boundary::Geo(
            lat.into_iter()
                .zip(lng)
                .map(|(lat, lng)| GeoPoint::new(lat, lng))
                .collect(),
        ))
    } else if has("x") && has("y") {
        let xs = f64_column(&df, "x")?;
        let ys = f64_column(&df, "y")?;
        Ok(Boundary::Planar(
            xs.into_iter()
                .zip(ys)
                .map(|(x, y)| Vec3::new(x, y, 0.0))
                .collect(),
        ))
    } else {
        bail!(
            "boundary CSV {} needs latitude,longitude or x,y columns (found {:?})",
            path.display(),
            names
        )
    }
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df.column(name)?.cast(&DataType::Float64)?;
    let values = series.f64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("column {name}: missing value in row {row}")))
        .collect()
}
