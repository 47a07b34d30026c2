//! Layout configuration: CLI flags layered over an optional JSON rules file.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use panelgrid::packing::{LayoutRules, Orientation, PackingCfg};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

/// Layout flags; each one overrides the same key from `--rules`.
#[derive(Args, Clone, Debug, Default)]
pub struct LayoutArgs {
    /// Module width in meters (along the row)
    #[arg(long)]
    pub width: Option<f64>,
    /// Module height in meters (across the row)
    #[arg(long)]
    pub height: Option<f64>,
    /// Gap between rows in meters
    #[arg(long)]
    pub row_spacing: Option<f64>,
    /// Gap between modules inside a row in meters
    #[arg(long)]
    pub column_spacing: Option<f64>,
    /// Facing direction in compass degrees (180 = south)
    #[arg(long, allow_negative_numbers = true)]
    pub azimuth: Option<f64>,
    #[arg(long, value_enum)]
    pub orientation: Option<OrientationArg>,
    /// Scan advance after a rejected candidate, meters
    #[arg(long)]
    pub probe_step: Option<f64>,
    /// Cap on candidate evaluations
    #[arg(long)]
    pub max_iterations: Option<usize>,
}

/// JSON rules file; every key optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub row_spacing: Option<f64>,
    pub column_spacing: Option<f64>,
    pub azimuth: Option<f64>,
    pub orientation: Option<OrientationArg>,
    pub probe_step: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl RulesFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing rules JSON {}", path.display()))
    }

    /// Apply `args` on top of the file values.
    pub fn overlay(self, args: &LayoutArgs) -> Self {
        Self {
            width: args.width.or(self.width),
            height: args.height.or(self.height),
            row_spacing: args.row_spacing.or(self.row_spacing),
            column_spacing: args.column_spacing.or(self.column_spacing),
            azimuth: args.azimuth.or(self.azimuth),
            orientation: args.orientation.or(self.orientation),
            probe_step: args.probe_step.or(self.probe_step),
            max_iterations: args.max_iterations.or(self.max_iterations),
        }
    }

    /// Build kernel configuration; width, height and row spacing are required.
    pub fn resolve(&self) -> Result<(LayoutRules, PackingCfg)> {
        let width = self.width.context("missing module width (--width)")?;
        let height = self.height.context("missing module height (--height)")?;
        let row_spacing = self
            .row_spacing
            .context("missing row spacing (--row-spacing)")?;
        let rules = LayoutRules {
            column_spacing: self.column_spacing.unwrap_or(0.0),
            azimuth: self.azimuth,
            orientation: self.orientation.map(Orientation::from),
            ..LayoutRules::new(width, height, row_spacing)
        };
        let defaults = PackingCfg::default();
        let cfg = PackingCfg {
            probe_step: self.probe_step.unwrap_or(defaults.probe_step),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
        };
        rules.validate()?;
        cfg.validate()?;
        Ok((rules, cfg))
    }
}
