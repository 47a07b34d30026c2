use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panelgrid::packing::{pack, pack_geo, LayoutRules, PackingCfg};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod boundary;
mod measure;
mod output;
mod provenance;
mod rules;

use boundary::Boundary;
use output::{LayoutOut, ReportOut};
use provenance::Payload;
use rules::{LayoutArgs, RulesFile};

#[derive(Parser)]
#[command(name = "panelgrid")]
#[command(about = "Pack rectangular modules into roof boundaries")]
struct Cmd {
    /// Log verbosity (logs go to stderr)
    #[arg(long, global = true, default_value_t = Level::INFO)]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fill a boundary with modules and write the layout plus a provenance sidecar
    Pack {
        /// Boundary file (.json or .csv)
        #[arg(long)]
        boundary: PathBuf,
        /// Layout rules JSON; flags below override its keys
        #[arg(long)]
        rules: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Output file (.json or .parquet)
        #[arg(long)]
        out: PathBuf,
    },
    /// Print area, bounding box, midpoint, perimeter and winding of a boundary
    Measure {
        #[arg(long)]
        boundary: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Pack {
            boundary,
            rules,
            layout,
            out,
        } => run_pack(&boundary, rules.as_deref(), &layout, &out),
        Action::Measure { boundary } => run_measure(&boundary),
        Action::Report => report(),
    }
}

fn run_pack(
    boundary_path: &Path,
    rules_path: Option<&Path>,
    layout: &LayoutArgs,
    out: &Path,
) -> Result<()> {
    let file = match rules_path {
        Some(path) => RulesFile::load(path)?,
        None => RulesFile::default(),
    };
    let resolved = file.overlay(layout);
    let (rules, cfg) = resolved.resolve()?;
    let boundary = boundary::load(boundary_path)?;
    tracing::info!(
        boundary = %boundary_path.display(),
        kind = boundary.kind(),
        points = boundary.len(),
        width = rules.width,
        height = rules.height,
        row_spacing = rules.row_spacing,
        azimuth = ?rules.azimuth,
        "pack"
    );

    let layout_out = pack_boundary(&boundary, &rules, &cfg)
        .with_context(|| format!("packing {}", boundary_path.display()))?;
    log_report(&layout_out.report);
    output::write(out, &layout_out)?;

    let mut payload = Payload::new("pack", serde_json::to_value(&resolved)?)
        .with_input(boundary_path);
    if let Some(path) = rules_path {
        payload = payload.with_input(path);
    }
    let sidecar = provenance::write_sidecar(out, &payload)?;
    tracing::info!(
        out = %out.display(),
        provenance = %sidecar.display(),
        modules = layout_out.modules.len(),
        "layout written"
    );
    Ok(())
}

fn pack_boundary(
    boundary: &Boundary,
    rules: &LayoutRules,
    cfg: &PackingCfg,
) -> Result<LayoutOut> {
    Ok(match boundary {
        Boundary::Geo(points) => {
            let packing = pack_geo(points, rules, cfg)?;
            tracing::debug!(
                lat = packing.center.latitude,
                lng = packing.center.longitude,
                "local frame center"
            );
            LayoutOut::from(&packing)
        }
        Boundary::Planar(points) => LayoutOut::from(&pack(points, rules, cfg)?),
    })
}

fn log_report(report: &ReportOut) {
    tracing::info!(
        rows = report.rows_scanned,
        productive_rows = report.productive_rows,
        candidates = report.candidates,
        covered_area = report.covered_area,
        "scan finished"
    );
    if report.productive_rows == 0 {
        tracing::warn!("no module fits the boundary");
    }
}

fn run_measure(boundary_path: &Path) -> Result<()> {
    let boundary = boundary::load(boundary_path)?;
    tracing::debug!(
        boundary = %boundary_path.display(),
        kind = boundary.kind(),
        points = boundary.len(),
        "measure"
    );
    let m = measure::measure(&boundary)
        .with_context(|| format!("measuring {}", boundary_path.display()))?;
    println!("{}", serde_json::to_string_pretty(&m)?);
    Ok(())
}

fn report() -> Result<()> {
    let cfg = PackingCfg::default();
    let payload = Payload::new(
        "report",
        json!({
            "probe_step": cfg.probe_step,
            "max_iterations": cfg.max_iterations
        }),
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::block(&payload))?
    );
    Ok(())
}
