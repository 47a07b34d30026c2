//! Fill a small geographic roof outline and print the module corners.
//!
//! Run: `cargo run -p panelgrid --example fill_roof`

use panelgrid::prelude::*;

fn main() {
    let center = GeoPoint::new(37.7833, -122.4167);
    // An L-shaped roof, 30 m x 20 m with a 10 m x 8 m cut-out.
    let roof = [
        center.offset_xy(-15.0, -10.0),
        center.offset_xy(15.0, -10.0),
        center.offset_xy(15.0, 2.0),
        center.offset_xy(5.0, 2.0),
        center.offset_xy(5.0, 10.0),
        center.offset_xy(-15.0, 10.0),
    ];
    let rules = LayoutRules {
        azimuth: Some(170.0),
        ..LayoutRules::new(1.7, 1.0, 0.8)
    };
    let packing = pack_geo(&roof, &rules, &PackingCfg::default()).expect("valid layout rules");
    println!(
        "modules={} rows={} productive_rows={} covered_m2={:.1}",
        packing.modules.len(),
        packing.report.rows_scanned,
        packing.report.productive_rows,
        packing.report.covered_area
    );
    for m in packing.modules.iter().take(5) {
        let corners: Vec<String> = m
            .corners
            .iter()
            .map(|c| format!("({:.7}, {:.7})", c.latitude, c.longitude))
            .collect();
        println!("{}", corners.join(" "));
    }
}
