use super::*;
use nalgebra::vector;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Vec3> {
    vec![
        vector![x0, y0, 0.0],
        vector![x1, y0, 0.0],
        vector![x1, y1, 0.0],
        vector![x0, y1, 0.0],
    ]
}

fn module_box(m: &Module) -> Bounds {
    Bounds::from_points(&m.corners)
}

/// Interiors of axis-aligned modules must not overlap.
fn assert_disjoint(modules: &[Module]) {
    for (i, a) in modules.iter().enumerate() {
        let ba = module_box(a);
        for b in &modules[i + 1..] {
            let bb = module_box(b);
            let overlap = ba.min_x < bb.max_x
                && bb.min_x < ba.max_x
                && ba.min_y < bb.max_y
                && bb.min_y < ba.max_y;
            assert!(!overlap, "modules overlap: {ba:?} {bb:?}");
        }
    }
}

#[test]
fn square_rows_fit_with_row_spacing() {
    let rules = LayoutRules::new(10.0, 10.0, 2.0);
    let packing = pack(&rect(0.0, 0.0, 100.0, 100.0), &rules, &PackingCfg::default()).unwrap();
    // 8 rows (8 * 12 - 2 = 94 <= 100); along the row 9 modules, since the
    // tenth would put corners on the eastern edge.
    assert_eq!(packing.report.productive_rows, 8);
    assert_eq!(packing.modules.len(), 72);
    assert_disjoint(&packing.modules);
    let first = packing.modules[0];
    assert_eq!(first.bottom_left(), vector![0.0, 0.0, 0.0]);
    assert_eq!(first.top_left(), vector![0.0, 10.0, 0.0]);
    assert_eq!(first.bottom_right(), vector![10.0, 0.0, 0.0]);
    assert_eq!(first.top_right(), vector![10.0, 10.0, 0.0]);
    assert_eq!(packing.modules[9].bottom_left(), vector![0.0, 12.0, 0.0]);
    assert_eq!(packing.report.covered_area, 7200.0);
}

#[test]
fn square_with_column_spacing_gives_eight_by_eight() {
    let rules = LayoutRules {
        column_spacing: 2.0,
        ..LayoutRules::new(10.0, 10.0, 2.0)
    };
    let packing = pack(&rect(0.0, 0.0, 100.0, 100.0), &rules, &PackingCfg::default()).unwrap();
    assert_eq!(packing.modules.len(), 64);
    assert_eq!(packing.modules[1].bottom_left(), vector![12.0, 0.0, 0.0]);
    assert_disjoint(&packing.modules);
}

#[test]
fn boundary_smaller_than_module_yields_nothing() {
    let rules = LayoutRules::new(10.0, 10.0, 2.0);
    let packing = pack(&rect(0.0, 0.0, 5.0, 5.0), &rules, &PackingCfg::default()).unwrap();
    assert!(packing.modules.is_empty());
    assert_eq!(packing.report.productive_rows, 0);
    assert!(packing.report.rows_scanned > 0);
}

#[test]
fn clockwise_boundary_is_sanitized() {
    let rules = LayoutRules::new(10.0, 10.0, 2.0);
    let mut cw = rect(0.0, 0.0, 100.0, 100.0);
    cw.reverse();
    cw.insert(1, cw[0]);
    let a = pack(&cw, &rules, &PackingCfg::default()).unwrap();
    assert_eq!(a.modules.len(), 72);
}

#[test]
fn concave_boundary_fills_both_arms() {
    // L-shape: 40x40 with the 20x20 north-east quadrant removed.
    let l = vec![
        vector![0.0, 0.0, 0.0],
        vector![40.0, 0.0, 0.0],
        vector![40.0, 20.0, 0.0],
        vector![20.0, 20.0, 0.0],
        vector![20.0, 40.0, 0.0],
        vector![0.0, 40.0, 0.0],
    ];
    let rules = LayoutRules::new(5.0, 5.0, 1.0);
    let packing = pack(&l, &rules, &PackingCfg::default()).unwrap();
    assert!(packing.modules.iter().all(|m| m.is_inside(&l)));
    assert_disjoint(&packing.modules);
    let east = packing
        .modules
        .iter()
        .filter(|m| m.bottom_left().x >= 20.0)
        .count();
    let north = packing
        .modules
        .iter()
        .filter(|m| m.bottom_left().y >= 20.0)
        .count();
    assert!(east > 0 && north > 0);
    // first row: x = 0, 5, .., 30 (the module at 35 touches the east edge)
    assert_eq!(
        packing
            .modules
            .iter()
            .filter(|m| m.bottom_left().y == 0.0)
            .count(),
        7
    );
    // rows above the notch only reach x < 20
    for m in packing.modules.iter().filter(|m| m.top_left().y > 20.0) {
        assert!(m.top_right().x < 20.0);
    }
}

#[test]
fn empty_rows_probe_into_narrow_band() {
    // A thin spike below the main body stretches the bounding box down to
    // y = 0. Rows there are empty, so the scan probes upward until the body
    // starts at y = 1 instead of jumping a full module height past it.
    let boundary = vec![
        vector![0.0, 1.0, 0.0],
        vector![14.0, 1.0, 0.0],
        vector![14.0, 0.0, 0.0],
        vector![15.0, 0.0, 0.0],
        vector![15.0, 1.0, 0.0],
        vector![30.0, 1.0, 0.0],
        vector![30.0, 14.0, 0.0],
        vector![0.0, 14.0, 0.0],
    ];
    let rules = LayoutRules::new(10.0, 12.0, 1.0);
    let packing = pack(&boundary, &rules, &PackingCfg::default()).unwrap();
    assert_eq!(packing.modules.len(), 2);
    assert_eq!(packing.modules[0].bottom_left(), vector![0.0, 1.0, 0.0]);
    assert_eq!(packing.modules[1].bottom_left(), vector![10.0, 1.0, 0.0]);
    assert_eq!(packing.report.productive_rows, 1);
    assert!(packing.modules.iter().all(|m| m.is_inside(&boundary)));
}

#[test]
fn landscape_swaps_dimensions() {
    let rules = LayoutRules {
        orientation: Some(Orientation::Landscape),
        ..LayoutRules::new(2.0, 4.0, 1.0)
    };
    assert_eq!(rules.module_size(), (4.0, 2.0));
    let packing = pack(&rect(0.0, 0.0, 20.0, 20.0), &rules, &PackingCfg::default()).unwrap();
    let m = packing.modules[0];
    assert_eq!(m.bottom_right().x - m.bottom_left().x, 4.0);
    assert_eq!(m.top_left().y - m.bottom_left().y, 2.0);
}

#[test]
fn south_facing_azimuth_is_axis_aligned() {
    let base = LayoutRules::new(10.0, 10.0, 2.0);
    let south = LayoutRules {
        azimuth: Some(180.0),
        ..base
    };
    assert_eq!(south.grid_rotation(), None);
    assert_eq!(
        LayoutRules {
            azimuth: Some(135.0),
            ..base
        }
        .grid_rotation(),
        Some(45.0)
    );
    assert_eq!(
        LayoutRules {
            azimuth: Some(225.0),
            ..base
        }
        .grid_rotation(),
        Some(-45.0)
    );
    let boundary = rect(0.0, 0.0, 100.0, 100.0);
    let cfg = PackingCfg::default();
    assert_eq!(
        pack(&boundary, &south, &cfg).unwrap(),
        pack(&boundary, &base, &cfg).unwrap()
    );
}

fn within_closed_rect(c: &Vec3, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
    const EPS: f64 = 1e-9;
    c.x >= x0 - EPS && c.x <= x1 + EPS && c.y >= y0 - EPS && c.y <= y1 + EPS
}

#[test]
fn quarter_turn_azimuth_keeps_every_module() {
    let square = rect(0.0, 0.0, 100.0, 100.0);
    let base = LayoutRules::new(10.0, 10.0, 2.0);
    let east = LayoutRules {
        azimuth: Some(90.0),
        ..base
    };
    let cfg = PackingCfg::default();
    let aligned = pack(&square, &base, &cfg).unwrap();
    let turned = pack(&square, &east, &cfg).unwrap();
    assert_eq!(turned.modules.len(), aligned.modules.len());
    assert_eq!(turned.modules.len(), 72);
    assert_eq!(turned.report.productive_rows, 8);
    for m in &turned.modules {
        assert!(m.corners.iter().all(|c| within_closed_rect(c, 0.0, 0.0, 100.0, 100.0)));
        // rows now run north-south
        assert_eq!(m.bottom_right() - m.bottom_left(), vector![0.0, 10.0, 0.0]);
    }
}

#[test]
fn rotated_grid_stays_inside_and_keeps_rows_parallel() {
    let rules = LayoutRules {
        azimuth: Some(135.0),
        ..LayoutRules::new(4.0, 2.0, 1.0)
    };
    let boundary = rect(-50.0, -30.0, 50.0, 30.0);
    let packing = pack(&boundary, &rules, &PackingCfg::default()).unwrap();
    assert!(packing.modules.len() > 50);
    let (sin, cos) = 45f64.to_radians().sin_cos();
    for m in &packing.modules {
        assert!(m.corners.iter().all(|c| within_closed_rect(c, -50.0, -30.0, 50.0, 30.0)));
        let along = m.bottom_right() - m.bottom_left();
        assert!((along - vector![4.0 * cos, 4.0 * sin, 0.0]).norm() < 1e-9);
        let up = m.top_left() - m.bottom_left();
        assert!((up - vector![-2.0 * sin, 2.0 * cos, 0.0]).norm() < 1e-9);
    }
}

#[test]
fn invalid_configurations_fail_fast() {
    let boundary = rect(0.0, 0.0, 100.0, 100.0);
    let cfg = PackingCfg::default();
    for rules in [
        LayoutRules::new(0.0, 10.0, 2.0),
        LayoutRules::new(10.0, -1.0, 2.0),
        LayoutRules::new(10.0, 10.0, 0.0),
        LayoutRules::new(f64::NAN, 10.0, 2.0),
        LayoutRules {
            column_spacing: -1.0,
            ..LayoutRules::new(10.0, 10.0, 2.0)
        },
        LayoutRules {
            azimuth: Some(f64::INFINITY),
            ..LayoutRules::new(10.0, 10.0, 2.0)
        },
    ] {
        assert!(matches!(
            pack(&boundary, &rules, &cfg),
            Err(GeomError::InvalidInput { .. })
        ));
    }
    let rules = LayoutRules::new(10.0, 10.0, 2.0);
    for probe_step in [0.0, -0.5, f64::NAN] {
        let cfg = PackingCfg {
            probe_step,
            ..PackingCfg::default()
        };
        assert!(matches!(
            pack(&boundary, &rules, &cfg),
            Err(GeomError::NonTerminationRisk { .. })
        ));
    }
    assert!(matches!(
        pack(&[], &rules, &PackingCfg::default()),
        Err(GeomError::InvalidInput { .. })
    ));
}

#[test]
fn iteration_cap_stops_the_scan() {
    let rules = LayoutRules::new(10.0, 10.0, 2.0);
    let cfg = PackingCfg {
        max_iterations: 10,
        ..PackingCfg::default()
    };
    assert_eq!(
        pack(&rect(0.0, 0.0, 100.0, 100.0), &rules, &cfg),
        Err(GeomError::IterationCapExceeded { cap: 10 })
    );
}

#[test]
fn geographic_square_round_trip() {
    let center = GeoPoint::new(37.7833, -122.4167);
    let boundary = [
        center.offset_xy(-50.0, -50.0),
        center.offset_xy(50.0, -50.0),
        center.offset_xy(50.0, 50.0),
        center.offset_xy(-50.0, 50.0),
    ];
    let rules = LayoutRules::new(12.0, 12.0, 2.0);
    let packing = pack_geo(&boundary, &rules, &PackingCfg::default()).unwrap();
    // 8 per row (96 m of 100 m), 7 rows (7 * 14 - 2 = 96 m)
    assert_eq!(packing.modules.len(), 56);
    assert!(packing.center.distance(&center) < 0.1);
    for m in &packing.modules {
        let [tl, bl, br, tr] = m.corners;
        assert!((bl.distance(&br) - 12.0).abs() < 1e-3);
        assert!((bl.distance(&tl) - 12.0).abs() < 1e-3);
        assert!((tr.distance(&br) - 12.0).abs() < 1e-3);
        assert!(tl.latitude > bl.latitude);
        assert!(br.longitude > bl.longitude);
    }
    assert!(pack_geo(&[], &rules, &PackingCfg::default()).is_err());
    assert!(pack_geo(
        &[GeoPoint::new(f64::NAN, 0.0)],
        &rules,
        &PackingCfg::default()
    )
    .is_err());
}
