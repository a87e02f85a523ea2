use super::*;

const GREEN: Rgba8 = Rgba8::opaque(180, 222, 102);

fn at_clock(center: Point, radius: f64, deg: f64) -> (u32, u32) {
    let a = deg.to_radians();
    let x = center.x + radius * a.sin();
    let y = center.y - radius * a.cos();
    (x.floor() as u32, y.floor() as u32)
}

#[test]
fn coverage_is_one_inside_and_zero_outside() {
    let (r, e) = (90.0, 2.0);
    for d in [0.0, 10.0, 50.0, 87.9, 88.0] {
        assert_eq!(disk_coverage(d, r, e), 1.0, "d = {d}");
    }
    for d in [90.0001, 91.0, 500.0] {
        assert_eq!(disk_coverage(d, r, e), 0.0, "d = {d}");
    }
    assert_eq!(disk_coverage(90.0, r, e), 0.0);
}

#[test]
fn coverage_is_monotonic_across_the_edge_band() {
    let (r, e) = (90.0, 2.0);
    let mut prev = disk_coverage(r - e, r, e);
    for i in 1..=2000 {
        let d = r - e + e * f64::from(i) / 2000.0;
        let c = disk_coverage(d, r, e);
        assert!(c <= prev, "coverage increased at d = {d}");
        assert!((0.0..=1.0).contains(&c));
        prev = c;
    }
}

#[test]
fn zero_edge_width_is_a_hard_edge() {
    assert_eq!(disk_coverage(9.99, 10.0, 0.0), 1.0);
    assert_eq!(disk_coverage(10.01, 10.0, 0.0), 0.0);
}

#[test]
fn wrapped_interval_membership() {
    let (s, e) = (270f64.to_radians(), 10f64.to_radians());
    assert!(angle_between(0.0, s, e));
    assert!(angle_between(350f64.to_radians(), s, e));
    assert!(!angle_between(180f64.to_radians(), s, e));
    // Unnormalized inputs behave the same.
    assert!(angle_between((-10f64).to_radians(), s, e + TAU));
}

#[test]
fn plain_interval_membership() {
    let (s, e) = (0.0, 90f64.to_radians());
    assert!(angle_between(45f64.to_radians(), s, e));
    assert!(!angle_between(91f64.to_radians(), s, e));
}

#[test]
fn clock_angle_runs_clockwise_from_noon() {
    assert!(clock_angle(0.0, -1.0).abs() < 1e-12);
    assert!((clock_angle(1.0, 0.0) - FRAC_PI_2).abs() < 1e-12);
    assert!((clock_angle(0.0, 1.0) - std::f64::consts::PI).abs() < 1e-12);
    assert!((clock_angle(-1.0, 0.0) - 3.0 * FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn plan_handles_empty_partial_full_and_overflow() {
    let full = 359.964;
    assert!(plan_sweep(0.0, 0.0, full).is_empty());
    assert!(plan_sweep(0.0, -5.0, full).is_empty());
    assert!(plan_sweep(0.0, f64::NAN, full).is_empty());

    assert_eq!(
        plan_sweep(0.0, 252.0, full),
        vec![SectorDraw::Partial {
            start_deg: 0.0,
            sweep_deg: 252.0
        }]
    );
    assert_eq!(plan_sweep(0.0, 360.0, full), vec![SectorDraw::Full]);
    assert_eq!(plan_sweep(0.0, 359.982, full), vec![SectorDraw::Full]);

    // Start past 0 with more than a full turn: [start, 360) then [0, rest).
    assert_eq!(
        plan_sweep(270.0, 400.0, full),
        vec![
            SectorDraw::Partial {
                start_deg: 270.0,
                sweep_deg: 90.0
            },
            SectorDraw::Partial {
                start_deg: 0.0,
                sweep_deg: 310.0
            },
        ]
    );
    assert_eq!(
        plan_sweep(0.0, 396.0, full),
        vec![
            SectorDraw::Full,
            SectorDraw::Partial {
                start_deg: 0.0,
                sweep_deg: 36.0
            }
        ]
    );
    assert_eq!(plan_sweep(0.0, 1e9, full).len(), 2);
}

#[test]
fn end_angle_wraps() {
    let arc = Arc {
        center: Point::new(0.0, 0.0),
        radius: 1.0,
        start_deg: 300.0,
        sweep_deg: 100.0,
    };
    assert!((arc.end_deg() - 40.0).abs() < 1e-9);
}

#[test]
fn disk_is_opaque_inside_and_untouched_outside() {
    let mut c = Canvas::new(40, 40).unwrap();
    let center = Point::new(20.0, 20.0);
    fill_disk(&mut c, center, 10.0, GREEN, 2.0).unwrap();

    assert_eq!(c.get(20, 20), Some(GREEN));
    assert_eq!(c.get(26, 20), Some(GREEN));
    assert_eq!(c.get(0, 0), Some(Rgba8::TRANSPARENT));
    assert_eq!(c.get(31, 20), Some(Rgba8::TRANSPARENT));

    // Edge pixel: same color, partial alpha.
    let edge = c.get(29, 20).unwrap();
    assert_eq!((edge.r, edge.g, edge.b), (GREEN.r, GREEN.g, GREEN.b));
    assert!(edge.a > 0 && edge.a < 255, "alpha {}", edge.a);
}

#[test]
fn disk_clips_at_canvas_bounds() {
    let mut c = Canvas::new(10, 10).unwrap();
    fill_disk(&mut c, Point::new(0.0, 0.0), 30.0, GREEN, 2.0).unwrap();
    assert_eq!(c.get(9, 9), Some(GREEN));
    fill_disk(&mut c, Point::new(-100.0, -100.0), 5.0, Rgba8::WHITE, 2.0).unwrap();
    assert_eq!(c.get(0, 0), Some(GREEN));
}

#[test]
fn invalid_geometry_is_rejected() {
    let mut c = Canvas::new(4, 4).unwrap();
    let p = Point::new(2.0, 2.0);
    assert!(fill_disk(&mut c, p, -1.0, GREEN, 1.0).is_err());
    assert!(fill_disk(&mut c, p, 1.0, GREEN, f64::NAN).is_err());
    assert!(fill_disk(&mut c, Point::new(f64::INFINITY, 0.0), 1.0, GREEN, 1.0).is_err());
}

#[test]
fn quarter_sector_fills_only_its_quadrant() {
    let center = Point::new(50.0, 50.0);
    let mut c = Canvas::new(100, 100).unwrap();
    let arc = Arc {
        center,
        radius: 40.0,
        start_deg: 0.0,
        sweep_deg: 90.0,
    };
    fill_arc(&mut c, &arc, GREEN, 2.0, 359.964).unwrap();

    let (x, y) = at_clock(center, 25.0, 45.0);
    assert_eq!(c.get(x, y), Some(GREEN));
    for deg in [135.0, 225.0, 315.0] {
        let (x, y) = at_clock(center, 25.0, deg);
        assert_eq!(c.get(x, y), Some(Rgba8::TRANSPARENT), "deg {deg}");
    }
}

#[test]
fn wrapping_sector_covers_both_sides_of_noon() {
    let center = Point::new(50.0, 50.0);
    let mut c = Canvas::new(100, 100).unwrap();
    let arc = Arc {
        center,
        radius: 40.0,
        start_deg: 270.0,
        sweep_deg: 100.0,
    };
    fill_arc(&mut c, &arc, GREEN, 2.0, 359.964).unwrap();

    for deg in [300.0, 350.0, 0.5, 5.0] {
        let (x, y) = at_clock(center, 30.0, deg);
        assert_eq!(c.get(x, y), Some(GREEN), "deg {deg}");
    }
    let (x, y) = at_clock(center, 30.0, 180.0);
    assert_eq!(c.get(x, y), Some(Rgba8::TRANSPARENT));
}

#[test]
fn full_sweep_draws_a_closed_ring() {
    let center = Point::new(50.0, 50.0);
    let mut c = Canvas::new(100, 100).unwrap();
    let arc = Arc {
        center,
        radius: 40.0,
        start_deg: 0.0,
        sweep_deg: 360.0,
    };
    fill_arc(&mut c, &arc, GREEN, 2.0, 359.964).unwrap();
    for deg in [359.9, 0.0, 0.1, 90.0, 180.0, 270.0] {
        let (x, y) = at_clock(center, 30.0, deg);
        assert_eq!(c.get(x, y), Some(GREEN), "deg {deg}");
    }
}

#[test]
fn whole_turn_closes_the_ring_at_any_threshold() {
    assert_eq!(plan_sweep(0.0, 360.0, 360.0), vec![SectorDraw::Full]);
    assert_eq!(plan_sweep(90.0, 360.0, 1000.0), vec![SectorDraw::Full]);

    let center = Point::new(50.0, 50.0);
    let mut c = Canvas::new(100, 100).unwrap();
    let arc = Arc {
        center,
        radius: 40.0,
        start_deg: 0.0,
        sweep_deg: 360.0,
    };
    fill_arc(&mut c, &arc, GREEN, 2.0, 360.0).unwrap();
    for deg in [359.9, 0.1, 90.0, 180.0, 270.0] {
        let (x, y) = at_clock(center, 30.0, deg);
        assert_eq!(c.get(x, y), Some(GREEN), "deg {deg}");
    }
}

#[test]
fn angular_edge_is_antialiased() {
    let center = Point::new(50.0, 50.0);
    let mut c = Canvas::new(100, 100).unwrap();
    let arc = Arc {
        center,
        radius: 40.0,
        start_deg: 0.0,
        sweep_deg: 180.0,
    };
    fill_arc(&mut c, &arc, GREEN, 2.0, 359.964).unwrap();

    // Column right of noon: pixel centers 0.5 px from the start ray.
    let soft = c.get(50, 25).unwrap();
    assert!(soft.a > 0 && soft.a < 255, "alpha {}", soft.a);
    assert_eq!(c.get(53, 25), Some(GREEN));
    assert_eq!(c.get(49, 25), Some(Rgba8::TRANSPARENT));
}

#[test]
fn sweep_past_one_turn_has_no_seam_at_noon() {
    let center = Point::new(50.0, 50.0);
    let mut c = Canvas::new(100, 100).unwrap();
    let arc = Arc {
        center,
        radius: 40.0,
        start_deg: 270.0,
        sweep_deg: 400.0,
    };
    fill_arc(&mut c, &arc, GREEN, 2.0, 359.964).unwrap();
    for deg in [359.9, 0.1, 180.0, 269.0] {
        let (x, y) = at_clock(center, 30.0, deg);
        assert_eq!(c.get(x, y), Some(GREEN), "deg {deg}");
    }
}
