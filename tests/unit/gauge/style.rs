use super::*;

#[test]
fn defaults_describe_the_canonical_gauge() {
    let s = GaugeStyle::default();
    assert_eq!((s.width, s.height), (300, 200));
    assert_eq!(s.center, Point::new(150.0, 100.0));
    assert_eq!((s.outer_radius, s.inner_radius), (90.0, 50.0));
    assert_eq!(s.track_color, Rgba8::opaque(237, 237, 237));
    assert_eq!(s.inner_color, Rgba8::WHITE);
    assert_eq!(s.label_color, Rgba8::BLACK);
    assert!(!s.parallel_layers);
    s.validate().unwrap();
}

#[test]
fn threshold_converts_to_degrees() {
    let s = GaugeStyle::default();
    assert!((s.full_threshold_deg() - 359.964).abs() < 1e-9);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let s: GaugeStyle =
        serde_json::from_str(r#"{ "width": 120, "center": { "x": 60.0, "y": 60.0 } }"#).unwrap();
    assert_eq!(s.width, 120);
    assert_eq!(s.height, 200);
    assert_eq!(s.center, Point::new(60.0, 60.0));
    assert_eq!(s.blur_sigma, 0.6);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<GaugeStyle>(r#"{ "radius": 3 }"#).is_err());
}

#[test]
fn validate_rejects_undrawable_styles() {
    let bad: Vec<Box<dyn Fn(&mut GaugeStyle)>> = vec![
        Box::new(|s| s.width = 0),
        Box::new(|s| s.center.x = f64::NAN),
        Box::new(|s| s.outer_radius = 0.0),
        Box::new(|s| s.inner_radius = -1.0),
        Box::new(|s| s.inner_radius = s.outer_radius),
        Box::new(|s| s.start_deg = f64::INFINITY),
        Box::new(|s| s.edge_width = -0.5),
        Box::new(|s| s.blur_sigma = -1.0),
        Box::new(|s| s.label_scale = 0.0),
        Box::new(|s| s.label_scale = 1e10),
        Box::new(|s| s.full_ring_threshold_score = 120.0),
    ];
    for (i, f) in bad.iter().enumerate() {
        let mut s = GaugeStyle::default();
        f(&mut s);
        let err = s.validate().unwrap_err();
        assert!(
            err.to_string().starts_with("validation error: style"),
            "case {i}: {err}"
        );
    }
}

#[test]
fn zero_blur_and_hard_edges_are_allowed() {
    let s = GaugeStyle {
        blur_sigma: 0.0,
        edge_width: 0.0,
        inner_radius: 0.0,
        ..GaugeStyle::default()
    };
    s.validate().unwrap();
}
