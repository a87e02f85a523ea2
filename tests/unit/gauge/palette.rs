use super::*;

#[test]
fn known_categories_map_to_fixed_opaque_colors() {
    let expect = [
        ("excellent", Rgba8::opaque(180, 222, 102)),
        ("good", Rgba8::opaque(245, 199, 15)),
        ("normal", Rgba8::opaque(245, 156, 61)),
        ("poor", Rgba8::opaque(247, 109, 106)),
    ];
    for (name, color) in expect {
        let a: Assessment = name.parse().unwrap();
        assert_eq!(a.color(), color, "{name}");
        assert_eq!(a.to_string(), name);
    }
}

#[test]
fn unknown_category_is_an_error_not_a_default() {
    let err = "critical".parse::<Assessment>().unwrap_err();
    assert!(matches!(err, GaugeError::UnknownAssessment { ref name } if name == "critical"));
    assert!("".parse::<Assessment>().is_err());
    assert!("excellent!".parse::<Assessment>().is_err());
}

#[test]
fn parsing_matches_exact_names_only() {
    assert_eq!("good".parse::<Assessment>().unwrap(), Assessment::Good);
    assert!(" good ".parse::<Assessment>().is_err());
    assert!("Good".parse::<Assessment>().is_err());
    assert!("POOR".parse::<Assessment>().is_err());
}

#[test]
fn serde_uses_lowercase_names_and_rejects_unknown() {
    let a: Assessment = serde_json::from_str("\"normal\"").unwrap();
    assert_eq!(a, Assessment::Normal);
    assert_eq!(serde_json::to_string(&Assessment::Excellent).unwrap(), "\"excellent\"");
    assert!(serde_json::from_str::<Assessment>("\"critical\"").is_err());
}

#[test]
fn score_thresholds_classify() {
    assert_eq!(Assessment::from_score(100.0), Assessment::Excellent);
    assert_eq!(Assessment::from_score(91.0), Assessment::Excellent);
    assert_eq!(Assessment::from_score(90.99), Assessment::Good);
    assert_eq!(Assessment::from_score(81.0), Assessment::Good);
    assert_eq!(Assessment::from_score(70.0), Assessment::Normal);
    assert_eq!(Assessment::from_score(60.99), Assessment::Poor);
    assert_eq!(Assessment::from_score(-5.0), Assessment::Poor);
    assert_eq!(Assessment::from_score(f64::NAN), Assessment::Poor);
}
