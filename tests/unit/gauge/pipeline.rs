use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::GaugeError;
use crate::gauge::palette::Assessment;

#[test]
fn stages_run_in_fixed_order() {
    let mut walked = vec![Stage::ValidateInput];
    while let Some(next) = walked.last().and_then(|s| s.next()) {
        walked.push(next);
    }
    assert_eq!(walked, Stage::ALL.to_vec());
    assert_eq!(Stage::Emit.next(), None);
    assert_eq!(Stage::RasterizeInnerDisk.to_string(), "rasterize_inner_disk");
}

#[test]
fn renderer_takes_label_metrics_from_style() {
    let style = GaugeStyle {
        label_scale: 3.0,
        label_spacing: 2,
        ..GaugeStyle::default()
    };
    let r = GaugeRenderer::new(style).unwrap();
    assert_eq!(r.font().scale(), 3.0);
    assert_eq!(r.font().spacing(), 2);
}

#[test]
fn renderer_rejects_invalid_style() {
    let style = GaugeStyle {
        inner_radius: 95.0,
        ..GaugeStyle::default()
    };
    assert!(matches!(
        GaugeRenderer::new(style),
        Err(GaugeError::Validation(_))
    ));
}

#[test]
fn invalid_input_emits_nothing() {
    let r = GaugeRenderer::new(GaugeStyle::default()).unwrap();
    let mut sink = InMemorySink::new();
    let err = r
        .render_to(&GaugeSpec::new("70", "critical"), &mut sink, Path::new("g.png"))
        .unwrap_err();
    assert!(matches!(err, GaugeError::UnknownAssessment { .. }));
    let err = r
        .render_to(&GaugeSpec::new("seventy", "good"), &mut sink, Path::new("g.png"))
        .unwrap_err();
    assert!(matches!(err, GaugeError::InvalidScore { .. }));
    assert!(sink.is_empty());
}

#[test]
fn layers_stack_track_sector_inner() {
    let r = GaugeRenderer::new(GaugeStyle::default()).unwrap();
    let geom = GaugeGeometry::compute(50.0, r.style());
    let stack = r
        .rasterize_layers(&geom, Assessment::Good.color())
        .unwrap();
    assert_eq!(stack.orders(), vec![TRACK_ORDER, SECTOR_ORDER, INNER_ORDER]);
}

#[test]
fn small_style_renders_at_its_own_size() {
    let style = GaugeStyle {
        width: 64,
        height: 48,
        center: crate::foundation::core::Point::new(32.0, 24.0),
        outer_radius: 20.0,
        inner_radius: 10.0,
        label_scale: 1.0,
        ..GaugeStyle::default()
    };
    let c = render_gauge(&GaugeSpec::new(25.0, "poor"), &style).unwrap();
    assert_eq!((c.width(), c.height()), (64, 48));
    // 3 o'clock is the end of a quarter sweep; 1:30 is well inside it.
    let inside = c.get(32 + 9, 24 - 12).unwrap();
    assert_eq!(inside, Assessment::Poor.color());
    assert_eq!(c.get(0, 0), Some(Rgba8::TRANSPARENT));
}
