use crate::foundation::core::Point;
use crate::gauge::style::GaugeStyle;
use crate::raster::shapes::Arc;

/// Resolved drawing parameters for one gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeGeometry {
    /// Shared center of every disk and of the label.
    pub center: Point,
    /// Track and score radius.
    pub outer_radius: f64,
    /// Inner disk radius.
    pub inner_radius: f64,
    /// Sweep start, degrees clockwise from 12 o'clock.
    pub start_deg: f64,
    /// `360 * score / 100`; may be negative or exceed a full turn.
    pub sweep_deg: f64,
    /// Sweeps above this are drawn as a closed ring.
    pub full_threshold_deg: f64,
    /// Label text.
    pub label: String,
}

impl GaugeGeometry {
    /// Derive the geometry for `score` under `style`.
    pub fn compute(score: f64, style: &GaugeStyle) -> Self {
        Self {
            center: style.center,
            outer_radius: style.outer_radius,
            inner_radius: style.inner_radius,
            start_deg: style.start_deg,
            sweep_deg: 360.0 * score / 100.0,
            full_threshold_deg: style.full_threshold_deg(),
            label: format_label(score),
        }
    }

    /// The score sector as an [`Arc`] on the outer radius.
    pub fn score_arc(&self) -> Arc {
        Arc {
            center: self.center,
            radius: self.outer_radius,
            start_deg: self.start_deg,
            sweep_deg: self.sweep_deg,
        }
    }
}

/// Score label: one decimal place, with a trailing `.0` dropped.
///
/// ```
/// use arcgauge::gauge::geometry::format_label;
/// assert_eq!(format_label(70.0), "70");
/// assert_eq!(format_label(72.46), "72.5");
/// ```
pub fn format_label(score: f64) -> String {
    let mut s = format!("{score:.1}");
    if let Some(whole) = s.strip_suffix(".0") {
        s = whole.to_owned();
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/geometry.rs"]
mod tests;
