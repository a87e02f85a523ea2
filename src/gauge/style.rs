use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::text::font::BitmapFont;

/// Tunable drawing constants for a gauge.
///
/// Every field has a default, so a style file only needs the fields it overrides:
///
/// ```
/// let style: arcgauge::GaugeStyle = serde_json::from_str(r#"{ "blur_sigma": 0.0 }"#).unwrap();
/// assert_eq!(style.width, 300);
/// assert_eq!(style.blur_sigma, 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaugeStyle {
    /// Output canvas width in pixels.
    pub width: u32,
    /// Output canvas height in pixels.
    pub height: u32,
    /// Gauge center in canvas coordinates.
    pub center: Point,
    /// Radius of the track and score disks.
    pub outer_radius: f64,
    /// Radius of the inner disk that hollows the ring.
    pub inner_radius: f64,
    /// Angle where the score sweep starts, degrees clockwise from 12 o'clock.
    pub start_deg: f64,
    /// Anti-aliasing band width in pixels.
    pub edge_width: f64,
    /// Gaussian blur sigma applied to each shape layer; `0` disables it.
    pub blur_sigma: f64,
    /// Color of the full track ring.
    pub track_color: Rgba8,
    /// Color of the inner disk.
    pub inner_color: Rgba8,
    /// Color of the score label.
    pub label_color: Rgba8,
    /// Label font scale factor.
    pub label_scale: f64,
    /// Gap between label glyphs in unscaled font pixels.
    pub label_spacing: u32,
    /// Scores above this many points are drawn as a closed ring.
    pub full_ring_threshold_score: f64,
    /// Rasterize shape layers (and blur rows) on the rayon pool.
    pub parallel_layers: bool,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            width: 300,
            height: 200,
            center: Point::new(150.0, 100.0),
            outer_radius: 90.0,
            inner_radius: 50.0,
            start_deg: 0.0,
            edge_width: 2.0,
            blur_sigma: 0.6,
            track_color: Rgba8::opaque(0xed, 0xed, 0xed),
            inner_color: Rgba8::WHITE,
            label_color: Rgba8::BLACK,
            label_scale: 2.5,
            label_spacing: 1,
            full_ring_threshold_score: 99.99,
            parallel_layers: false,
        }
    }
}

impl GaugeStyle {
    /// Check that the style describes a drawable gauge.
    pub fn validate(&self) -> GaugeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GaugeError::validation("style width/height must be > 0"));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(GaugeError::validation("style center must be finite"));
        }
        if !self.outer_radius.is_finite() || self.outer_radius <= 0.0 {
            return Err(GaugeError::validation("style outer_radius must be finite and > 0"));
        }
        if !self.inner_radius.is_finite() || self.inner_radius < 0.0 {
            return Err(GaugeError::validation("style inner_radius must be finite and >= 0"));
        }
        if self.inner_radius >= self.outer_radius {
            return Err(GaugeError::validation(
                "style inner_radius must be smaller than outer_radius",
            ));
        }
        if !self.start_deg.is_finite() {
            return Err(GaugeError::validation("style start_deg must be finite"));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(GaugeError::validation("style edge_width must be finite and >= 0"));
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(GaugeError::validation("style blur_sigma must be finite and >= 0"));
        }
        if !self.label_scale.is_finite()
            || self.label_scale <= 0.0
            || self.label_scale > BitmapFont::MAX_SCALE
        {
            return Err(GaugeError::validation(format!(
                "style label_scale must be finite and in (0, {}]",
                BitmapFont::MAX_SCALE
            )));
        }
        let t = self.full_ring_threshold_score;
        if !t.is_finite() || t <= 0.0 || t > 100.0 {
            return Err(GaugeError::validation(
                "style full_ring_threshold_score must be in (0, 100]",
            ));
        }
        Ok(())
    }

    /// Full-ring threshold converted from score points to degrees of sweep.
    pub fn full_threshold_deg(&self) -> f64 {
        360.0 * self.full_ring_threshold_score / 100.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/style.rs"]
mod tests;
