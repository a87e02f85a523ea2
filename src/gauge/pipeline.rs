use std::fmt;
use std::path::Path;

use crate::encode::sink::CanvasSink;
use crate::foundation::core::Rgba8;
use crate::foundation::error::GaugeResult;
use crate::gauge::geometry::GaugeGeometry;
use crate::gauge::spec::{GaugeSpec, ValidatedGauge};
use crate::gauge::style::GaugeStyle;
use crate::raster::blur::blur;
use crate::raster::canvas::Canvas;
use crate::raster::composite::{Layer, LayerStack};
use crate::raster::shapes::{fill_arc, fill_disk};
use crate::text::builtin;
use crate::text::font::BitmapFont;

/// Layer order of the full track disk.
pub const TRACK_ORDER: u32 = 1;
/// Layer order of the score sector.
pub const SECTOR_ORDER: u32 = 2;
/// Layer order of the inner disk.
pub const INNER_ORDER: u32 = 3;

/// Gauge pipeline stages, in execution order.
///
/// Only [`Stage::ValidateInput`] and [`Stage::Emit`] can fail on well-formed styles; every stage
/// in between is pure pixel work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Parse the score and resolve the assessment.
    ValidateInput,
    /// Derive sweep, radii and label text.
    ComputeGeometry,
    /// Full outer disk in the track color.
    RasterizeTrack,
    /// Score sector in the assessment color.
    RasterizeSector,
    /// Inner disk that hollows the ring.
    RasterizeInnerDisk,
    /// Flatten layers back to front.
    CompositeLayers,
    /// Draw the centered score label.
    RenderLabel,
    /// Hand the canvas to a sink.
    Emit,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 8] = [
        Self::ValidateInput,
        Self::ComputeGeometry,
        Self::RasterizeTrack,
        Self::RasterizeSector,
        Self::RasterizeInnerDisk,
        Self::CompositeLayers,
        Self::RenderLabel,
        Self::Emit,
    ];

    /// Stage that runs after this one.
    pub fn next(self) -> Option<Stage> {
        let i = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(i + 1).copied()
    }

    /// Snake-case stage name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidateInput => "validate_input",
            Self::ComputeGeometry => "compute_geometry",
            Self::RasterizeTrack => "rasterize_track",
            Self::RasterizeSector => "rasterize_sector",
            Self::RasterizeInnerDisk => "rasterize_inner_disk",
            Self::CompositeLayers => "composite_layers",
            Self::RenderLabel => "render_label",
            Self::Emit => "emit",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders gauges for one style and label font.
///
/// Rendering holds no mutable state, so one renderer may be shared across threads and the same
/// [`GaugeSpec`] always yields byte-identical pixels.
#[derive(Clone, Debug)]
pub struct GaugeRenderer {
    style: GaugeStyle,
    font: BitmapFont,
}

impl GaugeRenderer {
    /// Renderer using the built-in digit font.
    pub fn new(style: GaugeStyle) -> GaugeResult<Self> {
        Self::with_font(style, builtin::digits()?)
    }

    /// Renderer with a caller-supplied label font; its scale and spacing are taken from `style`.
    pub fn with_font(style: GaugeStyle, mut font: BitmapFont) -> GaugeResult<Self> {
        style.validate()?;
        font.set_scale(style.label_scale)?;
        font.set_spacing(style.label_spacing);
        Ok(Self { style, font })
    }

    /// Active style.
    pub fn style(&self) -> &GaugeStyle {
        &self.style
    }

    /// Label font.
    pub fn font(&self) -> &BitmapFont {
        &self.font
    }

    /// Run every stage except [`Stage::Emit`] and return the finished canvas.
    ///
    /// Invalid input fails before any pixel is touched.
    #[tracing::instrument(
        level = "debug",
        skip(self, spec),
        fields(score = %spec.score, assessment = %spec.assessment)
    )]
    pub fn render(&self, spec: &GaugeSpec) -> GaugeResult<Canvas> {
        let gauge = validate_input(spec)?;

        let geom = GaugeGeometry::compute(gauge.score, &self.style);
        tracing::debug!(
            stage = %Stage::ComputeGeometry,
            sweep_deg = geom.sweep_deg,
            label = %geom.label,
            "geometry ready"
        );

        let layers = self.rasterize_layers(&geom, gauge.assessment.color())?;

        let mut canvas = Canvas::new(self.style.width, self.style.height)?;
        let orders = layers.orders();
        layers.flatten_onto(&mut canvas)?;
        tracing::debug!(stage = %Stage::CompositeLayers, ?orders, "layers flattened");

        let drawn = self.font.draw_text_centered(
            &mut canvas,
            geom.center,
            &geom.label,
            self.style.label_color,
        );
        tracing::debug!(stage = %Stage::RenderLabel, glyphs = drawn, "label drawn");

        Ok(canvas)
    }

    /// Render `spec` and emit the canvas to `sink` under `target`.
    #[tracing::instrument(level = "debug", skip(self, spec, sink, target), fields(path = %target.display()))]
    pub fn render_to(
        &self,
        spec: &GaugeSpec,
        sink: &mut dyn CanvasSink,
        target: &Path,
    ) -> GaugeResult<()> {
        let canvas = self.render(spec)?;
        sink.emit(&canvas, target)?;
        tracing::debug!(stage = %Stage::Emit, "canvas emitted");
        Ok(())
    }

    fn rasterize_layers(&self, geom: &GaugeGeometry, arc_color: Rgba8) -> GaugeResult<LayerStack> {
        let track = || {
            self.shape_layer(TRACK_ORDER, Stage::RasterizeTrack, |c| {
                fill_disk(
                    c,
                    geom.center,
                    geom.outer_radius,
                    self.style.track_color,
                    self.style.edge_width,
                )
            })
        };
        let sector = || {
            self.shape_layer(SECTOR_ORDER, Stage::RasterizeSector, |c| {
                fill_arc(
                    c,
                    &geom.score_arc(),
                    arc_color,
                    self.style.edge_width,
                    geom.full_threshold_deg,
                )
            })
        };
        let inner = || {
            self.shape_layer(INNER_ORDER, Stage::RasterizeInnerDisk, |c| {
                fill_disk(
                    c,
                    geom.center,
                    geom.inner_radius,
                    self.style.inner_color,
                    self.style.edge_width,
                )
            })
        };

        let (track, sector, inner) = if self.style.parallel_layers {
            let (track, (sector, inner)) = rayon::join(track, || rayon::join(sector, inner));
            (track?, sector?, inner?)
        } else {
            (track()?, sector()?, inner()?)
        };

        let mut stack = LayerStack::new();
        stack.push(track);
        stack.push(sector);
        stack.push(inner);
        Ok(stack)
    }

    fn shape_layer(
        &self,
        order: u32,
        stage: Stage,
        draw: impl FnOnce(&mut Canvas) -> GaugeResult<()>,
    ) -> GaugeResult<Layer> {
        let mut layer = Layer::new(order, self.style.width, self.style.height)?;
        draw(&mut layer.canvas)?;
        layer.canvas = blur(
            &layer.canvas,
            self.style.blur_sigma,
            self.style.parallel_layers,
        )?;
        tracing::debug!(%stage, order, "layer rasterized");
        Ok(layer)
    }
}

fn validate_input(spec: &GaugeSpec) -> GaugeResult<ValidatedGauge> {
    let gauge = spec.validate()?;
    if !(0.0..=100.0).contains(&gauge.score) {
        tracing::warn!(
            score = gauge.score,
            "score outside 0..=100; drawing it anyway"
        );
    }
    tracing::debug!(
        stage = %Stage::ValidateInput,
        score = gauge.score,
        assessment = %gauge.assessment,
        "input validated"
    );
    Ok(gauge)
}

/// Render `spec` with `style` and the built-in label font.
pub fn render_gauge(spec: &GaugeSpec, style: &GaugeStyle) -> GaugeResult<Canvas> {
    GaugeRenderer::new(style.clone())?.render(spec)
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/pipeline.rs"]
mod tests;
