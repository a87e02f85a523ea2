//! arcgauge is a small software rasterizer for circular score gauges.
//!
//! A gauge is three anti-aliased shape layers (track disk, score sector, inner disk) blurred,
//! composited back to front with the straight-alpha "over" operator, then labelled with the
//! score in a scalable bitmap font:
//!
//! - Describe the request with a [`GaugeSpec`] and the look with a [`GaugeStyle`]
//! - Create a [`GaugeRenderer`]
//! - Render to a [`Canvas`] or straight into a [`CanvasSink`] such as [`PngFileSink`]
//!
//! The raster primitives ([`raster`]) and the font machinery ([`text`]) are usable on their own.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Output sinks.
pub mod encode;
/// Gauge request, style and render pipeline.
pub mod gauge;
/// Canvas, shape rasterizers, blur and compositing.
pub mod raster;
/// Bitmap fonts and text drawing.
pub mod text;

pub use crate::foundation::core::{Point, Rgba8, Vec2};
pub use crate::foundation::error::{GaugeError, GaugeResult};
pub use crate::foundation::math::{normalize_degrees, normalize_radians, smoothstep};

pub use crate::encode::sink::{CanvasSink, InMemorySink, PngFileSink};
pub use crate::gauge::geometry::GaugeGeometry;
pub use crate::gauge::palette::Assessment;
pub use crate::gauge::pipeline::{GaugeRenderer, Stage, render_gauge};
pub use crate::gauge::spec::{GaugeSpec, ScoreInput, ValidatedGauge};
pub use crate::gauge::style::GaugeStyle;
pub use crate::raster::canvas::Canvas;
pub use crate::raster::composite::{Layer, LayerStack};
pub use crate::text::font::BitmapFont;
