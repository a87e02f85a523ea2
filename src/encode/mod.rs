//! Output sinks.
//!
//! The rasterizer only produces RGBA8 canvases; sinks own encoding and persistence.

/// Sink trait plus PNG and in-memory sinks.
pub mod sink;
