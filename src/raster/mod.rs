//! Pixel-level building blocks.
//!
//! Rasterizers write into their own layer [`canvas::Canvas`]; only [`composite`] blends.

/// Separable Gaussian blur.
pub mod blur;
/// RGBA8 pixel buffer.
pub mod canvas;
/// Straight-alpha compositing and layer stacks.
pub mod composite;
/// Disk and sector rasterizers.
pub mod shapes;
