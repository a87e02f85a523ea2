//! Bitmap text: fixed-cell fonts, BDF loading and the built-in label font.

/// BDF font reader.
pub mod bdf;
/// Embedded fonts.
pub mod builtin;
/// Scalable bitmap font and glyph renderer.
pub mod font;
