use std::collections::BTreeMap;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::raster::canvas::Canvas;
use crate::raster::composite::blend_pixel;

/// Fixed-cell bitmap font drawn at a continuous scale with bilinear resampling.
///
/// Every glyph is a `cell_width * cell_height` grid of coverage samples in `[0, 1]`, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct BitmapFont {
    name: String,
    cell_width: u32,
    cell_height: u32,
    scale: f64,
    spacing: u32,
    glyphs: BTreeMap<char, Vec<f32>>,
}

impl BitmapFont {
    /// Largest accepted scale factor.
    pub const MAX_SCALE: f64 = 64.0;

    /// Empty font with scale 1 and one cell pixel of spacing.
    pub fn new(name: impl Into<String>, cell_width: u32, cell_height: u32) -> GaugeResult<Self> {
        if cell_width == 0 || cell_height == 0 {
            return Err(GaugeError::validation("font cell size must be > 0"));
        }
        Ok(Self {
            name: name.into(),
            cell_width,
            cell_height,
            scale: 1.0,
            spacing: 1,
            glyphs: BTreeMap::new(),
        })
    }

    /// Font name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the font.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Unscaled `(width, height)` of one glyph cell.
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// Current scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale factor; must be finite and in `(0, MAX_SCALE]`.
    pub fn set_scale(&mut self, scale: f64) -> GaugeResult<()> {
        if !scale.is_finite() || scale <= 0.0 || scale > Self::MAX_SCALE {
            return Err(GaugeError::validation(format!(
                "font scale must be finite and in (0, {}]",
                Self::MAX_SCALE
            )));
        }
        self.scale = scale;
        Ok(())
    }

    /// Builder form of [`BitmapFont::set_scale`].
    pub fn with_scale(mut self, scale: f64) -> GaugeResult<Self> {
        self.set_scale(scale)?;
        Ok(self)
    }

    /// Unscaled gap between glyphs, in cell pixels.
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Set the unscaled gap between glyphs.
    pub fn set_spacing(&mut self, spacing: u32) {
        self.spacing = spacing;
    }

    /// Register (or replace) the bitmap for `glyph`.
    ///
    /// Fails with [`GaugeError::GlyphSizeMismatch`] unless the bitmap has exactly
    /// `cell_width * cell_height` samples; the font is left unchanged in that case.
    pub fn add_glyph(&mut self, glyph: char, bitmap: Vec<f32>) -> GaugeResult<()> {
        let want = (self.cell_width as usize) * (self.cell_height as usize);
        if bitmap.len() != want {
            return Err(GaugeError::GlyphSizeMismatch {
                glyph,
                got: bitmap.len(),
                want,
            });
        }
        let bitmap = bitmap
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 })
            .collect();
        self.glyphs.insert(glyph, bitmap);
        Ok(())
    }

    /// Register a 0/1 bitmap; any non-zero byte is full coverage.
    pub fn add_glyph_bits(&mut self, glyph: char, bits: &[u8]) -> GaugeResult<()> {
        self.add_glyph(
            glyph,
            bits.iter().map(|&b| if b != 0 { 1.0 } else { 0.0 }).collect(),
        )
    }

    /// Coverage samples for `glyph`, if registered.
    pub fn glyph(&self, glyph: char) -> Option<&[f32]> {
        self.glyphs.get(&glyph).map(Vec::as_slice)
    }

    /// Number of registered glyphs.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Scaled glyph box in whole output pixels (truncated).
    pub fn scaled_size(&self) -> (u32, u32) {
        (
            (f64::from(self.cell_width) * self.scale) as u32,
            (f64::from(self.cell_height) * self.scale) as u32,
        )
    }

    /// Scaled inter-glyph gap in whole output pixels (truncated).
    pub fn scaled_spacing(&self) -> u32 {
        (f64::from(self.spacing) * self.scale) as u32
    }

    /// Rendered width of `text`: `Σ(scaled_width + scaled_spacing) − scaled_spacing`.
    ///
    /// Characters missing from the font take no room. Saturates at `u32::MAX`.
    pub fn measure(&self, text: &str) -> u32 {
        let n = text.chars().filter(|c| self.glyphs.contains_key(c)).count();
        if n == 0 {
            return 0;
        }
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        let (w, _) = self.scaled_size();
        n.saturating_mul(w)
            .saturating_add((n - 1).saturating_mul(self.scaled_spacing()))
    }

    /// Draw `text` left to right with its top-left corner at `(x, y)`.
    ///
    /// Each glyph is blended over the existing pixels ("over", straight alpha) using the
    /// bilinearly resampled coverage as alpha. Pixels outside the canvas are clipped and missing
    /// characters are skipped. Returns the number of glyphs drawn.
    pub fn draw_text(&self, canvas: &mut Canvas, x: i64, y: i64, text: &str, color: Rgba8) -> usize {
        let advance = i64::from(self.advance());
        let mut cursor = x;
        let mut drawn = 0;
        for ch in text.chars() {
            let Some(bitmap) = self.glyph(ch) else {
                continue;
            };
            self.draw_glyph(canvas, cursor, y, bitmap, color);
            cursor = cursor.saturating_add(advance);
            drawn += 1;
        }
        drawn
    }

    /// Draw `text` centered on `center`, horizontally and vertically.
    pub fn draw_text_centered(
        &self,
        canvas: &mut Canvas,
        center: Point,
        text: &str,
        color: Rgba8,
    ) -> usize {
        let (x, y) = self.centered_origin(center, text);
        self.draw_text(canvas, x, y, text, color)
    }

    /// Top-left origin that centers `text` on `center`.
    pub fn centered_origin(&self, center: Point, text: &str) -> (i64, i64) {
        let (_, h) = self.scaled_size();
        let x = (center.x - f64::from(self.measure(text)) / 2.0).round() as i64;
        let y = (center.y - f64::from(h) / 2.0).round() as i64;
        (x, y)
    }

    fn advance(&self) -> u32 {
        let (w, _) = self.scaled_size();
        w.saturating_add(self.scaled_spacing())
    }

    fn draw_glyph(&self, canvas: &mut Canvas, x: i64, y: i64, bitmap: &[f32], color: Rgba8) {
        let (sw, sh) = self.scaled_size();
        for dy in 0..sh {
            for dx in 0..sw {
                let intensity = self.sample(
                    bitmap,
                    f64::from(dx) / self.scale,
                    f64::from(dy) / self.scale,
                );
                blend_pixel(
                    canvas,
                    x.saturating_add(i64::from(dx)),
                    y.saturating_add(i64::from(dy)),
                    color,
                    intensity,
                );
            }
        }
    }

    // Bilinear sample at source coordinate (ox, oy); neighbours clamp to the last row/column.
    fn sample(&self, bitmap: &[f32], ox: f64, oy: f64) -> f64 {
        let max_x = self.cell_width - 1;
        let max_y = self.cell_height - 1;
        let x0 = (ox.floor().max(0.0) as u32).min(max_x);
        let y0 = (oy.floor().max(0.0) as u32).min(max_y);
        let x1 = (x0 + 1).min(max_x);
        let y1 = (y0 + 1).min(max_y);
        let fx = (ox - f64::from(x0)).clamp(0.0, 1.0);
        let fy = (oy - f64::from(y0)).clamp(0.0, 1.0);

        let at = |x: u32, y: u32| f64::from(bitmap[(y * self.cell_width + x) as usize]);
        at(x0, y0) * (1.0 - fx) * (1.0 - fy)
            + at(x1, y0) * fx * (1.0 - fy)
            + at(x0, y1) * (1.0 - fx) * fy
            + at(x1, y1) * fx * fy
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
