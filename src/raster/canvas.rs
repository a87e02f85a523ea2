use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::foundation::math::Fnv1a64;

/// Straight-alpha RGBA8 pixel buffer, tightly packed and row-major.
///
/// Every pixel starts as transparent black. Coordinates outside `0..width` / `0..height` are
/// rejected, never wrapped.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a `width * height` canvas initialized to `(0, 0, 0, 0)`.
    pub fn new(width: u32, height: u32) -> GaugeResult<Self> {
        if width == 0 || height == 0 {
            return Err(GaugeError::validation("canvas dimensions must be > 0"));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| GaugeError::validation("canvas size overflow"))?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap existing straight-alpha RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> GaugeResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if width == 0 || height == 0 || data.len() != expected {
            return Err(GaugeError::validation(
                "from_rgba8 expects non-empty data matching width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Return `true` when `(x, y)` addresses a pixel of this canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Read back one pixel (straight alpha), or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Overwrite one pixel unconditionally. No blending happens here.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8) -> GaugeResult<()> {
        if x >= self.width || y >= self.height {
            return Err(GaugeError::validation(format!(
                "pixel ({x}, {y}) is outside the {}x{} canvas",
                self.width, self.height
            )));
        }
        self.put(x, y, color);
        Ok(())
    }

    /// Reset every pixel to `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let px = color.to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes, row-major.
    pub fn as_rgba8_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the canvas and return its bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.data
    }

    /// Stable 64-bit digest of dimensions and pixel bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }

    // Caller guarantees bounds.
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Rgba8) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    pub(crate) fn same_size(&self, other: &Canvas) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fingerprint", &format_args!("{:016x}", self.fingerprint()))
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
