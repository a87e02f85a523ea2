use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::foundation::math::{u8_from_unit, unit_from_u8};
use crate::raster::canvas::Canvas;

/// Straight-alpha "over": `overlay` on top of `base`.
///
/// ```text
/// outA = oA + bA·(1 − oA)
/// outC = (oC·oA + bC·bA·(1 − oA)) / outA      (0 when outA = 0)
/// ```
pub fn over(base: Rgba8, overlay: Rgba8) -> Rgba8 {
    if overlay.a == 0 {
        return base;
    }
    if overlay.a == 255 {
        return overlay;
    }

    let oa = unit_from_u8(overlay.a);
    let ba = unit_from_u8(base.a);
    let keep = ba * (1.0 - oa);
    let out_a = oa + keep;
    if out_a <= 0.0 {
        return Rgba8::TRANSPARENT;
    }

    let mix = |o: u8, b: u8| (unit_from_u8(o) * oa + unit_from_u8(b) * keep) / out_a;
    Rgba8::new(
        u8_from_unit(mix(overlay.r, base.r)),
        u8_from_unit(mix(overlay.g, base.g)),
        u8_from_unit(mix(overlay.b, base.b)),
        u8_from_unit(out_a),
    )
}

/// Blend `color` at `coverage` (0..=1, multiplied into its alpha) over the pixel at `(x, y)`.
///
/// Out-of-bounds coordinates are skipped.
pub fn blend_pixel(canvas: &mut Canvas, x: i64, y: i64, color: Rgba8, coverage: f64) {
    if !canvas.contains(x, y) || coverage <= 0.0 {
        return;
    }
    let a = u8_from_unit(unit_from_u8(color.a) * coverage);
    if a == 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let Some(base) = canvas.get(x, y) else {
        return;
    };
    canvas.put(x, y, over(base, color.with_alpha(a)));
}

/// Composite `overlay` onto `base` in place with [`over`].
pub fn composite_over(base: &mut Canvas, overlay: &Canvas) -> GaugeResult<()> {
    if !base.same_size(overlay) {
        return Err(GaugeError::validation(format!(
            "composite_over expects equal sizes, got {}x{} and {}x{}",
            base.width(),
            base.height(),
            overlay.width(),
            overlay.height()
        )));
    }
    for (d, s) in base
        .as_rgba8_mut()
        .chunks_exact_mut(4)
        .zip(overlay.as_rgba8().chunks_exact(4))
    {
        if s[3] == 0 {
            continue;
        }
        let out = over(
            Rgba8::new(d[0], d[1], d[2], d[3]),
            Rgba8::new(s[0], s[1], s[2], s[3]),
        );
        d.copy_from_slice(&out.to_array());
    }
    Ok(())
}

/// A canvas tagged with its draw order. Lower orders are composited first.
#[derive(Clone, Debug)]
pub struct Layer {
    /// Back-to-front position in the stack.
    pub order: u32,
    /// Pixels owned by this layer.
    pub canvas: Canvas,
}

impl Layer {
    /// Allocate a transparent layer.
    pub fn new(order: u32, width: u32, height: u32) -> GaugeResult<Self> {
        Ok(Self {
            order,
            canvas: Canvas::new(width, height)?,
        })
    }
}

/// Ordered stack of independently rendered layers.
#[derive(Clone, Debug, Default)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer. Layers sharing an order keep insertion order.
    pub fn push(&mut self, layer: Layer) {
        let at = self.layers.partition_point(|l| l.order <= layer.order);
        self.layers.insert(at, layer);
    }

    /// Number of layers held.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Return `true` when no layer has been pushed.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer orders, back to front.
    pub fn orders(&self) -> Vec<u32> {
        self.layers.iter().map(|l| l.order).collect()
    }

    /// Merge every layer onto `base`, back to front, consuming the stack.
    pub fn flatten_onto(self, base: &mut Canvas) -> GaugeResult<()> {
        for layer in self.layers {
            composite_over(base, &layer.canvas)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
