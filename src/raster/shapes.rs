//! Analytic, signed-distance based shape rasterizers.
//!
//! Shapes write their fixed color with `alpha = color.a * coverage` into a layer canvas. Nothing
//! is blended here; layers are merged later by [`crate::LayerStack`].
//!
//! Angles are in degrees, measured clockwise from 12 o'clock (screen space, y down).

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{Point, Rgba8, Vec2};
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::foundation::math::{normalize_degrees, normalize_radians, smoothstep, u8_from_unit};
use crate::raster::canvas::Canvas;

/// Disk coverage at distance `d` from the center, for radius `r` and edge width `e`.
///
/// `1` inside `r - e`, `smoothstep((r - d) / e)` across the edge band, `0` beyond `r`.
/// A non-positive `e` gives a hard edge.
pub fn disk_coverage(d: f64, r: f64, e: f64) -> f64 {
    if d > r {
        return 0.0;
    }
    if e <= 0.0 || d <= r - e {
        return 1.0;
    }
    smoothstep((r - d) / e)
}

/// Whether `angle` lies on the clockwise interval from `start` to `end` (radians).
///
/// All three are normalized into `[0, 2π)` first; `start > end` is the wrapped interval
/// `[start, 2π) ∪ [0, end]`.
pub fn angle_between(angle: f64, start: f64, end: f64) -> bool {
    let (a, s, e) = (
        normalize_radians(angle),
        normalize_radians(start),
        normalize_radians(end),
    );
    if s <= e {
        a >= s && a <= e
    } else {
        a >= s || a <= e
    }
}

/// Clockwise angle from 12 o'clock of the offset `(dx, dy)`, in `[0, 2π)`.
pub fn clock_angle(dx: f64, dy: f64) -> f64 {
    normalize_radians(dx.atan2(-dy))
}

/// Pie-shaped sector of a circle: `sweep_deg` degrees clockwise from `start_deg`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Arc {
    /// Circle center in pixel coordinates.
    pub center: Point,
    /// Outer radius in pixels.
    pub radius: f64,
    /// Start angle, degrees clockwise from 12 o'clock.
    pub start_deg: f64,
    /// Clockwise sweep in degrees. May exceed 360.
    pub sweep_deg: f64,
}

impl Arc {
    /// End angle, normalized into `[0, 360)`.
    pub fn end_deg(&self) -> f64 {
        normalize_degrees(self.start_deg + self.sweep_deg)
    }
}

/// One rasterization pass needed to draw an [`Arc`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectorDraw {
    /// Full disk; used when start and end would (nearly) coincide.
    Full,
    /// Ordinary sector with `0 < sweep_deg < 360` and `sweep_deg <= full_threshold_deg`.
    Partial {
        /// Start angle in `[0, 360)`.
        start_deg: f64,
        /// Clockwise sweep in degrees.
        sweep_deg: f64,
    },
}

/// Split a sweep into passes that each fit in one turn.
///
/// - non-positive (or NaN) sweep draws nothing
/// - a piece above `full_threshold_deg`, or spanning a whole turn, becomes [`SectorDraw::Full`]
/// - a sweep past 360° is cut at the 0° boundary: `[start, 360)` then `[0, rest)`
///
/// Sweeps beyond two turns draw the same pixels as two turns and are capped there.
pub fn plan_sweep(start_deg: f64, sweep_deg: f64, full_threshold_deg: f64) -> Vec<SectorDraw> {
    if sweep_deg.is_nan() || sweep_deg <= 0.0 {
        return Vec::new();
    }
    let piece = |start: f64, sweep: f64| {
        if sweep > full_threshold_deg || sweep >= 360.0 {
            SectorDraw::Full
        } else {
            SectorDraw::Partial {
                start_deg: start,
                sweep_deg: sweep,
            }
        }
    };

    let start = normalize_degrees(start_deg);
    if sweep_deg <= 360.0 {
        return vec![piece(start, sweep_deg)];
    }

    let sweep = sweep_deg.min(720.0);
    let first = 360.0 - start;
    let mut out = vec![piece(start, first)];
    let mut rest = sweep - first;
    while rest > 0.0 {
        let take = rest.min(360.0);
        out.push(piece(0.0, take));
        rest -= take;
    }
    out
}

/// Fill an anti-aliased disk into `canvas`.
pub fn fill_disk(
    canvas: &mut Canvas,
    center: Point,
    radius: f64,
    color: Rgba8,
    edge: f64,
) -> GaugeResult<()> {
    validate_geometry(center, radius, edge)?;
    let Some(bounds) = PixelBounds::around(canvas, center, radius) else {
        return Ok(());
    };
    for y in bounds.y0..bounds.y1 {
        for x in bounds.x0..bounds.x1 {
            let cov = disk_coverage(pixel_offset(center, x, y).hypot(), radius, edge);
            write_coverage(canvas, x, y, color, cov);
        }
    }
    Ok(())
}

/// Fill an anti-aliased sector (no inner cutout) into `canvas`.
///
/// Full turns and wraparound are resolved with [`plan_sweep`].
pub fn fill_arc(
    canvas: &mut Canvas,
    arc: &Arc,
    color: Rgba8,
    edge: f64,
    full_threshold_deg: f64,
) -> GaugeResult<()> {
    validate_geometry(arc.center, arc.radius, edge)?;
    if !arc.start_deg.is_finite() {
        return Err(GaugeError::validation("arc start angle must be finite"));
    }
    let passes = plan_sweep(arc.start_deg, arc.sweep_deg, full_threshold_deg);
    // Pieces of a sweep past one turn jointly cover the ring; drawing them one by one would
    // leave an anti-aliased seam at 0°.
    if passes.len() > 1 || passes.contains(&SectorDraw::Full) {
        return fill_disk(canvas, arc.center, arc.radius, color, edge);
    }
    if let Some(SectorDraw::Partial {
        start_deg,
        sweep_deg,
    }) = passes.first()
    {
        fill_partial_sector(canvas, arc, *start_deg, *sweep_deg, color, edge);
    }
    Ok(())
}

fn fill_partial_sector(
    canvas: &mut Canvas,
    arc: &Arc,
    start_deg: f64,
    sweep_deg: f64,
    color: Rgba8,
    edge: f64,
) {
    let Some(bounds) = PixelBounds::around(canvas, arc.center, arc.radius) else {
        return;
    };
    let start = start_deg.to_radians();
    let end = (start_deg + sweep_deg).to_radians();

    for y in bounds.y0..bounds.y1 {
        for x in bounds.x0..bounds.x1 {
            let v = pixel_offset(arc.center, x, y);
            let d = v.hypot();
            let radial = disk_coverage(d, arc.radius, edge);
            if radial <= 0.0 {
                continue;
            }
            let phi = clock_angle(v.x, v.y);
            if !angle_between(phi, start, end) {
                continue;
            }
            let to_start = ray_distance(d, normalize_radians(phi - start));
            let to_end = ray_distance(d, normalize_radians(end - phi));
            let angular = if edge > 0.0 {
                smoothstep(to_start.min(to_end) / edge)
            } else {
                1.0
            };
            write_coverage(canvas, x, y, color, radial * angular);
        }
    }
}

// Distance from a point at radius `d` to a boundary ray `delta` radians away.
fn ray_distance(d: f64, delta: f64) -> f64 {
    let delta = delta.min(TAU - delta);
    if delta >= FRAC_PI_2 {
        d
    } else {
        d * delta.sin()
    }
}

fn validate_geometry(center: Point, radius: f64, edge: f64) -> GaugeResult<()> {
    if !center.x.is_finite() || !center.y.is_finite() {
        return Err(GaugeError::validation("shape center must be finite"));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(GaugeError::validation("shape radius must be finite and >= 0"));
    }
    if !edge.is_finite() || edge < 0.0 {
        return Err(GaugeError::validation("edge width must be finite and >= 0"));
    }
    Ok(())
}

fn pixel_offset(center: Point, x: u32, y: u32) -> Vec2 {
    Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5) - center
}

fn write_coverage(canvas: &mut Canvas, x: u32, y: u32, color: Rgba8, coverage: f64) {
    if coverage <= 0.0 {
        return;
    }
    let a = u8_from_unit(f64::from(color.a) / 255.0 * coverage);
    if a > 0 {
        canvas.put(x, y, color.with_alpha(a));
    }
}

/// Half-open pixel rectangle clipped to a canvas.
struct PixelBounds {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelBounds {
    fn around(canvas: &Canvas, center: Point, radius: f64) -> Option<Self> {
        let reach = radius + 1.0;
        let clip = |v: f64, max: u32| v.clamp(0.0, f64::from(max)) as u32;
        let b = Self {
            x0: clip((center.x - reach).floor(), canvas.width()),
            y0: clip((center.y - reach).floor(), canvas.height()),
            x1: clip((center.x + reach).ceil(), canvas.width()),
            y1: clip((center.y + reach).ceil(), canvas.height()),
        };
        (b.x0 < b.x1 && b.y0 < b.y1).then_some(b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
