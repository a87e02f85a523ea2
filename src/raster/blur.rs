use rayon::prelude::*;

use crate::foundation::error::{GaugeError, GaugeResult};
use crate::foundation::math::u8_from_unit;
use crate::raster::canvas::Canvas;

/// Normalized 1-D Gaussian kernel sampled at integer offsets `-k..=k`, `k = ⌈3σ⌉`.
///
/// Weights are `exp(-x² / 2σ²)` divided by their sum, so they add up to 1.
pub fn gaussian_kernel(sigma: f64) -> GaugeResult<Vec<f64>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(GaugeError::validation("blur sigma must be finite and > 0"));
    }

    let r = (3.0 * sigma).ceil().max(1.0) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return Err(GaugeError::validation("gaussian kernel sum is zero"));
    }
    for w in &mut weights {
        *w /= sum;
    }
    Ok(weights)
}

/// Separable Gaussian blur: horizontal pass, then vertical pass, edge-clamped.
///
/// Channels are convolved independently. The convolution runs on premultiplied values so that
/// transparent neighbours fade coverage without darkening color; uniform input is unchanged.
/// `sigma == 0` returns an unmodified copy.
pub fn blur(src: &Canvas, sigma: f64, parallel: bool) -> GaugeResult<Canvas> {
    if sigma == 0.0 {
        return Ok(src.clone());
    }
    let kernel = gaussian_kernel(sigma)?;

    let (w, h) = (src.width() as usize, src.height() as usize);
    let premul: Vec<f64> = src
        .as_rgba8()
        .chunks_exact(4)
        .flat_map(|px| {
            let a = f64::from(px[3]) / 255.0;
            [
                f64::from(px[0]) / 255.0 * a,
                f64::from(px[1]) / 255.0 * a,
                f64::from(px[2]) / 255.0 * a,
                a,
            ]
        })
        .collect();

    let mut tmp = vec![0.0f64; premul.len()];
    let mut out = vec![0.0f64; premul.len()];
    let row_len = w * 4;

    let horizontal = |y: usize, row: &mut [f64]| horizontal_row(&premul, row, y, w, &kernel);
    if parallel {
        tmp.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| horizontal(y, row));
    } else {
        tmp.chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| horizontal(y, row));
    }

    let vertical = |y: usize, row: &mut [f64]| vertical_row(&tmp, row, y, w, h, &kernel);
    if parallel {
        out.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| vertical(y, row));
    } else {
        out.chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| vertical(y, row));
    }

    let mut bytes = Vec::with_capacity(out.len());
    for px in out.chunks_exact(4) {
        let a = px[3].clamp(0.0, 1.0);
        let a8 = u8_from_unit(a);
        if a8 == 0 {
            bytes.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        bytes.extend_from_slice(&[
            u8_from_unit(px[0] / a),
            u8_from_unit(px[1] / a),
            u8_from_unit(px[2] / a),
            a8,
        ]);
    }
    Canvas::from_rgba8(src.width(), src.height(), bytes)
}

fn horizontal_row(src: &[f64], dst: &mut [f64], y: usize, w: usize, k: &[f64]) {
    let radius = (k.len() / 2) as isize;
    let last = w as isize - 1;
    for x in 0..w {
        let mut acc = [0.0f64; 4];
        for (ki, &kw) in k.iter().enumerate() {
            let sx = (x as isize + ki as isize - radius).clamp(0, last) as usize;
            let idx = (y * w + sx) * 4;
            for c in 0..4 {
                acc[c] += kw * src[idx + c];
            }
        }
        dst[x * 4..x * 4 + 4].copy_from_slice(&acc);
    }
}

fn vertical_row(src: &[f64], dst: &mut [f64], y: usize, w: usize, h: usize, k: &[f64]) {
    let radius = (k.len() / 2) as isize;
    let last = h as isize - 1;
    for x in 0..w {
        let mut acc = [0.0f64; 4];
        for (ki, &kw) in k.iter().enumerate() {
            let sy = (y as isize + ki as isize - radius).clamp(0, last) as usize;
            let idx = (sy * w + x) * 4;
            for c in 0..4 {
                acc[c] += kw * src[idx + c];
            }
        }
        dst[x * 4..x * 4 + 4].copy_from_slice(&acc);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
