//! Minimal reader for BDF (Glyph Bitmap Distribution Format) fonts.
//!
//! Only what a fixed-cell font needs is read: `FONT`, `FONTBOUNDINGBOX`, `ENCODING`, `BITMAP`
//! and `ENDCHAR`. Each glyph must fill the whole bounding box; glyphs that do not are skipped
//! with a warning while the rest of the font still loads.

use crate::foundation::error::{GaugeError, GaugeResult};
use crate::text::font::BitmapFont;

/// Parse BDF source into a [`BitmapFont`].
pub fn parse_bdf(src: &str) -> GaugeResult<BitmapFont> {
    let mut name = String::from("bdf");
    let mut font: Option<BitmapFont> = None;
    let mut encoding: Option<i64> = None;
    let mut rows: Option<Vec<&str>> = None;

    for (lineno, raw) in src.lines().enumerate() {
        let line = raw.trim();
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        if let Some(rows) = rows.as_mut()
            && keyword != "ENDCHAR"
        {
            rows.push(line);
            continue;
        }

        match keyword {
            "FONT" => {
                let rest = line["FONT".len()..].trim();
                if !rest.is_empty() {
                    name = rest.to_owned();
                }
            }
            "FONTBOUNDINGBOX" => {
                let w = parse_num(parts.next(), lineno, "FONTBOUNDINGBOX width")?;
                let h = parse_num(parts.next(), lineno, "FONTBOUNDINGBOX height")?;
                let (w, h) = (to_cell(w, lineno)?, to_cell(h, lineno)?);
                font = Some(BitmapFont::new(name.clone(), w, h)?);
            }
            "STARTCHAR" => encoding = None,
            "ENCODING" => encoding = Some(parse_num(parts.next(), lineno, "ENCODING")?),
            "BITMAP" => {
                if font.is_none() {
                    return Err(GaugeError::validation(format!(
                        "bdf line {}: BITMAP before FONTBOUNDINGBOX",
                        lineno + 1
                    )));
                }
                rows = Some(Vec::new());
            }
            "ENDCHAR" => {
                let (Some(f), Some(glyph_rows)) = (font.as_mut(), rows.take()) else {
                    continue;
                };
                let Some(ch) = encoding
                    .and_then(|e| u32::try_from(e).ok())
                    .and_then(char::from_u32)
                else {
                    tracing::warn!(
                        line = lineno + 1,
                        ?encoding,
                        "skipping glyph without a usable encoding"
                    );
                    continue;
                };
                let (w, _) = f.cell_size();
                let bits = decode_rows(&glyph_rows, w, lineno)?;
                if let Err(err) = f.add_glyph_bits(ch, &bits) {
                    tracing::warn!(%err, glyph = ?ch, "skipping bdf glyph");
                }
            }
            _ => {}
        }
    }

    if rows.is_some() {
        return Err(GaugeError::validation("bdf ended inside a BITMAP block"));
    }
    let mut font =
        font.ok_or_else(|| GaugeError::validation("bdf has no FONTBOUNDINGBOX line"))?;
    // FONT may come after FONTBOUNDINGBOX.
    font.set_name(name);
    tracing::debug!(name = font.name(), glyphs = font.glyph_count(), "parsed bdf font");
    Ok(font)
}

/// Expand MSB-first hex rows into one 0/1 byte per pixel, `width` pixels per row.
fn decode_rows(rows: &[&str], width: u32, lineno: usize) -> GaugeResult<Vec<u8>> {
    let bytes_per_row = width.div_ceil(8) as usize;
    let mut out = Vec::with_capacity(rows.len() * width as usize);
    for row in rows {
        if row.len() < bytes_per_row * 2 || !row.is_ascii() {
            return Err(GaugeError::validation(format!(
                "bdf glyph ending at line {}: row {row:?} is shorter than {bytes_per_row} bytes",
                lineno + 1
            )));
        }
        for x in 0..width as usize {
            let byte_hex = &row[(x / 8) * 2..(x / 8) * 2 + 2];
            let byte = u8::from_str_radix(byte_hex, 16).map_err(|_| {
                GaugeError::validation(format!(
                    "bdf glyph ending at line {}: invalid hex {byte_hex:?}",
                    lineno + 1
                ))
            })?;
            out.push((byte >> (7 - (x % 8))) & 1);
        }
    }
    Ok(out)
}

fn parse_num(tok: Option<&str>, lineno: usize, what: &str) -> GaugeResult<i64> {
    tok.and_then(|t| t.parse::<i64>().ok()).ok_or_else(|| {
        GaugeError::validation(format!("bdf line {}: missing or invalid {what}", lineno + 1))
    })
}

fn to_cell(v: i64, lineno: usize) -> GaugeResult<u32> {
    u32::try_from(v)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| {
            GaugeError::validation(format!("bdf line {}: cell size must be > 0", lineno + 1))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/text/bdf.rs"]
mod tests;
