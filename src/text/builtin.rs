use crate::foundation::error::GaugeResult;
use crate::text::bdf::parse_bdf;
use crate::text::font::BitmapFont;

const DIGITS_BDF: &str = include_str!("../../assets/digits-8x12.bdf");

/// The embedded 8x12 label font: `0-9`, `.`, `-`, `%` and space.
pub fn digits() -> GaugeResult<BitmapFont> {
    parse_bdf(DIGITS_BDF)
}

#[cfg(test)]
#[path = "../../tests/unit/text/builtin.rs"]
mod tests;
