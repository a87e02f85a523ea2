use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Rgba8;
use crate::foundation::error::GaugeError;

/// Assessment category; selects the color of the score arc.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Assessment {
    /// `#b4de66`
    Excellent,
    /// `#f5c70f`
    Good,
    /// `#f59c3d`
    Normal,
    /// `#f76d6a`
    Poor,
}

impl Assessment {
    /// All categories, best first.
    pub const ALL: [Assessment; 4] = [Self::Excellent, Self::Good, Self::Normal, Self::Poor];

    /// Opaque arc color for this category.
    pub const fn color(self) -> Rgba8 {
        match self {
            Self::Excellent => Rgba8::opaque(0xb4, 0xde, 0x66),
            Self::Good => Rgba8::opaque(0xf5, 0xc7, 0x0f),
            Self::Normal => Rgba8::opaque(0xf5, 0x9c, 0x3d),
            Self::Poor => Rgba8::opaque(0xf7, 0x6d, 0x6a),
        }
    }

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Normal => "normal",
            Self::Poor => "poor",
        }
    }

    /// Category implied by a bare score: `> 90.9999` excellent, `> 80.9999` good,
    /// `> 60.9999` normal, anything else (NaN included) poor.
    pub fn from_score(score: f64) -> Self {
        if score > 90.9999 {
            Self::Excellent
        } else if score > 80.9999 {
            Self::Good
        } else if score > 60.9999 {
            Self::Normal
        } else {
            Self::Poor
        }
    }
}

impl FromStr for Assessment {
    type Err = GaugeError;

    /// Exact match on the four lowercase names; anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| GaugeError::unknown_assessment(s))
    }
}

impl TryFrom<String> for Assessment {
    type Error = GaugeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Assessment> for String {
    fn from(a: Assessment) -> Self {
        a.as_str().to_owned()
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/palette.rs"]
mod tests;
