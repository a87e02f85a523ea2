use std::fmt;

use crate::foundation::error::{GaugeError, GaugeResult};
use crate::gauge::palette::Assessment;

/// Raw score as handed over by a score source: decimal text or a number.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ScoreInput {
    /// Already numeric.
    Number(f64),
    /// Decimal text, e.g. `"72.5"`. Surrounding whitespace is ignored.
    Text(String),
}

impl ScoreInput {
    /// Parse to a finite real number.
    pub fn parse(&self) -> GaugeResult<f64> {
        let value = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| GaugeError::invalid_score(s.as_str()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GaugeError::invalid_score(self.to_string()))
        }
    }
}

impl fmt::Display for ScoreInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ScoreInput {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for ScoreInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ScoreInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Untrusted request to draw one gauge.
///
/// Deserializes from `{"score": .., "assessment": ..}`; `health_score` is accepted in place of
/// `score`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GaugeSpec {
    /// Score in points; nominally `0..=100`.
    #[serde(alias = "health_score")]
    pub score: ScoreInput,
    /// One of `excellent`, `good`, `normal`, `poor`.
    pub assessment: String,
}

impl GaugeSpec {
    /// Build a spec from any score representation.
    pub fn new(score: impl Into<ScoreInput>, assessment: impl Into<String>) -> Self {
        Self {
            score: score.into(),
            assessment: assessment.into(),
        }
    }

    /// Parse the score and resolve the assessment.
    ///
    /// The score is checked first, so a request that is wrong in both ways reports
    /// [`GaugeError::InvalidScore`]. The numeric range is not clamped here.
    pub fn validate(&self) -> GaugeResult<ValidatedGauge> {
        let score = self.score.parse()?;
        let assessment = self.assessment.parse::<Assessment>()?;
        Ok(ValidatedGauge { score, assessment })
    }
}

/// A [`GaugeSpec`] that passed validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedGauge {
    /// Finite score.
    pub score: f64,
    /// Resolved category.
    pub assessment: Assessment,
}

#[cfg(test)]
#[path = "../../tests/unit/gauge/spec.rs"]
mod tests;
