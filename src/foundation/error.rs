use std::path::PathBuf;

/// Convenience result type used across arcgauge.
pub type GaugeResult<T> = Result<T, GaugeError>;

/// Top-level error taxonomy used by the rasterizer and gauge APIs.
#[derive(thiserror::Error, Debug)]
pub enum GaugeError {
    /// Score text could not be parsed as a finite real number.
    #[error("invalid score: {input:?} is not a finite number")]
    InvalidScore {
        /// The raw score text as supplied by the caller.
        input: String,
    },

    /// Assessment category is not part of the fixed palette.
    #[error("unknown assessment: {name:?} (expected excellent, good, normal or poor)")]
    UnknownAssessment {
        /// The rejected category name.
        name: String,
    },

    /// A glyph bitmap does not match the font's declared cell size.
    #[error("glyph size mismatch for {glyph:?}: got {got} samples, want {want}")]
    GlyphSizeMismatch {
        /// Character the bitmap was registered for.
        glyph: char,
        /// Number of samples supplied.
        got: usize,
        /// `cell_width * cell_height`.
        want: usize,
    },

    /// The output sink could not persist the rendered image.
    #[error("output write failure for '{}': {source}", .target.display())]
    OutputWriteFailure {
        /// Destination the sink was asked to write.
        target: PathBuf,
        /// Underlying I/O or encoder failure.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration, geometry or font data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Anything else, with its original source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GaugeError {
    /// Build a [`GaugeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GaugeError::InvalidScore`].
    pub fn invalid_score(input: impl Into<String>) -> Self {
        Self::InvalidScore {
            input: input.into(),
        }
    }

    /// Build a [`GaugeError::UnknownAssessment`].
    pub fn unknown_assessment(name: impl Into<String>) -> Self {
        Self::UnknownAssessment { name: name.into() }
    }

    /// Build a [`GaugeError::OutputWriteFailure`].
    pub fn output_write(target: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWriteFailure {
            target: target.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
