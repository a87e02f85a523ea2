//! The gauge itself: input validation, styling, geometry and the staged render pipeline.

/// Layer geometry and label text derived from a score.
pub mod geometry;
/// Assessment categories and their colors.
pub mod palette;
/// Render pipeline.
pub mod pipeline;
/// Untrusted gauge requests.
pub mod spec;
/// Tunable drawing constants.
pub mod style;
