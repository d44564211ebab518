//! Color ramp and line-count buckets.
//!
//! - [`interpolate_colors`]: linear RGB interpolation between two colors
//! - [`GradientTable`]: ordered buckets mapping line counts to ramp colors

mod color;
mod table;

pub use color::{Rgb, interpolate_colors};
pub use table::{Bucket, GradientTable};

/// Errors raised while building a color ramp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    #[error("invalid color {0:?}: expected six hex digits such as #C9464C")]
    InvalidColor(String),
    #[error("a color ramp needs at least 2 steps, got {steps}")]
    TooFewSteps { steps: usize },
    #[error("invalid line range {start}..={end}: start must be at least 1 and below end")]
    InvalidRange { start: usize, end: usize },
}
