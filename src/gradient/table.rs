use std::ops::RangeInclusive;

use super::{GradientError, Rgb, interpolate_colors};
use crate::config::GradientConfig;

/// An inclusive range of 1-indexed line numbers sharing one gutter color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// First line number tinted by this bucket.
    pub min_lines: usize,
    /// Last line number tinted by this bucket; `None` means unbounded.
    pub max_lines: Option<usize>,
    pub color: Rgb,
}

impl Bucket {
    /// Whether the 1-indexed line number `line` falls in this bucket.
    pub fn contains(&self, line: usize) -> bool {
        line >= self.min_lines && self.max_lines.is_none_or(|max| line <= max)
    }

    pub const fn is_unbounded(&self) -> bool {
        self.max_lines.is_none()
    }

    /// The 0-indexed lines this bucket tints in a document of `line_count`
    /// lines, or `None` when the document is too short to reach it.
    pub fn line_range(&self, line_count: usize) -> Option<RangeInclusive<usize>> {
        if line_count == 0 || line_count < self.min_lines {
            return None;
        }
        let start = self.min_lines.saturating_sub(1);
        let end = self
            .max_lines
            .map_or(line_count - 1, |max| (line_count - 1).min(max.saturating_sub(1)));
        (start <= end).then_some(start..=end)
    }
}

/// The ordered bucket list: one bucket per line number from the start line
/// through the end line, then a catch-all bucket past the end line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientTable {
    buckets: Vec<Bucket>,
}

impl GradientTable {
    /// Build the table for `config`.
    ///
    /// # Errors
    /// Returns [`GradientError::InvalidRange`] when the start line is 0 or
    /// not below the end line.
    pub fn build(config: &GradientConfig) -> Result<Self, GradientError> {
        let (start, end) = (config.start_line, config.end_line);
        if start == 0 || end <= start {
            return Err(GradientError::InvalidRange { start, end });
        }
        let colors = interpolate_colors(config.start_color, config.end_color, end - start + 1)?;

        let mut buckets = Vec::with_capacity(colors.len() + 1);
        buckets.extend(colors.into_iter().zip(start..).map(|(color, line)| Bucket {
            min_lines: line,
            max_lines: Some(line),
            color,
        }));
        buckets.push(Bucket {
            min_lines: end + 1,
            max_lines: None,
            color: config.end_color,
        });

        tracing::debug!(buckets = buckets.len(), start, end, "built gradient table");
        Ok(Self { buckets })
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Index and bucket covering the 1-indexed line number `line`.
    pub fn bucket_for_line(&self, line: usize) -> Option<(usize, &Bucket)> {
        let first = self.buckets.first()?;
        if line < first.min_lines {
            return None;
        }
        // Single-line buckets are consecutive, so the offset is the index.
        let index = (line - first.min_lines).min(self.buckets.len() - 1);
        self.buckets.get(index).map(|bucket| (index, bucket))
    }
}
