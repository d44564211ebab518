//! Batch summary of how each file would be tinted, without a terminal.
//!
//! Every file is opened in a [`MemoryHost`], focused in turn, and the
//! decorations the gutter applied are read back.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::GradientConfig;
use crate::gradient::Rgb;
use crate::host::{HostDocument, MemoryHost};
use crate::lifecycle::GutterGradient;

/// Tinting of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub line_count: usize,
    /// 1-indexed tinted lines, if any.
    pub tinted: Option<RangeInclusive<usize>>,
    /// Color of the last line.
    pub tail: Option<Rgb>,
}

impl FileReport {
    pub fn tinted_count(&self) -> usize {
        self.tinted
            .as_ref()
            .map_or(0, |range| range.end() + 1 - range.start())
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} lines", self.path.display(), self.line_count)?;
        match (&self.tinted, self.tail) {
            (Some(range), Some(tail)) => write!(
                f,
                ", {} tinted ({}-{}), tail {tail}",
                self.tinted_count(),
                range.start(),
                range.end()
            ),
            _ => write!(f, ", untinted"),
        }
    }
}

/// Read every file and report its tinting under `config`.
///
/// # Errors
/// Returns an error if a file cannot be read or `config` is invalid.
pub fn build_reports<P: AsRef<Path>>(config: GradientConfig, files: &[P]) -> Result<Vec<FileReport>> {
    let mut host = MemoryHost::new();
    let mut ids = Vec::with_capacity(files.len());
    for path in files {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        ids.push((path.to_path_buf(), host.open(path.display().to_string(), &text)));
    }

    let mut gutter = GutterGradient::new(config);
    gutter
        .activate(&mut host)
        .context("Invalid gradient settings")?;

    let mut reports = Vec::with_capacity(ids.len());
    for (path, id) in ids {
        host.focus(id);
        for event in host.take_events() {
            gutter.handle_event(&mut host, event);
        }
        if let Some(doc) = host.document(id) {
            reports.push(summarize(&host, path, doc));
        }
    }

    gutter.deactivate(&mut host);
    Ok(reports)
}

fn summarize(host: &MemoryHost, path: PathBuf, doc: &HostDocument) -> FileReport {
    let line_count = doc.line_count();
    let tinted = doc
        .decorated_bounds()
        .map(|(first, last)| first + 1..=last + 1);
    FileReport {
        path,
        line_count,
        tinted,
        tail: host.color_at(doc.id, line_count.saturating_sub(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_lines(dir: &Path, name: &str, n: usize) -> PathBuf {
        let path = dir.join(name);
        let text: String = (1..=n).map(|i| format!("line {i}\n")).collect();
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_report_for_long_and_short_files() {
        let dir = tempdir().unwrap();
        let long = write_lines(dir.path(), "long.txt", 299);
        let short = write_lines(dir.path(), "short.txt", 10);

        let reports = build_reports(GradientConfig::default(), &[long, short]).unwrap();
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0].line_count, 300);
        assert_eq!(reports[0].tinted, Some(150..=300));
        assert_eq!(reports[0].tinted_count(), 151);
        assert_eq!(reports[0].tail, Some(Rgb::new(0xc9, 0x46, 0x4c)));

        assert_eq!(reports[1].tinted, None);
        assert!(reports[1].to_string().ends_with("11 lines, untinted"));
    }

    #[test]
    fn test_report_for_very_long_file() {
        let dir = tempdir().unwrap();
        let huge = write_lines(dir.path(), "huge.txt", 200_000);

        let reports = build_reports(GradientConfig::default(), &[huge]).unwrap();
        assert_eq!(reports[0].line_count, 200_001);
        assert_eq!(reports[0].tinted, Some(150..=200_001));
        assert_eq!(reports[0].tail, Some(Rgb::new(0xc9, 0x46, 0x4c)));
    }

    #[test]
    fn test_report_display() {
        let report = FileReport {
            path: PathBuf::from("a.rs"),
            line_count: 160,
            tinted: Some(150..=160),
            tail: Some(Rgb::new(0xfb, 0xed, 0xd8)),
        };
        assert_eq!(report.to_string(), "a.rs: 160 lines, 11 tinted (150-160), tail #fbedd8");
    }

    #[test]
    fn test_report_missing_file_errors() {
        let err = build_reports(GradientConfig::default(), &["/definitely/not/here.rs"]).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
