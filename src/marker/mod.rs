//! Gutter marker icons.
//!
//! Each bucket gets a small solid rectangle in its color. Hosts that draw
//! images take the SVG data URI or the raster; cell-based hosts just read the
//! color back out.

use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{Rgba, RgbaImage};

use crate::gradient::{Bucket, GradientTable, Rgb};
use crate::host::{EditorHost, StyleId};

/// Marker width in pixels.
pub const MARKER_WIDTH: u32 = 4;
/// Marker height in pixels; one editor line.
pub const MARKER_HEIGHT: u32 = 16;

/// A solid-color gutter icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerIcon {
    pub color: Rgb,
    pub width: u32,
    pub height: u32,
}

impl MarkerIcon {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            width: MARKER_WIDTH,
            height: MARKER_HEIGHT,
        }
    }

    /// Minimal SVG document: one filled rect covering the icon.
    pub fn svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"><rect width="{w}" height="{h}" fill="{color}"/></svg>"#,
            w = self.width,
            h = self.height,
            color = self.color,
        )
    }

    /// The SVG as a base64 `data:` URI, the form gutter icon paths accept.
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.svg()))
    }

    /// Opaque raster of the icon.
    pub fn to_image(&self) -> RgbaImage {
        let Rgb { r, g, b } = self.color;
        RgbaImage::from_pixel(self.width, self.height, Rgba([r, g, b, 255]))
    }

    /// Write the raster as PNG.
    ///
    /// # Errors
    /// Returns an error if the file cannot be encoded or written.
    pub fn write_png(&self, path: &Path) -> image::ImageResult<()> {
        self.to_image().save_with_format(path, image::ImageFormat::Png)
    }
}

/// A bucket bound to the host style that draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketStyle {
    pub bucket: Bucket,
    pub style: StyleId,
}

/// Register one gutter style per bucket, in table order.
pub fn render_markers<H: EditorHost + ?Sized>(
    host: &mut H,
    table: &GradientTable,
) -> Vec<BucketStyle> {
    table
        .buckets()
        .iter()
        .map(|bucket| BucketStyle {
            bucket: *bucket,
            style: host.create_gutter_style(&MarkerIcon::new(bucket.color)),
        })
        .collect()
}

/// File name for a bucket's exported icon, e.g. `bucket-0150.png` or
/// `bucket-0231-plus.png` for the catch-all.
pub fn icon_file_name(bucket: &Bucket) -> String {
    if bucket.is_unbounded() {
        format!("bucket-{:04}-plus.png", bucket.min_lines)
    } else {
        format!("bucket-{:04}.png", bucket.min_lines)
    }
}

/// Write every bucket icon in `table` into `dir` as PNG.
///
/// # Errors
/// Returns an error if the directory cannot be created or an icon fails to
/// write.
pub fn export_icons(table: &GradientTable, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create icon dir {}", dir.display()))?;
    table
        .buckets()
        .iter()
        .map(|bucket| {
            let path = dir.join(icon_file_name(bucket));
            MarkerIcon::new(bucket.color)
                .write_png(&path)
                .with_context(|| format!("Failed to write icon {}", path.display()))?;
            Ok(path)
        })
        .collect()
}
