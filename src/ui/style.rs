//! Colors and styles for the terminal view.
//!
//! The gutter marker is a single cell painted with the bucket color; the
//! rest of the view sticks to ANSI colors so it follows the terminal theme.

use ratatui::style::{Color, Modifier, Style};

use crate::app::ToastLevel;
use crate::gradient::Rgb;

/// Character drawn in a tinted gutter cell.
pub const GUTTER_MARK: &str = "\u{258c}";

pub const fn color_of(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Style of the gutter cell for a line, tinted when a marker applies.
pub fn gutter_style(marker: Option<Rgb>) -> Style {
    match marker {
        Some(rgb) => Style::default().fg(color_of(rgb)).bg(color_of(rgb)),
        None => Style::default(),
    }
}

pub fn line_number_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}

pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn toast_style(level: ToastLevel) -> Style {
    match level {
        ToastLevel::Info => status_style(),
        ToastLevel::Warning => Style::default().bg(Color::Yellow).fg(Color::Black),
        ToastLevel::Error => Style::default().bg(Color::Red).fg(Color::White),
    }
}

pub fn section_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
