use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::style::{color_of, status_style, toast_style};

/// Status line text for the focused document.
pub fn status_text(model: &Model) -> String {
    let Some(doc) = model.focused_document() else {
        return " no file  ?:help".to_string();
    };
    let position = model
        .focus_position()
        .map(|(idx, total)| format!("  [{idx}/{total}]"))
        .unwrap_or_default();
    let dirty = if doc.buffer.is_dirty() { " [+]" } else { "" };
    let watch = if model.watch_enabled { " [watching]" } else { "" };
    format!(
        " {}{dirty}{position}  Line {}/{}{watch}  ?:help",
        doc.name,
        model.viewport.offset() + 1,
        doc.line_count(),
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(status_text(model))];
    // Swatch of how far along the ramp the file has grown.
    if let Some(tail) = model.tail_color() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("  ", Style::default().bg(color_of(tail))));
        spans.push(Span::raw(format!(" {tail}")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(status_style()), area);
}

/// Draw the active toast over `area`. Returns `false` if there is none.
pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) -> bool {
    let Some((level, message)) = model.toast() else {
        return false;
    };
    let prefix = match level {
        crate::app::ToastLevel::Info => "[info]",
        crate::app::ToastLevel::Warning => "[warn]",
        crate::app::ToastLevel::Error => "[error]",
    };
    let toast = Paragraph::new(format!(" {prefix} {message}")).style(toast_style(level));
    frame.render_widget(toast, area);
    true
}
