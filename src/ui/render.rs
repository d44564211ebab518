use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::host::HostDocument;

use super::style::{GUTTER_MARK, gutter_style, line_number_style};
use super::{overlays, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let doc_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    match model.focused_document() {
        Some(doc) => render_document(model, doc, frame, doc_area),
        None => {
            let empty = Paragraph::new("No open document").style(line_number_style());
            frame.render_widget(empty, doc_area);
        }
    }

    if !status::render_toast_bar(model, frame, status_area) {
        status::render_status_bar(model, frame, status_area);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

/// Width of the line number column for a document of `line_count` lines.
pub fn number_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len()
}

fn render_document(model: &Model, doc: &HostDocument, frame: &mut Frame, area: Rect) {
    let width = number_width(doc.line_count());
    let range = model.viewport.visible_range();

    let content: Vec<Line> = range
        .map(|idx| {
            let marker = doc
                .style_at(idx)
                .and_then(|style| model.host.style_color(style));
            let text = doc.buffer.line_at(idx).unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    if marker.is_some() { GUTTER_MARK } else { " " },
                    gutter_style(marker),
                ),
                Span::styled(format!("{:>width$} ", idx + 1), line_number_style()),
                Span::raw(text),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(content), area);
}
