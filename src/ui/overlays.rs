use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::config::{global_config_path, local_override_path};

use super::style::section_style;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Navigation", section_style()));
    lines.push(Line::raw("  j/k or Up/Down      Scroll"));
    lines.push(Line::raw("  Space/PageDown      Page down"));
    lines.push(Line::raw("  b/PageUp            Page up"));
    lines.push(Line::raw("  g / G               Top / bottom"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Files", section_style()));
    lines.push(Line::raw("  Tab / Shift-Tab     Next / previous file"));
    lines.push(Line::raw("  x                   Close file"));
    lines.push(Line::raw("  o                   Insert line below top line"));
    lines.push(Line::raw("  D                   Delete top line"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style()));
    lines.push(Line::raw("  w                   Toggle watch"));
    lines.push(Line::raw("  r                   Reload file"));
    lines.push(Line::raw("  q / Esc / Ctrl-c    Quit"));
    lines.push(Line::raw("  ?                   Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", section_style()));
    lines.push(Line::raw(format!(
        "  Global: {}",
        global_config_path().display()
    )));
    lines.push(Line::raw(format!(
        "  Local override: {}",
        local_override_path().display()
    )));
    let gradient = model.focused_document().map_or_else(
        || "  Gutter: no file open".to_string(),
        |doc| {
            let styled: usize = doc.decorations().values().map(Vec::len).sum();
            format!("  Gutter: {styled} tinted line(s)")
        },
    );
    lines.push(Line::raw(gradient));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
