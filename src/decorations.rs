//! Applying bucket styles to the focused document.

use std::ops::RangeInclusive;

use crate::host::{ActiveDocument, EditorHost, LineSpan};
use crate::marker::BucketStyle;

/// Re-apply every bucket style to the focused document.
///
/// Each style gets exactly the lines of its bucket that exist in the
/// document; styles for buckets past the end of the document are cleared.
/// With no focused document every style is cleared. Calling this again for
/// an unchanged document applies the same spans.
pub fn update_decorations<H: EditorHost + ?Sized>(host: &mut H, styles: &[BucketStyle]) {
    let Some(doc) = host.active_document() else {
        clear_decorations(host, styles);
        return;
    };
    tracing::debug!(doc = ?doc.id, lines = doc.line_count, "updating gutter decorations");

    for (style, range) in styles.iter().zip(plan_ranges(styles, doc)) {
        let spans: Vec<LineSpan> = range
            .into_iter()
            .flatten()
            .map(|line| host.line_span(doc.id, line))
            .collect();
        host.apply_style(style.style, &spans);
    }
}

/// Apply an empty span set to every style.
pub fn clear_decorations<H: EditorHost + ?Sized>(host: &mut H, styles: &[BucketStyle]) {
    tracing::debug!(styles = styles.len(), "clearing gutter decorations");
    for style in styles {
        host.apply_style(style.style, &[]);
    }
}

/// The 0-indexed line range each style covers in `doc`, in style order.
pub fn plan_ranges(
    styles: &[BucketStyle],
    doc: ActiveDocument,
) -> Vec<Option<RangeInclusive<usize>>> {
    styles
        .iter()
        .map(|style| style.bucket.line_range(doc.line_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradientConfig;
    use crate::gradient::GradientTable;
    use crate::host::MemoryHost;
    use crate::marker::render_markers;

    fn setup(text_lines: usize) -> (MemoryHost, Vec<BucketStyle>) {
        let table = GradientTable::build(&GradientConfig::default()).unwrap();
        let mut host = MemoryHost::new();
        let styles = render_markers(&mut host, &table);
        host.open("doc.rs", &numbered_lines(text_lines));
        (host, styles)
    }

    fn numbered_lines(n: usize) -> String {
        (1..=n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    fn decorated_lines(host: &MemoryHost) -> Vec<usize> {
        let doc = host.focused_document().unwrap();
        let mut lines: Vec<usize> = doc
            .decorations()
            .values()
            .flatten()
            .map(|span| span.line)
            .collect();
        lines.sort_unstable();
        lines
    }

    #[test]
    fn test_short_document_gets_no_decorations() {
        let (mut host, styles) = setup(5);
        update_decorations(&mut host, &styles);
        assert!(decorated_lines(&host).is_empty());
        assert_eq!(host.apply_calls(), styles.len());
    }

    #[test]
    fn test_document_of_160_lines() {
        let (mut host, styles) = setup(160);
        update_decorations(&mut host, &styles);
        let id = host.focused_id().unwrap();

        assert_eq!(decorated_lines(&host), (149..160).collect::<Vec<_>>());
        assert_eq!(host.color_at(id, 149), Some(styles[0].bucket.color));
        assert_eq!(host.color_at(id, 159), Some(styles[10].bucket.color));
        assert_eq!(host.color_at(id, 148), None);
    }

    #[test]
    fn test_long_document_uses_catch_all_past_end_line() {
        let (mut host, styles) = setup(300);
        update_decorations(&mut host, &styles);
        let doc = host.focused_document().unwrap();
        let catch_all = styles.last().unwrap();

        let spans = &doc.decorations()[&catch_all.style];
        assert_eq!(spans.len(), 70);
        assert_eq!(spans.first().map(|s| s.line), Some(230));
        assert_eq!(spans.last().map(|s| s.line), Some(299));
        assert_eq!(doc.style_at(229), Some(styles[80].style));
    }

    #[test]
    fn test_spans_cover_line_text() {
        let (mut host, styles) = setup(150);
        update_decorations(&mut host, &styles);
        let doc = host.focused_document().unwrap();
        let spans = &doc.decorations()[&styles[0].style];
        assert_eq!(spans, &vec![LineSpan::whole_line(149, "line 150".len())]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let (mut host, styles) = setup(240);
        update_decorations(&mut host, &styles);
        let first = host.focused_document().unwrap().decorations().clone();
        update_decorations(&mut host, &styles);
        assert_eq!(host.focused_document().unwrap().decorations(), &first);
    }

    #[test]
    fn test_shrinking_document_drops_stale_lines() {
        let (mut host, styles) = setup(240);
        update_decorations(&mut host, &styles);
        let id = host.focused_id().unwrap();
        host.replace_text(id, &numbered_lines(155));
        update_decorations(&mut host, &styles);
        assert_eq!(decorated_lines(&host), (149..155).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_focused_document_clears_every_style() {
        let (mut host, styles) = setup(200);
        host.blur();
        update_decorations(&mut host, &styles);
        assert_eq!(host.apply_calls(), styles.len());
    }

    #[test]
    fn test_plan_ranges_matches_bucket_ranges() {
        let (host, styles) = setup(151);
        let doc = host.active_document().unwrap();
        let plan = plan_ranges(&styles, doc);
        assert_eq!(plan[0], Some(149..=149));
        assert_eq!(plan[1], Some(150..=150));
        assert!(plan[2..].iter().all(Option::is_none));
    }
}
