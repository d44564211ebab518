//! Scroll position over the focused document.

use std::ops::Range;

/// The window of document lines currently on screen.
///
/// # Example
///
/// ```
/// use linetint::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(24, 300);
/// vp.scroll_down(10);
/// assert_eq!(vp.visible_range(), 10..34);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// `height` is the number of text rows, `total_lines` the document length.
    pub const fn new(height: u16, total_lines: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_lines,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// 0-indexed lines on screen, clamped to the document.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_lines);
        self.offset.min(end)..end
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Put `line` at the top, as far as the document allows.
    pub fn go_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    pub fn resize(&mut self, height: u16) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the document length, e.g. after an edit or a focus change.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_short_document() {
        let vp = Viewport::new(24, 10);
        assert_eq!(vp.visible_range(), 0..10);
    }

    #[test]
    fn test_scroll_down_clamps_to_last_page() {
        let mut vp = Viewport::new(24, 100);
        vp.scroll_down(1000);
        assert_eq!(vp.offset(), 76);
        assert_eq!(vp.visible_range(), 76..100);
    }

    #[test]
    fn test_page_moves() {
        let mut vp = Viewport::new(20, 100);
        vp.page_down();
        assert_eq!(vp.offset(), 20);
        vp.page_up();
        vp.page_up();
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_top_bottom_and_line() {
        let mut vp = Viewport::new(10, 50);
        vp.go_to_bottom();
        assert_eq!(vp.offset(), 40);
        vp.go_to_top();
        assert_eq!(vp.offset(), 0);
        vp.go_to_line(45);
        assert_eq!(vp.offset(), 40);
    }

    #[test]
    fn test_shrinking_document_pulls_offset_back() {
        let mut vp = Viewport::new(24, 300);
        vp.go_to_bottom();
        vp.set_total_lines(30);
        assert_eq!(vp.offset(), 6);
    }

    #[test]
    fn test_resize_keeps_offset_valid() {
        let mut vp = Viewport::new(24, 100);
        vp.scroll_down(70);
        vp.resize(60);
        assert_eq!(vp.offset(), 40);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn visible_range_within_bounds(
                total_lines in 0..10000usize,
                height in 1..100u16,
                offset in 0..10000usize,
            ) {
                let mut vp = Viewport::new(height, total_lines);
                vp.scroll_down(offset);
                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_lines);
                prop_assert!(range.len() <= height as usize);
            }
        }
    }
}
