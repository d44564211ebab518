use ropey::Rope;

/// Document text backed by a rope, edited a whole line at a time.
///
/// Line numbering follows the rope: a trailing newline starts one more
/// (empty) line, so `"a\nb\n"` has three lines.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    dirty: bool,
}

impl TextBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Whether the buffer was edited since it was loaded.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line_idx).to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in chars (without trailing newline).
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the whole buffer, e.g. after the file changed on disk.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.dirty = false;
    }

    /// Insert an empty line after `line_idx`, clamped to the last line.
    pub fn insert_line_after(&mut self, line_idx: usize) {
        let line_idx = line_idx.min(self.line_count().saturating_sub(1));
        let at = self.rope.line_to_char(line_idx) + self.line_len(line_idx);
        self.rope.insert_char(at, '\n');
        self.dirty = true;
    }

    /// Remove line `line_idx` and its line break.
    ///
    /// Returns `true` if the buffer changed. The last remaining line is
    /// emptied rather than removed.
    pub fn remove_line(&mut self, line_idx: usize) -> bool {
        let count = self.line_count();
        if line_idx >= count {
            return false;
        }
        let start = self.rope.line_to_char(line_idx);
        let range = if line_idx + 1 < count {
            start..self.rope.line_to_char(line_idx + 1)
        } else if line_idx > 0 {
            // Last line: take the preceding break instead.
            start - 1..self.rope.len_chars()
        } else {
            start..self.rope.len_chars()
        };
        if range.is_empty() {
            return false;
        }
        self.rope.remove(range);
        self.dirty = true;
        true
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}
