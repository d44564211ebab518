use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::gradient::Rgb;
use crate::host::{DocumentId, HostDocument, MemoryHost};
use crate::ui::viewport::Viewport;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// Open files live in the [`MemoryHost`]; the model adds the file paths,
/// scroll positions and transient UI state around it.
#[derive(Default)]
pub struct Model {
    /// Open documents, focus and gutter decorations
    pub host: MemoryHost,
    /// Viewport over the focused document
    pub viewport: Viewport,
    /// Source file of each open document
    paths: HashMap<DocumentId, PathBuf>,
    /// Remembered scroll offset per document
    scroll_offsets: HashMap<DocumentId, usize>,
    /// Document the viewport currently shows
    shown: Option<DocumentId>,
    /// Whether file watching is enabled
    pub watch_enabled: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("documents", &self.host.documents().len())
            .field("focused", &self.host.focused_id())
            .field("watch_enabled", &self.watch_enabled)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create an empty model for a terminal of `(width, height)`.
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self {
            viewport: Viewport::new(terminal_size.1.saturating_sub(1), 0),
            ..Self::default()
        }
    }

    /// Read `path` and open it as a focused document.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn open_file(&mut self, path: &Path) -> Result<DocumentId> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(self.open_text(path, &text))
    }

    /// Open `text` as if read from `path`.
    pub fn open_text(&mut self, path: &Path, text: &str) -> DocumentId {
        let id = self.host.open(display_name(path), text);
        self.paths.insert(id, path.to_path_buf());
        self.sync_viewport();
        id
    }

    /// Re-read the file behind `id` from disk.
    ///
    /// # Errors
    /// Returns an error if the document is unknown or the file cannot be read.
    pub fn reload_from_disk(&mut self, id: DocumentId) -> Result<()> {
        let path = self
            .paths
            .get(&id)
            .cloned()
            .context("document has no backing file")?;
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.host.replace_text(id, &text);
        self.sync_viewport();
        Ok(())
    }

    pub fn path_of(&self, id: DocumentId) -> Option<&Path> {
        self.paths.get(&id).map(PathBuf::as_path)
    }

    /// The open document loaded from `path`.
    pub fn document_for_path(&self, path: &Path) -> Option<DocumentId> {
        self.paths
            .iter()
            .find(|(_, p)| p.as_path() == path)
            .map(|(id, _)| *id)
    }

    /// Paths of every open document, in open order.
    pub fn open_paths(&self) -> Vec<PathBuf> {
        self.host
            .documents()
            .iter()
            .filter_map(|doc| self.paths.get(&doc.id).cloned())
            .collect()
    }

    pub fn focused_document(&self) -> Option<&HostDocument> {
        self.host.focused_document()
    }

    /// 1-based position of the focused document and the number open.
    pub fn focus_position(&self) -> Option<(usize, usize)> {
        let id = self.host.focused_id()?;
        let docs = self.host.documents();
        docs.iter()
            .position(|doc| doc.id == id)
            .map(|idx| (idx + 1, docs.len()))
    }

    /// Gutter color of the last line of the focused document, i.e. how far
    /// along the ramp the file has grown.
    pub fn tail_color(&self) -> Option<Rgb> {
        let doc = self.focused_document()?;
        self.host
            .color_at(doc.id, doc.line_count().saturating_sub(1))
    }

    /// Close the focused document and forget its file.
    pub fn close_focused(&mut self) -> bool {
        let Some(id) = self.host.focused_id() else {
            return false;
        };
        self.paths.remove(&id);
        self.scroll_offsets.remove(&id);
        let closed = self.host.close(id);
        // Nothing to remember for a closed document.
        self.shown = None;
        self.sync_viewport();
        closed
    }

    /// Point the viewport at the focused document, restoring its scroll
    /// position after a focus change and clamping after an edit.
    pub fn sync_viewport(&mut self) {
        let focused = self.host.focused_id();
        if focused != self.shown {
            if let Some(prev) = self.shown {
                self.scroll_offsets.insert(prev, self.viewport.offset());
            }
            let total = self.focused_document().map_or(0, HostDocument::line_count);
            self.viewport.set_total_lines(total);
            let offset = focused
                .and_then(|id| self.scroll_offsets.get(&id).copied())
                .unwrap_or(0);
            self.viewport.go_to_line(offset);
            self.shown = focused;
        } else {
            let total = self.focused_document().map_or(0, HostDocument::line_count);
            self.viewport.set_total_lines(total);
        }
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// Drop an expired toast. Returns `true` if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn toast(&self) -> Option<(ToastLevel, &str)> {
        self.toast.as_ref().map(|t| (t.level, t.message.as_str()))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
