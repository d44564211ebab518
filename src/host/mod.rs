//! The boundary between the gutter gradient and an editor.
//!
//! An editor integration implements [`EditorHost`]; the rest of the crate
//! only talks to the editor through it. [`MemoryHost`] is a complete
//! in-memory implementation.

mod memory;

pub use memory::{HostDocument, MemoryHost};

use crate::marker::MarkerIcon;

/// Handle to an open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Handle to a registered gutter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub u64);

/// Handle to an event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// The focused document as seen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDocument {
    pub id: DocumentId,
    pub line_count: usize,
}

/// The renderable extent of one line, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub line: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl LineSpan {
    pub const fn whole_line(line: usize, len: usize) -> Self {
        Self {
            line,
            start_col: 0,
            end_col: len,
        }
    }
}

/// Notification kinds a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    FocusChanged,
    DocumentEdited,
}

/// A notification delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Another document (or none) took focus.
    FocusChanged,
    /// The content of a document changed.
    DocumentEdited(DocumentId),
}

impl HostEvent {
    pub const fn kind(self) -> EventKind {
        match self {
            Self::FocusChanged => EventKind::FocusChanged,
            Self::DocumentEdited(_) => EventKind::DocumentEdited,
        }
    }
}

/// A host-owned resource that must be released explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Style(StyleId),
    Subscription(SubscriptionId),
}

/// What the gutter gradient needs from an editor.
pub trait EditorHost {
    /// The focused editable document, if any.
    fn active_document(&self) -> Option<ActiveDocument>;

    /// The renderable span of 0-indexed line `line` in `doc`.
    fn line_span(&self, doc: DocumentId, line: usize) -> LineSpan;

    /// Register a gutter style drawing `icon` next to decorated lines.
    fn create_gutter_style(&mut self, icon: &MarkerIcon) -> StyleId;

    /// Replace the lines `style` decorates in the focused document.
    ///
    /// An empty slice clears the style.
    fn apply_style(&mut self, style: StyleId, spans: &[LineSpan]);

    /// Start delivering events of `kind` to the listener.
    fn subscribe(&mut self, kind: EventKind) -> SubscriptionId;

    /// Release a style or subscription.
    fn dispose(&mut self, resource: Resource);
}
