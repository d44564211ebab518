use std::collections::{BTreeMap, HashMap, VecDeque};

use super::{
    ActiveDocument, DocumentId, EditorHost, EventKind, HostEvent, LineSpan, Resource, StyleId,
    SubscriptionId,
};
use crate::editor::TextBuffer;
use crate::gradient::Rgb;
use crate::marker::MarkerIcon;

/// An open document and the gutter decorations applied to it.
#[derive(Debug, Clone)]
pub struct HostDocument {
    pub id: DocumentId,
    pub name: String,
    pub buffer: TextBuffer,
    decorations: BTreeMap<StyleId, Vec<LineSpan>>,
    /// Which style decorates each line; the last style applied to a line wins.
    line_styles: HashMap<usize, StyleId>,
}

impl HostDocument {
    fn new(id: DocumentId, name: String, text: &str) -> Self {
        Self {
            id,
            name,
            buffer: TextBuffer::from_text(text),
            decorations: BTreeMap::new(),
            line_styles: HashMap::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    /// Spans currently decorated by each style.
    pub const fn decorations(&self) -> &BTreeMap<StyleId, Vec<LineSpan>> {
        &self.decorations
    }

    /// The style decorating 0-indexed line `line`, if any.
    pub fn style_at(&self, line: usize) -> Option<StyleId> {
        self.line_styles.get(&line).copied()
    }

    /// Lowest and highest decorated 0-indexed lines.
    pub fn decorated_bounds(&self) -> Option<(usize, usize)> {
        let mut lines = self.line_styles.keys().copied();
        let first = lines.next()?;
        Some(lines.fold((first, first), |(lo, hi), line| (lo.min(line), hi.max(line))))
    }

    fn set_decoration(&mut self, style: StyleId, spans: &[LineSpan]) {
        self.remove_decoration(style);
        if spans.is_empty() {
            return;
        }
        for span in spans {
            self.line_styles.insert(span.line, style);
        }
        self.decorations.insert(style, spans.to_vec());
    }

    fn remove_decoration(&mut self, style: StyleId) {
        let Some(spans) = self.decorations.remove(&style) else {
            return;
        };
        for span in spans {
            if self.line_styles.get(&span.line) == Some(&style) {
                self.line_styles.remove(&span.line);
            }
        }
    }
}

/// An editor host that keeps everything in memory.
///
/// Documents are rope buffers; focus, edits and disposal are driven through
/// plain method calls, and notifications queue up until [`take_events`]
/// drains them. Only event kinds with a live subscription are queued.
///
/// [`take_events`]: MemoryHost::take_events
#[derive(Debug, Default)]
pub struct MemoryHost {
    next_id: u64,
    documents: Vec<HostDocument>,
    focused: Option<DocumentId>,
    styles: HashMap<StyleId, MarkerIcon>,
    subscriptions: HashMap<SubscriptionId, EventKind>,
    pending: VecDeque<HostEvent>,
    disposed: Vec<Resource>,
    apply_calls: usize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    const fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn emit(&mut self, event: HostEvent) {
        if self.subscriptions.values().any(|kind| *kind == event.kind()) {
            self.pending.push_back(event);
        }
    }

    /// Drain queued notifications in delivery order.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        self.pending.drain(..).collect()
    }

    // --- Documents and focus ---

    /// Open a document and give it focus.
    pub fn open(&mut self, name: impl Into<String>, text: &str) -> DocumentId {
        let id = DocumentId(self.allocate_id());
        self.documents.push(HostDocument::new(id, name.into(), text));
        self.focus(id);
        id
    }

    pub fn documents(&self) -> &[HostDocument] {
        &self.documents
    }

    pub fn document(&self, id: DocumentId) -> Option<&HostDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    fn document_mut(&mut self, id: DocumentId) -> Option<&mut HostDocument> {
        self.documents.iter_mut().find(|doc| doc.id == id)
    }

    fn position(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id == id)
    }

    pub const fn focused_id(&self) -> Option<DocumentId> {
        self.focused
    }

    pub fn focused_document(&self) -> Option<&HostDocument> {
        self.focused.and_then(|id| self.document(id))
    }

    /// Focus `id`. Returns `false` if it is unknown or already focused.
    pub fn focus(&mut self, id: DocumentId) -> bool {
        if self.focused == Some(id) || self.position(id).is_none() {
            return false;
        }
        self.focused = Some(id);
        self.emit(HostEvent::FocusChanged);
        true
    }

    /// Drop focus so no document is active.
    pub fn blur(&mut self) -> bool {
        if self.focused.take().is_none() {
            return false;
        }
        self.emit(HostEvent::FocusChanged);
        true
    }

    /// Focus the document after the focused one, wrapping around.
    pub fn focus_next(&mut self) -> bool {
        self.focus_offset(1)
    }

    /// Focus the document before the focused one, wrapping around.
    pub fn focus_prev(&mut self) -> bool {
        self.focus_offset(self.documents.len().saturating_sub(1))
    }

    fn focus_offset(&mut self, offset: usize) -> bool {
        let len = self.documents.len();
        if len == 0 {
            return false;
        }
        let next = self
            .focused
            .and_then(|id| self.position(id))
            .map_or(0, |idx| (idx + offset) % len);
        let id = self.documents[next].id;
        self.focus(id)
    }

    /// Close `id`; focus moves to a neighbour, or nowhere if it was the last.
    pub fn close(&mut self, id: DocumentId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.documents.remove(idx);
        if self.focused == Some(id) {
            self.focused = None;
            let neighbour = idx.min(self.documents.len().saturating_sub(1));
            match self.documents.get(neighbour).map(|doc| doc.id) {
                Some(next) => {
                    self.focus(next);
                }
                None => self.emit(HostEvent::FocusChanged),
            }
        }
        true
    }

    // --- Edits ---

    /// Insert an empty line after `line` in `id`.
    pub fn insert_line_after(&mut self, id: DocumentId, line: usize) -> bool {
        let Some(doc) = self.document_mut(id) else {
            return false;
        };
        doc.buffer.insert_line_after(line);
        self.emit(HostEvent::DocumentEdited(id));
        true
    }

    /// Remove `line` from `id`.
    pub fn remove_line(&mut self, id: DocumentId, line: usize) -> bool {
        let changed = self
            .document_mut(id)
            .is_some_and(|doc| doc.buffer.remove_line(line));
        if changed {
            self.emit(HostEvent::DocumentEdited(id));
        }
        changed
    }

    /// Replace the whole text of `id`, e.g. after a reload from disk.
    pub fn replace_text(&mut self, id: DocumentId, text: &str) -> bool {
        let Some(doc) = self.document_mut(id) else {
            return false;
        };
        doc.buffer.replace(text);
        self.emit(HostEvent::DocumentEdited(id));
        true
    }

    // --- Inspection ---

    pub fn style_icon(&self, style: StyleId) -> Option<&MarkerIcon> {
        self.styles.get(&style)
    }

    pub fn style_color(&self, style: StyleId) -> Option<Rgb> {
        self.style_icon(style).map(|icon| icon.color)
    }

    /// Gutter color of 0-indexed `line` in `id`, if decorated.
    pub fn color_at(&self, id: DocumentId, line: usize) -> Option<Rgb> {
        let style = self.document(id)?.style_at(line)?;
        self.style_color(style)
    }

    pub fn live_style_count(&self) -> usize {
        self.styles.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Every resource released so far, in release order.
    pub fn disposed(&self) -> &[Resource] {
        &self.disposed
    }

    /// Number of `apply_style` calls received.
    pub const fn apply_calls(&self) -> usize {
        self.apply_calls
    }
}

impl EditorHost for MemoryHost {
    fn active_document(&self) -> Option<ActiveDocument> {
        self.focused_document().map(|doc| ActiveDocument {
            id: doc.id,
            line_count: doc.line_count(),
        })
    }

    fn line_span(&self, doc: DocumentId, line: usize) -> LineSpan {
        let len = self.document(doc).map_or(0, |d| d.buffer.line_len(line));
        LineSpan::whole_line(line, len)
    }

    fn create_gutter_style(&mut self, icon: &MarkerIcon) -> StyleId {
        let style = StyleId(self.allocate_id());
        self.styles.insert(style, *icon);
        style
    }

    fn apply_style(&mut self, style: StyleId, spans: &[LineSpan]) {
        self.apply_calls += 1;
        if !self.styles.contains_key(&style) {
            tracing::warn!(?style, "apply to unknown or disposed style ignored");
            return;
        }
        let Some(id) = self.focused else {
            return;
        };
        if let Some(doc) = self.document_mut(id) {
            doc.set_decoration(style, spans);
        }
    }

    fn subscribe(&mut self, kind: EventKind) -> SubscriptionId {
        let id = SubscriptionId(self.allocate_id());
        self.subscriptions.insert(id, kind);
        id
    }

    fn dispose(&mut self, resource: Resource) {
        let released = match resource {
            Resource::Style(style) => {
                for doc in &mut self.documents {
                    doc.remove_decoration(style);
                }
                self.styles.remove(&style).is_some()
            }
            Resource::Subscription(sub) => self.subscriptions.remove(&sub).is_some(),
        };
        if released {
            self.disposed.push(resource);
        } else {
            tracing::warn!(?resource, "dispose of unknown resource ignored");
        }
    }
}
