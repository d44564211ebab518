//! Rope-backed document text.
//!
//! Hosts keep each open document in a [`TextBuffer`] to answer line counts
//! and line spans, and to apply line-level edits.

mod buffer;

pub use buffer::TextBuffer;
