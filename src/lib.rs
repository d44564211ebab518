// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. gradient::GradientTable)
    clippy::module_name_repetitions
)]

//! # Linetint
//!
//! Tints the editor gutter of long files: lines past a threshold get a
//! marker whose color ramps from a pale start color to a deep end color,
//! so a file's length is visible at a glance.
//!
//! ## Architecture
//!
//! The core talks to its editor through the [`host::EditorHost`] trait:
//! - **Gradient**: color ramp and line-count buckets
//! - **Marker**: one gutter style per bucket
//! - **Decorations**: applies bucket ranges to the focused document
//! - **Lifecycle**: activation, event handling and disposal
//!
//! The bundled terminal viewer ([`app`]) drives an in-memory host using
//! The Elm Architecture.
//!
//! ## Modules
//!
//! - [`gradient`]: Color interpolation and the bucket table
//! - [`marker`]: Gutter icons
//! - [`decorations`]: Per-document range updates
//! - [`lifecycle`]: The [`GutterGradient`](lifecycle::GutterGradient) controller
//! - [`host`]: Host boundary and the in-memory host
//! - [`editor`]: Rope-backed text buffer
//! - [`config`]: Settings and rc-file flags
//! - [`app`]: Terminal viewer
//! - [`ui`]: Terminal rendering
//! - [`watcher`]: File watching
//! - [`report`]: Non-interactive summary

pub mod app;
pub mod config;
pub mod decorations;
pub mod editor;
pub mod gradient;
pub mod host;
pub mod lifecycle;
pub mod marker;
pub mod report;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::GradientConfig;
    pub use crate::gradient::{GradientError, GradientTable, Rgb};
    pub use crate::host::{EditorHost, HostEvent, MemoryHost};
    pub use crate::lifecycle::GutterGradient;
}
