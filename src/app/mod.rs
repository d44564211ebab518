//! Terminal host: views files with the tinted gutter.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: State transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Focus changes and edits made through [`update`] queue host notifications
//! that the loop hands to the [`GutterGradient`](crate::lifecycle::GutterGradient).

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::GradientConfig;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug)]
pub struct App {
    files: Vec<PathBuf>,
    config: GradientConfig,
    watch_enabled: bool,
}

impl App {
    /// Create a new application for the given files.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            config: GradientConfig::default(),
            watch_enabled: false,
        }
    }

    /// Enable or disable file watching.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Use `config` for the gutter gradient.
    pub const fn with_config(mut self, config: GradientConfig) -> Self {
        self.config = config;
        self
    }
}

#[cfg(test)]
mod tests;
