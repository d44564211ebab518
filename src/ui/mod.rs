//! Terminal UI components.
//!
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Gutter and status colors

pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::{number_width, render};
pub use status::status_text;
