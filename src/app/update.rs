use std::path::PathBuf;

use crate::app::Model;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Scroll up by n lines
    ScrollUp(usize),
    /// Scroll down by n lines
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to beginning of document
    GoToTop,
    /// Go to end of document
    GoToBottom,

    // Focus
    /// Focus the next open file
    NextDocument,
    /// Focus the previous open file
    PrevDocument,
    /// Close the focused file
    CloseDocument,

    // Edits
    /// Insert an empty line below the top visible line
    InsertLine,
    /// Delete the top visible line
    DeleteLine,

    // File watching
    /// Toggle file watching
    ToggleWatch,
    /// A watched file changed on disk
    FileChanged(PathBuf),
    /// Reload the focused file from disk
    ForceReload,

    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Apply `msg` to `model`.
///
/// Host-side effects of focus changes and edits (queued notifications) are
/// dispatched by the event loop; disk I/O happens in the side-effect pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::ScrollUp(n) => model.viewport.scroll_up(n),
        Message::ScrollDown(n) => model.viewport.scroll_down(n),
        Message::PageUp => model.viewport.page_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::GoToTop => model.viewport.go_to_top(),
        Message::GoToBottom => model.viewport.go_to_bottom(),

        Message::NextDocument => {
            model.host.focus_next();
        }
        Message::PrevDocument => {
            model.host.focus_prev();
        }
        Message::CloseDocument => {
            model.close_focused();
        }

        Message::InsertLine => {
            if let Some(id) = model.host.focused_id() {
                let line = model.viewport.offset();
                model.host.insert_line_after(id, line);
            }
        }
        Message::DeleteLine => {
            if let Some(id) = model.host.focused_id() {
                let line = model.viewport.offset();
                model.host.remove_line(id, line);
            }
        }

        Message::ToggleWatch => model.watch_enabled = !model.watch_enabled,
        // FileChanged/ForceReload: handled in event loop (side effect)
        Message::FileChanged(_) | Message::ForceReload => {}

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(_, height) => model.viewport.resize(height.saturating_sub(1)),
        Message::Quit => model.should_quit = true,
    }
    model.sync_viewport();
    model
}
