use std::time::Duration;

use crate::app::{App, Message, Model, ToastLevel};
use crate::lifecycle::GutterGradient;
use crate::watcher::FileWatcher;

const WATCH_DEBOUNCE: Duration = Duration::from_millis(200);

impl App {
    pub(super) fn make_file_watcher(model: &Model) -> notify::Result<FileWatcher> {
        FileWatcher::new(&model.open_paths(), WATCH_DEBOUNCE)
    }

    pub(super) fn handle_message_side_effects(
        model: &mut Model,
        file_watcher: &mut Option<FileWatcher>,
        msg: &Message,
    ) {
        match msg {
            Message::ToggleWatch => {
                if model.watch_enabled {
                    match Self::make_file_watcher(model) {
                        Ok(watcher) => {
                            *file_watcher = Some(watcher);
                            model.show_toast(ToastLevel::Info, "Watching file changes");
                        }
                        Err(err) => {
                            model.watch_enabled = false;
                            *file_watcher = None;
                            model.show_toast(
                                ToastLevel::Warning,
                                format!("Watch unavailable: {err}"),
                            );
                            tracing::warn!(%err, "failed to start file watcher");
                        }
                    }
                } else {
                    *file_watcher = None;
                    model.show_toast(ToastLevel::Info, "Watch disabled");
                }
            }
            Message::ForceReload => {
                let Some(id) = model.host.focused_id() else {
                    return;
                };
                match model.reload_from_disk(id) {
                    Ok(()) => model.show_toast(ToastLevel::Info, "Reloaded"),
                    Err(err) => {
                        model.show_toast(ToastLevel::Error, format!("Reload failed: {err:#}"));
                    }
                }
            }
            Message::FileChanged(path) => {
                let Some(id) = model.document_for_path(path) else {
                    tracing::debug!(path = %path.display(), "change to closed file ignored");
                    return;
                };
                if let Err(err) = model.reload_from_disk(id) {
                    model.show_toast(ToastLevel::Error, format!("Reload failed: {err:#}"));
                    tracing::warn!(path = %path.display(), "reload failed: {err:#}");
                }
            }
            _ => {}
        }
    }

    /// Deliver queued host notifications to the gutter, in order.
    pub(super) fn dispatch_host_events(model: &mut Model, gutter: &GutterGradient) {
        for event in model.host.take_events() {
            gutter.handle_event(&mut model.host, event);
        }
    }
}
