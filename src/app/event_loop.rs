use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::lifecycle::GutterGradient;
use crate::watcher::FileWatcher;

const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// Run the main event loop.
    ///
    /// The gutter gradient is activated once the files are open and
    /// deactivated on every way out of the loop, including errors.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, the gradient settings are
    /// invalid, or terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let mut model = Model::default();
        for path in &self.files {
            model.open_file(path)?;
        }
        // Start on the first file given.
        if let Some(first) = model.host.documents().first().map(|doc| doc.id) {
            model.host.focus(first);
        }
        model.watch_enabled = self.watch_enabled;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; linetint requires an interactive terminal")?;
        let size = terminal.size()?;
        model.viewport.resize(size.height.saturating_sub(1));
        model.sync_viewport();

        let mut gutter = GutterGradient::new(self.config);
        let result = gutter
            .activate(&mut model.host)
            .context("Invalid gradient settings")
            .and_then(|()| Self::event_loop(&mut terminal, &mut model, &gutter));

        gutter.deactivate(&mut model.host);
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        gutter: &GutterGradient,
    ) -> Result<()> {
        execute!(std::io::stdout(), EnableMouseCapture)?;
        let mut file_watcher = if model.watch_enabled {
            match Self::make_file_watcher(model) {
                Ok(watcher) => Some(watcher),
                Err(err) => {
                    model.watch_enabled = false;
                    model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                    tracing::warn!(%err, "failed to start file watcher");
                    None
                }
            }
        } else {
            None
        };
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let changed = if model.watch_enabled {
                file_watcher
                    .as_mut()
                    .map(FileWatcher::take_changed)
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            for path in changed {
                Self::apply(model, &mut file_watcher, gutter, Message::FileChanged(path));
                needs_render = true;
            }

            let poll = if needs_render { Duration::ZERO } else { IDLE_POLL };
            if event::poll(poll)? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::apply(model, &mut file_watcher, gutter, msg);
                    needs_render = true;
                }
                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::ZERO)? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        Self::apply(model, &mut file_watcher, gutter, msg);
                        needs_render = true;
                    }
                }
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// One full message cycle: state update, side effects, then the host
    /// notifications the update produced.
    pub(super) fn apply(
        model: &mut Model,
        file_watcher: &mut Option<FileWatcher>,
        gutter: &GutterGradient,
        msg: Message,
    ) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, file_watcher, &side_msg);
        Self::dispatch_host_events(model, gutter);
    }
}
