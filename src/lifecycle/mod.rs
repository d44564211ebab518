//! Activation, event handling and teardown of the gutter gradient.
//!
//! [`GutterGradient`] is either inactive or active. Activating builds the
//! bucket table, registers one style per bucket, decorates the focused
//! document and subscribes to focus and edit notifications. Deactivating
//! releases every style and subscription together.

mod disposables;

pub use disposables::Disposables;

use crate::config::GradientConfig;
use crate::decorations::update_decorations;
use crate::gradient::{GradientError, GradientTable};
use crate::host::{EditorHost, EventKind, HostEvent, Resource};
use crate::marker::{BucketStyle, render_markers};

/// Owns the bucket styles and subscriptions while active.
#[derive(Debug)]
pub struct GutterGradient {
    config: GradientConfig,
    active: Option<ActiveState>,
}

#[derive(Debug)]
struct ActiveState {
    table: GradientTable,
    styles: Vec<BucketStyle>,
    resources: Disposables,
}

impl GutterGradient {
    pub const fn new(config: GradientConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub const fn config(&self) -> &GradientConfig {
        &self.config
    }

    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The registered bucket styles; empty while inactive.
    pub fn styles(&self) -> &[BucketStyle] {
        self.active
            .as_ref()
            .map(|state| state.styles.as_slice())
            .unwrap_or_default()
    }

    pub fn table(&self) -> Option<&GradientTable> {
        self.active.as_ref().map(|state| &state.table)
    }

    /// Register styles, decorate the focused document and start listening.
    ///
    /// Activating twice is a no-op.
    ///
    /// # Errors
    /// Returns an error if the configured ramp is invalid; nothing is
    /// registered with the host in that case.
    pub fn activate<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Result<(), GradientError> {
        if self.is_active() {
            tracing::warn!("gutter gradient already active");
            return Ok(());
        }
        let table = GradientTable::build(&self.config)?;
        let styles = render_markers(host, &table);

        let mut resources = Disposables::default();
        resources.extend(styles.iter().map(|s| Resource::Style(s.style)));

        update_decorations(host, &styles);

        for kind in [EventKind::FocusChanged, EventKind::DocumentEdited] {
            resources.push(Resource::Subscription(host.subscribe(kind)));
        }

        tracing::debug!(styles = styles.len(), "gutter gradient activated");
        self.active = Some(ActiveState {
            table,
            styles,
            resources,
        });
        Ok(())
    }

    /// React to one host notification.
    ///
    /// Focus changes always redecorate; edits redecorate only when the
    /// edited document is the focused one. Ignored while inactive.
    pub fn handle_event<H: EditorHost + ?Sized>(&self, host: &mut H, event: HostEvent) {
        let Some(state) = &self.active else {
            tracing::trace!(?event, "event after deactivation ignored");
            return;
        };
        match event {
            HostEvent::FocusChanged => update_decorations(host, &state.styles),
            HostEvent::DocumentEdited(doc) => {
                if host.active_document().is_some_and(|active| active.id == doc) {
                    update_decorations(host, &state.styles);
                }
            }
        }
    }

    /// Release every style and subscription. No-op while inactive.
    pub fn deactivate<H: EditorHost + ?Sized>(&mut self, host: &mut H) {
        let Some(mut state) = self.active.take() else {
            return;
        };
        let released = state.resources.dispose_all(host);
        tracing::debug!(released, "gutter gradient deactivated");
    }
}
