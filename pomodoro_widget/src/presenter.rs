use tracing::{debug, info, warn};
use types::{RefreshSummary, TimerSnapshot, WidgetId, WidgetPresentation};

use crate::{
    host::{HostError, WidgetHost},
    navigation::pomodoro_tap_action,
    snapshot::{SnapshotStore, read_snapshot},
    theme::select_theme,
};

pub const DEFAULT_PACKAGE_NAME: &str = "com.afsheen.pinknote";

pub const LAYOUT: &str = "widget_pomodoro";
pub const ROOT_VIEW_ID: &str = "pomodoro_root";
pub const STATUS_VIEW_ID: &str = "pomo_status";
pub const TIMER_VIEW_ID: &str = "pomo_timer";

/// Re-renders pomodoro widget instances from the shared timer state.
///
/// The presenter holds no state of its own between calls: every render reads
/// a fresh snapshot from the store, so renders for different instances may
/// run concurrently.
#[derive(Debug)]
pub struct WidgetPresenter<S, H> {
    store: S,
    host: H,
    package_name: String,
}

impl<S: SnapshotStore, H: WidgetHost> WidgetPresenter<S, H> {
    pub fn new(store: S, host: H) -> Self {
        Self::with_package_name(store, host, DEFAULT_PACKAGE_NAME)
    }

    pub fn with_package_name(
        store: S,
        host: H,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            host,
            package_name: package_name.into(),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Render every instance the host asked for.
    ///
    /// A failed host update is logged and skipped; the next refresh will try
    /// again.
    pub fn on_refresh(&self, ids: &[WidgetId]) -> RefreshSummary {
        info!("Refreshing {} pomodoro widgets", ids.len());

        let mut summary = RefreshSummary {
            instances_processed: ids.len(),
            instances_updated: 0,
        };

        for &id in ids {
            match self.render_instance(id) {
                Ok(()) => summary.instances_updated += 1,
                Err(e) => warn!("Failed to update widget {}: {}", id, e),
            }
        }

        summary
    }

    /// Read the current snapshot and submit a fresh presentation for `id`.
    ///
    /// # Errors
    /// Only if the host rejects the update. Missing or malformed timer state
    /// is rendered with defaults.
    pub fn render_instance(&self, id: WidgetId) -> Result<(), HostError> {
        let snapshot = read_snapshot(&self.store);
        let presentation = self.compose(&snapshot);

        debug!(
            "Widget {} -> {} ({})",
            id,
            presentation.background,
            presentation.display_text()
        );

        self.host.update_widget(id, presentation)
    }

    /// Build the presentation for `snapshot` without touching the host.
    #[must_use]
    pub fn compose(&self, snapshot: &TimerSnapshot) -> WidgetPresentation {
        let theme = select_theme(snapshot);

        WidgetPresentation {
            package_name: self.package_name.clone(),
            layout: LAYOUT.to_string(),
            root_view_id: ROOT_VIEW_ID.to_string(),
            background_resource: theme.background.drawable().to_string(),
            background: theme.background,
            status_view_id: STATUS_VIEW_ID.to_string(),
            status_text: theme.status_text,
            timer_view_id: TIMER_VIEW_ID.to_string(),
            timer_text: theme.timer_text,
            on_click: pomodoro_tap_action(&self.package_name, ROOT_VIEW_ID),
        }
    }
}
