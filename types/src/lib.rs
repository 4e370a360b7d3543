use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod utils;

pub use utils::{
    DEFAULT_PHASE, DEFAULT_REMAINING_TIME, KEY_IS_RUNNING, KEY_PHASE,
    KEY_REMAINING_TIME,
};

/// Raw key/value entries shared by the application with the widget.
pub type WidgetData = HashMap<String, serde_json::Value>;

/// Latest timer state published by the application's timer engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub phase: String,

    pub remaining_time_text: String,

    pub is_running: bool,
}

/// Identifier assigned by the host to one placed copy of the widget.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct WidgetId(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    Paused,

    BreakShort,

    BreakLong,

    Focus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSelection {
    pub background: BackgroundStyle,

    /// Lowercased phase label
    pub status_text: String,

    /// Remaining time exactly as published
    pub timer_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentAction {
    #[serde(rename = "android.intent.action.VIEW")]
    View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchFlag {
    /// Reuse the activity if it is already at the top of the task
    SingleTop,

    /// Finish activities above an existing instance instead of stacking
    ClearTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PendingFlag {
    UpdateCurrent,

    Immutable,
}

/// Activity launch request fired when the user taps the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapAction {
    pub view_id: String,

    pub action: IntentAction,

    pub data: String,

    pub component: String,

    pub launch_flags: Vec<LaunchFlag>,

    pub request_code: i32,

    pub pending_flags: Vec<PendingFlag>,
}

/// Fully composed description of one widget instance, handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetPresentation {
    pub package_name: String,

    pub layout: String,

    pub root_view_id: String,

    /// Drawable applied to the root view
    pub background_resource: String,

    pub background: BackgroundStyle,

    pub status_view_id: String,

    pub status_text: String,

    pub timer_view_id: String,

    pub timer_text: String,

    pub on_click: TapAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshEvent {
    pub widget_ids: Vec<WidgetId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshSummary {
    pub instances_processed: usize,

    pub instances_updated: usize,
}
