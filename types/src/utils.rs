use crate::{
    BackgroundStyle, ThemeSelection, TimerSnapshot, WidgetId,
    WidgetPresentation,
};
use std::fmt;

pub const KEY_PHASE: &str = "pomo_status";
pub const KEY_REMAINING_TIME: &str = "pomo_time";
pub const KEY_IS_RUNNING: &str = "pomo_is_running";

pub const DEFAULT_PHASE: &str = "focus";
pub const DEFAULT_REMAINING_TIME: &str = "25:00";

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self {
            phase: DEFAULT_PHASE.to_string(),
            remaining_time_text: DEFAULT_REMAINING_TIME.to_string(),
            is_running: false,
        }
    }
}

impl BackgroundStyle {
    /// Stable identifier of the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paused => "paused",
            Self::BreakShort => "break-short",
            Self::BreakLong => "break-long",
            Self::Focus => "focus",
        }
    }

    /// Name of the rounded drawable the host paints behind the widget.
    #[must_use]
    pub const fn drawable(self) -> &'static str {
        match self {
            Self::Paused => "rounded_grey_bg",
            Self::BreakShort => "rounded_blue_bg",
            Self::BreakLong => "rounded_green_bg",
            Self::Focus => "rounded_pink_bg",
        }
    }
}

impl fmt::Display for BackgroundStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for WidgetId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Status label and remaining time as read on the widget.
fn display_text(status_text: &str, timer_text: &str) -> String {
    format!("{status_text} {timer_text}")
}

impl ThemeSelection {
    #[must_use]
    pub fn display_text(&self) -> String {
        display_text(&self.status_text, &self.timer_text)
    }
}

impl WidgetPresentation {
    #[must_use]
    pub fn display_text(&self) -> String {
        display_text(&self.status_text, &self.timer_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let snapshot = TimerSnapshot::default();

        assert_eq!(snapshot.phase, "focus");
        assert_eq!(snapshot.remaining_time_text, "25:00");
        assert!(!snapshot.is_running);
    }

    #[test]
    fn test_style_serializes_as_kebab_case() {
        let json = serde_json::to_value(BackgroundStyle::BreakShort).unwrap();

        assert_eq!(json, serde_json::json!("break-short"));
        assert_eq!(BackgroundStyle::BreakShort.to_string(), "break-short");
    }

    #[test]
    fn test_display_text_joins_status_and_timer() {
        let theme = ThemeSelection {
            background: BackgroundStyle::BreakShort,
            status_text: "short break".to_string(),
            timer_text: "04:59".to_string(),
        };

        assert_eq!(theme.display_text(), "short break 04:59");
    }

    #[test]
    fn test_widget_id_is_transparent() {
        let ids: Vec<WidgetId> = serde_json::from_str("[4, 17]").unwrap();

        assert_eq!(ids, vec![WidgetId(4), WidgetId(17)]);
    }
}
