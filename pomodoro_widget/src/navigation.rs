use types::{IntentAction, LaunchFlag, PendingFlag, TapAction};

/// Deep link the application routes to its pomodoro screen.
pub const POMODORO_DEEP_LINK: &str = "pinknote://pomodoro/view";

pub const MAIN_ACTIVITY: &str = "MainActivity";

/// Fixed request code so every instance shares one pending launch.
pub const TAP_REQUEST_CODE: i32 = 500;

/// Build the launch bound to `view_id`: bring the app's existing pomodoro
/// screen to the front (single top, clear top) rather than stacking another.
#[must_use]
pub fn pomodoro_tap_action(package_name: &str, view_id: &str) -> TapAction {
    TapAction {
        view_id: view_id.to_string(),
        action: IntentAction::View,
        data: POMODORO_DEEP_LINK.to_string(),
        component: format!("{package_name}.{MAIN_ACTIVITY}"),
        launch_flags: vec![LaunchFlag::SingleTop, LaunchFlag::ClearTop],
        request_code: TAP_REQUEST_CODE,
        pending_flags: vec![
            PendingFlag::UpdateCurrent,
            PendingFlag::Immutable,
        ],
    }
}
