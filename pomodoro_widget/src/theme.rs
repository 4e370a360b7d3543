use tracing::debug;
use types::{BackgroundStyle, DEFAULT_PHASE, ThemeSelection, TimerSnapshot};

const SHORT_BREAK_PHASES: [&str; 2] = ["quick recharge", "short break"];
const LONG_BREAK_PHASES: [&str; 2] = ["stretch & breathe", "long break"];

/// Lowercase the phase for display. Nothing else is altered.
#[must_use]
pub fn normalize_phase(phase: &str) -> String {
    phase.to_lowercase()
}

/// Pick the background for a normalized phase label.
///
/// A stopped timer is always shown as paused. While running, the break
/// phases get their own colours and everything else, including labels the
/// widget does not recognise, is shown as focus.
#[must_use]
pub fn select_background(label: &str, is_running: bool) -> BackgroundStyle {
    if !is_running {
        return BackgroundStyle::Paused;
    }

    if SHORT_BREAK_PHASES.contains(&label) {
        BackgroundStyle::BreakShort
    } else if LONG_BREAK_PHASES.contains(&label) {
        BackgroundStyle::BreakLong
    } else {
        if label != DEFAULT_PHASE {
            debug!("Unrecognized phase {:?}, using focus style", label);
        }
        BackgroundStyle::Focus
    }
}

#[must_use]
pub fn select_theme(snapshot: &TimerSnapshot) -> ThemeSelection {
    let status_text = normalize_phase(&snapshot.phase);
    let background = select_background(&status_text, snapshot.is_running);

    ThemeSelection {
        background,
        status_text,
        timer_text: snapshot.remaining_time_text.clone(),
    }
}
