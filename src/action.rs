//! Action enum - All possible application actions
//!
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Subject Tabs
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the given subject
    SwitchSubject(String),
    /// Select the subject after the current one
    NextSubject,
    /// Select the subject before the current one
    PrevSubject,
}

impl Action {
    /// Actions handled by the tab switcher rather than the app itself
    pub fn is_subject_action(&self) -> bool {
        matches!(
            self,
            Action::SwitchSubject(_) | Action::NextSubject | Action::PrevSubject
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::SwitchSubject(subject) => write!(f, "SwitchSubject({})", subject),
            Action::NextSubject => write!(f, "NextSubject"),
            Action::PrevSubject => write!(f, "PrevSubject"),
        }
    }
}
