//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod layout;
pub mod subject_panel;
pub mod tab_switcher;

pub use layout::calculate_main_layout;
pub use subject_panel::{render_help_bar, SubjectPanel};
pub use tab_switcher::{TabSwitcher, TabSwitcherConfig};
