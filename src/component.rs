//! Component trait - Interface for UI components
//!
//! A component turns terminal events into Actions, applies Actions to its own
//! state, and draws itself into the area it is given.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` - map an event to an Action,
///    without changing state
/// 2. `update` - apply an Action, optionally returning a follow-up Action
/// 3. `draw` - render into `area`
pub trait Component {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// Rendering only; state changes belong in `update`. The exception is
    /// layout bookkeeping such as recording where clickable cells landed.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
