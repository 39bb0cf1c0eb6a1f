//! View surface - the element tree widgets render into
//!
//! A surface owns a set of named mount points. Each mount point holds the
//! button elements a widget last rendered into it. Widgets never touch the
//! terminal directly; they go through [`ViewSurface`], which keeps them
//! testable against an in-memory fake.

use crate::error::SwitcherError;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Class carried by every tab button
pub const TAB_CLASS: &str = "subject-tab";

/// Class carried by the selected tab button
pub const ACTIVE_CLASS: &str = "active";

const DIVIDER: &str = "│";

// ═══════════════════════════════════════════════════════════════════════════════
// Elements
// ═══════════════════════════════════════════════════════════════════════════════

/// A clickable tab element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    /// The `data-subject` attribute; also the display text
    pub subject: String,
    classes: Vec<String>,
    /// Screen cells covered the last time the button was drawn
    pub area: Rect,
}

impl TabButton {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            classes: vec![TAB_CLASS.to_string()],
            area: Rect::default(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_active(&self) -> bool {
        self.has_class(ACTIVE_CLASS)
    }

    /// Text shown inside the button, padded by one space on each side
    pub fn caption(&self) -> String {
        format!(" {} ", self.subject)
    }

    /// Display width in terminal columns
    pub fn width(&self) -> u16 {
        u16::try_from(self.caption().width()).unwrap_or(u16::MAX)
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.width > 0
            && self.area.height > 0
            && column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Surface Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability a widget needs from whatever displays it
pub trait ViewSurface {
    /// Whether a mount point with this id exists
    fn has_mount(&self, mount_id: &str) -> bool;

    /// Replace everything inside the mount point
    fn replace_children(
        &mut self,
        mount_id: &str,
        children: Vec<TabButton>,
    ) -> Result<(), SwitcherError>;

    /// Current children of the mount point
    fn children(&self, mount_id: &str) -> Option<&[TabButton]>;

    /// Mutable access for in-place class updates
    fn children_mut(&mut self, mount_id: &str) -> Option<&mut [TabButton]>;

    /// Add `class` to every button `matches` accepts, remove it from the rest
    fn toggle_class(
        &mut self,
        mount_id: &str,
        class: &str,
        matches: &dyn Fn(&TabButton) -> bool,
    ) {
        if let Some(buttons) = self.children_mut(mount_id) {
            for button in buttons.iter_mut() {
                if matches(button) {
                    button.add_class(class);
                } else {
                    button.remove_class(class);
                }
            }
        }
    }

    /// Button under the given screen cell, if any
    fn hit_test(&self, mount_id: &str, column: u16, row: u16) -> Option<&TabButton>;

    /// Paint the mount point into `area` of the frame
    ///
    /// Surfaces that are not backed by a terminal can ignore this.
    fn draw(&mut self, mount_id: &str, frame: &mut Frame, area: Rect) -> Result<(), SwitcherError> {
        let _ = (mount_id, frame, area);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Terminal Surface
// ═══════════════════════════════════════════════════════════════════════════════

/// A named region of the screen
#[derive(Debug, Clone, Default)]
pub struct MountPoint {
    /// Region the mount point was last drawn into
    pub area: Rect,
    children: Vec<TabButton>,
}

/// Surface backed by a ratatui frame
#[derive(Debug, Default)]
pub struct TerminalSurface {
    mounts: BTreeMap<String, MountPoint>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a mount point
    pub fn with_mount(mut self, mount_id: &str) -> Self {
        self.mounts.entry(mount_id.to_string()).or_default();
        self
    }

    pub fn mount(&self, mount_id: &str) -> Option<&MountPoint> {
        self.mounts.get(mount_id)
    }

    /// Lay out the buttons of a mount point inside `area`
    ///
    /// Buttons sit on the first row, left to right, separated by a one-column
    /// divider. Anything past the right edge is clipped; buttons that start
    /// past it get an empty area so they can never be hit.
    fn layout(mount: &mut MountPoint, area: Rect) {
        mount.area = area;
        let mut x = area.x;
        for (index, button) in mount.children.iter_mut().enumerate() {
            if index > 0 {
                x = x.saturating_add(1);
            }
            if x >= area.right() || area.height == 0 {
                button.area = Rect::default();
                continue;
            }
            let width = button.width().min(area.right() - x);
            button.area = Rect::new(x, area.y, width, 1);
            x = x.saturating_add(width);
        }
    }
}

impl ViewSurface for TerminalSurface {
    fn has_mount(&self, mount_id: &str) -> bool {
        self.mounts.contains_key(mount_id)
    }

    fn replace_children(
        &mut self,
        mount_id: &str,
        children: Vec<TabButton>,
    ) -> Result<(), SwitcherError> {
        let mount = self
            .mounts
            .get_mut(mount_id)
            .ok_or_else(|| SwitcherError::MountNotFound(mount_id.to_string()))?;
        mount.children = children;
        // Keep hit testing usable before the next frame
        let area = mount.area;
        Self::layout(mount, area);
        Ok(())
    }

    fn children(&self, mount_id: &str) -> Option<&[TabButton]> {
        self.mounts.get(mount_id).map(|m| m.children.as_slice())
    }

    fn children_mut(&mut self, mount_id: &str) -> Option<&mut [TabButton]> {
        self.mounts
            .get_mut(mount_id)
            .map(|m| m.children.as_mut_slice())
    }

    fn hit_test(&self, mount_id: &str, column: u16, row: u16) -> Option<&TabButton> {
        self.mounts
            .get(mount_id)?
            .children
            .iter()
            .find(|b| b.contains(column, row))
    }

    fn draw(&mut self, mount_id: &str, frame: &mut Frame, area: Rect) -> Result<(), SwitcherError> {
        let mount = self
            .mounts
            .get_mut(mount_id)
            .ok_or_else(|| SwitcherError::MountNotFound(mount_id.to_string()))?;

        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        Self::layout(mount, inner);

        let inactive = Style::default().fg(Color::DarkGray);
        let active = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        for (index, button) in mount.children.iter().enumerate() {
            if button.area.width == 0 {
                continue;
            }
            if index > 0 && button.area.x > inner.x {
                let divider = Rect::new(button.area.x - 1, button.area.y, 1, 1);
                frame.render_widget(Paragraph::new(Span::styled(DIVIDER, inactive)), divider);
            }
            let style = if button.is_active() { active } else { inactive };
            frame.render_widget(
                Paragraph::new(Span::styled(button.caption(), style)),
                button.area,
            );
        }
        Ok(())
    }
}
