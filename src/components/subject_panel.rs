//! Subject panel - content area below the tab bar
//!
//! Shows the selected subject and the change notifications the host has
//! received, newest first.

use crate::component::Component;
use crate::model::ChangeLog;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::cell::RefCell;
use std::rc::Rc;

pub struct SubjectPanel {
    /// Shared with the tab switcher's change callback
    changes: Rc<RefCell<ChangeLog>>,
    /// Subject shown in the title
    pub subject: String,
    /// Shown instead of the log when the tab bar failed to mount
    pub error: Option<String>,
}

impl SubjectPanel {
    pub fn new(changes: Rc<RefCell<ChangeLog>>) -> Self {
        Self {
            changes,
            subject: String::new(),
            error: None,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        if let Some(error) = &self.error {
            return vec![Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ))];
        }

        let changes = self.changes.borrow();
        if changes.is_empty() {
            return vec![Line::from(Span::styled(
                "Click a subject tab, or press Tab / Shift+Tab, to switch subjects.",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let lines = changes
            .newest_first()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(entry.formatted_time(), Style::default().fg(Color::DarkGray)),
                    Span::raw("  → "),
                    Span::styled(entry.subject.clone(), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect();
        lines
    }
}

impl Component for SubjectPanel {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let title = if self.subject.is_empty() {
            " (no subject) ".to_string()
        } else {
            format!(" {} ", self.subject)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

/// One-line key reference at the bottom of the screen
pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" click ", key),
        Span::raw("select  "),
        Span::styled(" Tab/→ ", key),
        Span::raw("next  "),
        Span::styled(" Shift+Tab/← ", key),
        Span::raw("previous  "),
        Span::styled(" q/Esc ", key),
        Span::raw("quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
