//! Application state and action dispatch
//!
//! The App owns the screen's components: the subject tab bar mounted at the
//! top and the panel that reacts to its change notifications.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, render_help_bar, SubjectPanel, TabSwitcher, TabSwitcherConfig,
};
use crate::config::{Config, DEFAULT_MOUNT_ID};
use crate::error::SwitcherError;
use crate::model::ChangeLog;
use crate::surface::TerminalSurface;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Main application state
pub struct App {
    pub should_quit: bool,

    /// Notifications received from the tab bar
    pub changes: Rc<RefCell<ChangeLog>>,

    // Components
    pub tabs: TabSwitcher<TerminalSurface>,
    pub panel: SubjectPanel,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Build the screen from a config
    ///
    /// The host always provides the [`DEFAULT_MOUNT_ID`] region; a config
    /// naming any other mount point leaves the tab bar unmounted.
    pub fn new(config: Config) -> App {
        let changes = Rc::new(RefCell::new(ChangeLog::new()));

        let sink = Rc::clone(&changes);
        let mut switcher_config = TabSwitcherConfig::new(config.mount_id.as_str())
            .with_labels(config.subjects)
            .with_on_change(move |subject| {
                info!(subject, "subject changed");
                sink.borrow_mut().record(subject);
            });
        if let Some(initial) = config.initial_subject {
            switcher_config = switcher_config.with_initial_selection(initial);
        }

        let surface = TerminalSurface::new().with_mount(DEFAULT_MOUNT_ID);
        let tabs = TabSwitcher::new(surface, switcher_config);

        let mut panel = SubjectPanel::new(Rc::clone(&changes));
        panel.subject = tabs.current_subject().to_string();
        if !tabs.is_mounted() {
            let error = SwitcherError::MountNotFound(tabs.mount_id().to_string());
            panel.error = Some(error.to_string());
        }

        App {
            should_quit: false,
            changes,
            tabs,
            panel,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => self.tabs.handle_key_event(key)?,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.tabs.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        debug!(%action, "update");
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Tick | Action::Resize(_, _) => {}
            action if action.is_subject_action() => {
                let follow_up = self.tabs.update(action)?;
                self.panel.subject = self.tabs.current_subject().to_string();
                return Ok(follow_up);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);
        self.tabs.draw(frame, layout.tabs)?;
        self.panel.draw(frame, layout.content)?;
        render_help_bar(frame, layout.help);
        Ok(())
    }
}
