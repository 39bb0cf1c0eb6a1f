//! Tab switcher component
//!
//! Renders one button per subject into a mount point, highlights the
//! selected one, and reports every selection change through a callback.

use crate::action::Action;
use crate::component::Component;
use crate::error::SwitcherError;
use crate::surface::{TabButton, ViewSurface, ACTIVE_CLASS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, error, warn};

/// Called with the new subject after every confirmed change
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// Subjects used when the caller does not supply any
pub fn default_subjects() -> Vec<String> {
    vec!["语文".to_string(), "数学".to_string(), "英语".to_string()]
}

// ═══════════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════════

/// Construction options for [`TabSwitcher`]
///
/// Only `mount_id` is required:
/// - `labels` defaults to [`default_subjects`]
/// - `initial_selection` defaults to the first label (an empty string counts
///   as unset)
/// - `on_change` defaults to a no-op
pub struct TabSwitcherConfig {
    pub mount_id: String,
    pub labels: Option<Vec<String>>,
    pub initial_selection: Option<String>,
    pub on_change: Option<ChangeCallback>,
}

impl TabSwitcherConfig {
    pub fn new(mount_id: impl Into<String>) -> Self {
        Self {
            mount_id: mount_id.into(),
            labels: None,
            initial_selection: None,
            on_change: None,
        }
    }

    pub fn with_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_initial_selection(mut self, label: impl Into<String>) -> Self {
        self.initial_selection = Some(label.into());
        self
    }

    pub fn with_on_change(mut self, on_change: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tab Switcher
// ═══════════════════════════════════════════════════════════════════════════════

/// Subject tab bar bound to one mount point of a [`ViewSurface`]
pub struct TabSwitcher<S: ViewSurface> {
    surface: S,
    mount_id: String,
    labels: Vec<String>,
    selected: String,
    on_change: ChangeCallback,
    /// False when the mount point could not be resolved
    mounted: bool,
}

impl<S: ViewSurface> TabSwitcher<S> {
    /// Create the switcher and render it
    ///
    /// A missing mount point is logged and leaves the switcher inert; every
    /// later call on it is ignored.
    pub fn new(surface: S, config: TabSwitcherConfig) -> Self {
        let mut switcher = Self::unmounted(surface, config);
        if let Err(e) = switcher.attach() {
            error!(mount_id = %switcher.mount_id, "SubjectSwitcher: {}", e);
        }
        switcher
    }

    /// Like [`TabSwitcher::new`], but hands the mount failure to the caller
    pub fn try_new(surface: S, config: TabSwitcherConfig) -> Result<Self, SwitcherError> {
        let mut switcher = Self::unmounted(surface, config);
        switcher.attach()?;
        Ok(switcher)
    }

    fn unmounted(surface: S, config: TabSwitcherConfig) -> Self {
        let labels = config.labels.unwrap_or_else(default_subjects);
        let selected = config
            .initial_selection
            .filter(|s| !s.is_empty())
            .or_else(|| labels.first().cloned())
            .unwrap_or_default();

        Self {
            surface,
            mount_id: config.mount_id,
            labels,
            selected,
            on_change: config.on_change.unwrap_or_else(|| Box::new(|_| {})),
            mounted: false,
        }
    }

    fn attach(&mut self) -> Result<(), SwitcherError> {
        if !self.surface.has_mount(&self.mount_id) {
            return Err(SwitcherError::MountNotFound(self.mount_id.clone()));
        }
        self.mounted = true;
        self.render();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The currently selected subject
    pub fn current_subject(&self) -> &str {
        &self.selected
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering & Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Rebuild every button from the current state
    pub fn render(&mut self) {
        if !self.mounted {
            warn!(mount_id = %self.mount_id, "render on an unmounted switcher ignored");
            return;
        }

        let buttons = self
            .labels
            .iter()
            .map(|label| {
                let mut button = TabButton::new(label.as_str());
                if *label == self.selected {
                    button.add_class(ACTIVE_CLASS);
                }
                button
            })
            .collect();

        if let Err(e) = self.surface.replace_children(&self.mount_id, buttons) {
            error!(mount_id = %self.mount_id, "SubjectSwitcher: {}", e);
            return;
        }
        debug!(mount_id = %self.mount_id, count = self.labels.len(), "rendered subject tabs");
    }

    /// Select `subject`, move the active marker, then notify
    ///
    /// The subject is not checked against the configured labels. An unknown
    /// subject leaves no button marked active.
    pub fn switch_subject(&mut self, subject: &str) {
        if !self.mounted {
            warn!(mount_id = %self.mount_id, subject, "switch on an unmounted switcher ignored");
            return;
        }

        debug!(from = %self.selected, to = subject, "switching subject");
        self.selected = subject.to_string();

        self.surface.toggle_class(&self.mount_id, ACTIVE_CLASS, &|button: &TabButton| {
            button.subject == subject
        });

        (self.on_change)(subject);
    }

    /// Subject a click at this cell would switch to
    ///
    /// `None` when the cell holds no button or the button is already selected.
    pub fn subject_at(&self, column: u16, row: u16) -> Option<String> {
        if !self.mounted {
            return None;
        }
        self.surface
            .hit_test(&self.mount_id, column, row)
            .filter(|button| button.subject != self.selected)
            .map(|button| button.subject.clone())
    }

    /// Handle a click at a screen cell; returns whether the selection changed
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.subject_at(column, row) {
            Some(subject) => {
                self.switch_subject(&subject);
                true
            }
            None => false,
        }
    }

    /// Select the label after the current one, wrapping around
    pub fn select_next(&mut self) {
        if let Some(subject) = self.neighbour(1) {
            self.switch_subject(&subject);
        }
    }

    /// Select the label before the current one, wrapping around
    pub fn select_previous(&mut self) {
        if let Some(subject) = self.neighbour(-1) {
            self.switch_subject(&subject);
        }
    }

    fn neighbour(&self, step: isize) -> Option<String> {
        let len = self.labels.len();
        if len == 0 {
            return None;
        }
        let index = match self.labels.iter().position(|l| *l == self.selected) {
            Some(current) => (current as isize + step).rem_euclid(len as isize) as usize,
            None if step > 0 => 0,
            None => len - 1,
        };
        let subject = &self.labels[index];
        (*subject != self.selected).then(|| subject.clone())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl<S: ViewSurface> Component for TabSwitcher<S> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab | KeyCode::Right => Some(Action::NextSubject),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PrevSubject),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .subject_at(mouse.column, mouse.row)
            .map(Action::SwitchSubject))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SwitchSubject(subject) => self.switch_subject(&subject),
            Action::NextSubject => self.select_next(),
            Action::PrevSubject => self.select_previous(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.mounted {
            self.surface.draw(&self.mount_id, frame, area)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TerminalSurface;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory surface: button `i` sits at column `i` of row 0
    ///
    /// Every mutation copies the affected buttons into `published`, which a
    /// change callback can hold on to.
    #[derive(Default)]
    struct FakeSurface {
        mounts: HashMap<String, Vec<TabButton>>,
        replace_calls: usize,
        published: Rc<RefCell<Vec<TabButton>>>,
    }

    impl FakeSurface {
        fn with_mount(mount_id: &str) -> Self {
            let mut surface = Self::default();
            surface.mounts.insert(mount_id.to_string(), Vec::new());
            surface
        }

        fn publish(&self, mount_id: &str) {
            if let Some(children) = self.mounts.get(mount_id) {
                *self.published.borrow_mut() = children.clone();
            }
        }
    }

    impl ViewSurface for FakeSurface {
        fn has_mount(&self, mount_id: &str) -> bool {
            self.mounts.contains_key(mount_id)
        }

        fn replace_children(
            &mut self,
            mount_id: &str,
            children: Vec<TabButton>,
        ) -> Result<(), SwitcherError> {
            let slot = self
                .mounts
                .get_mut(mount_id)
                .ok_or_else(|| SwitcherError::MountNotFound(mount_id.to_string()))?;
            *slot = children;
            self.replace_calls += 1;
            self.publish(mount_id);
            Ok(())
        }

        fn toggle_class(
            &mut self,
            mount_id: &str,
            class: &str,
            matches: &dyn Fn(&TabButton) -> bool,
        ) {
            if let Some(buttons) = self.mounts.get_mut(mount_id) {
                for button in buttons.iter_mut() {
                    if matches(button) {
                        button.add_class(class);
                    } else {
                        button.remove_class(class);
                    }
                }
            }
            self.publish(mount_id);
        }

        fn children(&self, mount_id: &str) -> Option<&[TabButton]> {
            self.mounts.get(mount_id).map(|c| c.as_slice())
        }

        fn children_mut(&mut self, mount_id: &str) -> Option<&mut [TabButton]> {
            self.mounts.get_mut(mount_id).map(|c| c.as_mut_slice())
        }

        fn hit_test(&self, mount_id: &str, column: u16, row: u16) -> Option<&TabButton> {
            if row != 0 {
                return None;
            }
            self.mounts.get(mount_id)?.get(column as usize)
        }
    }

    const MOUNT: &str = "subject-switcher";

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |s: &str| sink.borrow_mut().push(s.to_string()))
    }

    fn school_switcher() -> (TabSwitcher<FakeSurface>, Rc<RefCell<Vec<String>>>) {
        let (calls, on_change) = recorder();
        let config = TabSwitcherConfig::new(MOUNT)
            .with_labels(["Math", "Science", "History"])
            .with_initial_selection("Math")
            .with_on_change(on_change);
        (TabSwitcher::new(FakeSurface::with_mount(MOUNT), config), calls)
    }

    fn subjects(switcher: &TabSwitcher<FakeSurface>) -> Vec<String> {
        switcher
            .surface()
            .children(MOUNT)
            .unwrap()
            .iter()
            .map(|b| b.subject.clone())
            .collect()
    }

    fn active(switcher: &TabSwitcher<FakeSurface>) -> Vec<String> {
        switcher
            .surface()
            .children(MOUNT)
            .unwrap()
            .iter()
            .filter(|b| b.is_active())
            .map(|b| b.subject.clone())
            .collect()
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_renders_one_button_per_label_in_order() {
        let (switcher, calls) = school_switcher();
        assert!(switcher.is_mounted());
        assert_eq!(subjects(&switcher), vec!["Math", "Science", "History"]);
        assert_eq!(active(&switcher), vec!["Math"]);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = TabSwitcherConfig::new(MOUNT);
        let switcher = TabSwitcher::new(FakeSurface::with_mount(MOUNT), config);
        assert_eq!(switcher.labels(), default_subjects().as_slice());
        assert_eq!(switcher.current_subject(), "语文");
        assert_eq!(active(&switcher), vec!["语文"]);
    }

    #[test]
    fn test_empty_initial_selection_falls_back_to_first_label() {
        let config = TabSwitcherConfig::new(MOUNT)
            .with_labels(["Math", "Science"])
            .with_initial_selection("");
        let switcher = TabSwitcher::new(FakeSurface::with_mount(MOUNT), config);
        assert_eq!(switcher.current_subject(), "Math");
    }

    #[test]
    fn test_every_button_carries_tab_class() {
        let (switcher, _) = school_switcher();
        let buttons = switcher.surface().children(MOUNT).unwrap();
        assert!(buttons.iter().all(|b| b.has_class(crate::surface::TAB_CLASS)));
    }

    #[test]
    fn test_unmatched_initial_selection_marks_nothing() {
        let config = TabSwitcherConfig::new(MOUNT)
            .with_labels(["Math", "Science"])
            .with_initial_selection("Art");
        let switcher = TabSwitcher::new(FakeSurface::with_mount(MOUNT), config);
        assert_eq!(switcher.current_subject(), "Art");
        assert!(active(&switcher).is_empty());
    }

    #[test]
    fn test_empty_labels_render_nothing() {
        let config = TabSwitcherConfig::new(MOUNT).with_labels(Vec::<String>::new());
        let switcher = TabSwitcher::new(FakeSurface::with_mount(MOUNT), config);
        assert!(switcher.is_mounted());
        assert!(subjects(&switcher).is_empty());
        assert_eq!(switcher.current_subject(), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let (mut switcher, _) = school_switcher();
        let before = switcher.surface().children(MOUNT).unwrap().to_vec();
        switcher.render();
        assert_eq!(switcher.surface().children(MOUNT).unwrap(), before.as_slice());
        assert_eq!(switcher.surface().replace_calls, 2);
    }

    #[test]
    fn test_click_on_selected_is_noop() {
        let (mut switcher, calls) = school_switcher();
        assert!(!switcher.click(0, 0));
        assert!(calls.borrow().is_empty());
        assert_eq!(active(&switcher), vec!["Math"]);
        assert_eq!(switcher.current_subject(), "Math");
    }

    #[test]
    fn test_click_outside_buttons_is_ignored() {
        let (mut switcher, calls) = school_switcher();
        assert!(!switcher.click(7, 0));
        assert!(!switcher.click(1, 3));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_history_scenario() {
        let (mut switcher, calls) = school_switcher();

        assert!(switcher.click(2, 0));
        assert_eq!(active(&switcher), vec!["History"]);
        assert_eq!(*calls.borrow(), vec!["History"]);
        assert_eq!(switcher.current_subject(), "History");

        assert!(!switcher.click(2, 0));
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(switcher.current_subject(), "History");
        assert_eq!(active(&switcher), vec!["History"]);
    }

    #[test]
    fn test_switch_updates_marker_without_rerender() {
        let (mut switcher, calls) = school_switcher();
        switcher.switch_subject("Science");
        assert_eq!(switcher.surface().replace_calls, 1);
        assert_eq!(active(&switcher), vec!["Science"]);
        assert_eq!(*calls.borrow(), vec!["Science"]);
    }

    #[test]
    fn test_callbacks_arrive_in_switch_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let config = TabSwitcherConfig::new(MOUNT)
            .with_labels(["Math", "Science"])
            .with_on_change(move |s| sink.borrow_mut().push(s.to_string()));
        let mut switcher = TabSwitcher::new(FakeSurface::with_mount(MOUNT), config);

        switcher.switch_subject("Science");
        switcher.switch_subject("Math");
        assert_eq!(*seen.borrow(), vec!["Science", "Math"]);
    }

    #[test]
    fn test_marker_moves_before_callback_runs() {
        let surface = FakeSurface::with_mount(MOUNT);
        let buttons = Rc::clone(&surface.published);
        let active_at_callback = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&active_at_callback);
        let config = TabSwitcherConfig::new(MOUNT)
            .with_labels(["Math", "Science", "History"])
            .with_on_change(move |_| {
                let active: Vec<String> = buttons
                    .borrow()
                    .iter()
                    .filter(|b| b.is_active())
                    .map(|b| b.subject.clone())
                    .collect();
                sink.borrow_mut().push(active);
            });
        let mut switcher = TabSwitcher::new(surface, config);

        switcher.switch_subject("History");
        assert!(switcher.click(1, 0));
        assert_eq!(
            *active_at_callback.borrow(),
            vec![vec!["History".to_string()], vec!["Science".to_string()]]
        );
    }

    #[test]
    fn test_direct_switch_to_current_subject_still_notifies() {
        let (mut switcher, calls) = school_switcher();
        switcher.switch_subject("Math");
        assert_eq!(*calls.borrow(), vec!["Math"]);
        assert_eq!(active(&switcher), vec!["Math"]);
    }

    #[test]
    fn test_switch_to_unknown_label_clears_marker() {
        let (mut switcher, calls) = school_switcher();
        switcher.switch_subject("Art");
        assert!(active(&switcher).is_empty());
        assert_eq!(switcher.current_subject(), "Art");
        assert_eq!(*calls.borrow(), vec!["Art"]);
    }

    #[test]
    fn test_missing_mount_leaves_switcher_inert() {
        let (calls, on_change) = recorder();
        let config = TabSwitcherConfig::new("missing")
            .with_labels(["Math", "Science"])
            .with_on_change(on_change);
        let mut switcher = TabSwitcher::new(FakeSurface::with_mount(MOUNT), config);

        assert!(!switcher.is_mounted());
        assert_eq!(switcher.surface().replace_calls, 0);
        assert!(switcher.surface().children(MOUNT).unwrap().is_empty());

        switcher.switch_subject("Science");
        assert!(!switcher.click(1, 0));
        assert!(calls.borrow().is_empty());
        assert_eq!(switcher.current_subject(), "Math");
    }

    #[test]
    fn test_try_new_reports_missing_mount() {
        let config = TabSwitcherConfig::new("missing");
        let result = TabSwitcher::try_new(FakeSurface::default(), config);
        assert!(matches!(result, Err(SwitcherError::MountNotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_mouse_event_maps_to_switch_action() {
        let (mut switcher, calls) = school_switcher();

        assert_eq!(switcher.handle_mouse_event(left_click(0, 0)).unwrap(), None);

        let action = switcher.handle_mouse_event(left_click(1, 0)).unwrap();
        assert_eq!(action, Some(Action::SwitchSubject("Science".to_string())));
        assert!(calls.borrow().is_empty());

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..left_click(1, 0)
        };
        assert_eq!(switcher.handle_mouse_event(right).unwrap(), None);

        switcher.update(action.unwrap()).unwrap();
        assert_eq!(*calls.borrow(), vec!["Science"]);
    }

    #[test]
    fn test_keyboard_navigation_wraps() {
        let (mut switcher, calls) = school_switcher();

        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        let action = switcher.handle_key_event(key).unwrap().unwrap();
        switcher.update(action).unwrap();
        assert_eq!(switcher.current_subject(), "History");

        switcher.select_next();
        assert_eq!(switcher.current_subject(), "Math");
        assert_eq!(*calls.borrow(), vec!["History", "Math"]);
    }

    #[test]
    fn test_keyboard_navigation_from_unknown_subject() {
        let (mut switcher, _) = school_switcher();
        switcher.switch_subject("Art");
        switcher.select_next();
        assert_eq!(switcher.current_subject(), "Math");

        switcher.switch_subject("Art");
        switcher.select_previous();
        assert_eq!(switcher.current_subject(), "History");
    }

    #[test]
    fn test_single_label_navigation_does_not_notify() {
        let (calls, on_change) = recorder();
        let config = TabSwitcherConfig::new(MOUNT)
            .with_labels(["Math"])
            .with_on_change(on_change);
        let mut switcher = TabSwitcher::new(FakeSurface::with_mount(MOUNT), config);
        switcher.select_next();
        switcher.select_previous();
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_terminal_click_after_draw() {
        let (calls, on_change) = recorder();
        let config = TabSwitcherConfig::new(MOUNT)
            .with_labels(["语文", "数学", "英语"])
            .with_on_change(on_change);
        let surface = TerminalSurface::new().with_mount(MOUNT);
        let mut switcher = TabSwitcher::new(surface, config);

        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                switcher.draw(frame, area).unwrap();
            })
            .unwrap();

        // " 语文 " is 6 columns wide, then the divider, then " 数学 "
        assert!(!switcher.click(3, 0));
        assert!(switcher.click(8, 0));
        assert_eq!(switcher.current_subject(), "数学");
        assert_eq!(*calls.borrow(), vec!["数学"]);
    }
}
