//! subject-tabs binary
//!
//! Mounts the subject switcher at the top of the screen and shows the change
//! notifications it emits. Uses the Component Architecture pattern from
//! ratatui.

use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;
use subject_tabs::action::Action;
use subject_tabs::app::App;
use subject_tabs::component::Component;
use subject_tabs::config::Config;
use subject_tabs::logging;
use subject_tabs::tui::Tui;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Logging is optional; the UI still runs without a log file
    let log_path = logging::init().unwrap_or_else(|e| {
        eprintln!("Logging disabled: {}", e);
        None
    });

    let config = Config::load();
    if !Config::exists() {
        // Leave a template behind for the user to edit
        if let Err(e) = config.save() {
            warn!("could not write default config: {}", e);
        }
    }
    info!(
        mount_id = %config.mount_id,
        subjects = ?config.subjects,
        log = ?log_path,
        "starting subject-tabs"
    );

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(config);
    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        error!("fatal: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            let area = frame.area();
            draw_result = app.draw(frame, area);
        })?;
        draw_result?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // An update may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
