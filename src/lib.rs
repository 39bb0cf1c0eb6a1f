//! subject-tabs - A subject tab bar for the terminal
//!
//! [`components::TabSwitcher`] renders one clickable button per subject into
//! a mount point of a [`surface::ViewSurface`], marks the selected one
//! active, and calls back on every selection change. The binary hosts it in
//! a ratatui screen.

pub mod action;
pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod surface;
pub mod tui;

pub use components::{TabSwitcher, TabSwitcherConfig};
pub use error::SwitcherError;
pub use surface::{TabButton, TerminalSurface, ViewSurface};
