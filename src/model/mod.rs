//! Model layer - state shared between components

pub mod change_log;

pub use change_log::ChangeLog;
