//! Error types for the tab switcher

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitcherError {
    #[error("Container with ID \"{0}\" not found.")]
    MountNotFound(String),
}
