//! Subcommand implementations.

/// Create command handler.
pub mod create;

/// Find command handler.
pub mod find;

/// Get command handler.
pub mod get;

/// Roles listing command handler.
pub mod roles;

/// Show command handler.
pub mod show;

use std::fmt;

/// Command failures that map to a specific exit code in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The directory could not be resolved, or the file was not found.
    Unavailable(String),
    /// The role cannot be used with this command.
    Usage(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) | Self::Usage(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for CommandError {}
