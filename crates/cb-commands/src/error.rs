//! Error types for command registration.

use thiserror::Error;

/// Errors that can occur while populating a [`CommandRegistry`](crate::CommandRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A command with the same name is already registered.
    #[error("Command already registered: {0}")]
    DuplicateCommand(String),

    /// The command name is empty or contains whitespace.
    #[error("Invalid command name: {0:?}")]
    InvalidName(String),
}

/// Result type for registry operations.
pub type CommandResult<T> = Result<T, RegistryError>;
