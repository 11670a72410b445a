mod commands;

use thiserror::Error;

use crate::state::{Outcome, PersistenceError};

pub use commands::Command;

/// Result type for command operations
pub type CommandResult = Result<Outcome, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command parameters are invalid
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    /// Saving or loading the scene failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
