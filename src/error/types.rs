//! Custom error types for deployment operations

use thiserror::Error;

/// Main error type for compose-deploy operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DeployError {
    /// Neither `docker-compose` nor the `docker compose` plugin answered a version query
    #[error(
        "docker-compose command not found. Make sure Docker and Docker Compose are installed"
    )]
    ComposeUnavailable,

    /// The compose file does not exist where the operation expects it
    #[error("Compose file not found: {path}")]
    MissingConfiguration { path: String },

    /// The external compose command could not be launched or exited non-zero
    #[error("Command failed: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// Action name outside the supported set
    #[error(
        "Unknown action: {action}. Use one of: init, start, restart, stop, delete, status, logs"
    )]
    UnknownAction { action: String },

    /// Output format outside the supported set
    #[error("Invalid format: {format}. Use 'shell' or 'json'")]
    InvalidFormat { format: String },
}

impl DeployError {
    /// Create a missing configuration error
    #[inline]
    pub fn missing_configuration<S: Into<String>>(path: S) -> Self {
        Self::MissingConfiguration { path: path.into() }
    }

    /// Create a command failure error
    #[inline]
    pub fn command_failed<C: Into<String>, M: Into<String>>(command: C, message: M) -> Self {
        Self::CommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create an unknown action error
    #[inline]
    pub fn unknown_action<S: Into<String>>(action: S) -> Self {
        Self::UnknownAction {
            action: action.into(),
        }
    }

    /// Create an invalid output format error
    #[inline]
    pub fn invalid_format<S: Into<String>>(format: S) -> Self {
        Self::InvalidFormat {
            format: format.into(),
        }
    }
}
