//! Error types for Razed

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RazeError {
    #[error("Enumeration error: {0}")]
    EnumerationError(String),

    #[error("Access denied: {0}")]
    AccessError(String),

    #[error("Failed to terminate {name} (PID {pid}): {reason}")]
    TerminationError {
        name: String,
        pid: u32,
        reason: String,
    },

    #[error("Service not found: {0}")]
    ServiceNotFoundError(String),

    #[error("Service control error for {name}: {reason}")]
    ServiceControlError { name: String, reason: String },

    #[error("Registry key not found: {0}")]
    KeyNotFoundError(String),

    #[error("Cannot remove {path}: {reason}")]
    PathAccessError { path: String, reason: String },

    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}

impl RazeError {
    /// True for the errors that mean "already gone" rather than "could not remove".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RazeError::ServiceNotFoundError(_) | RazeError::KeyNotFoundError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RazeError>;
