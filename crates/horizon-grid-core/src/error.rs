//! Error types for Horizon Grid core.

use std::fmt;

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

/// Deferred task errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The task ID is unknown, or the task already ran or was cancelled.
    InvalidTaskId,
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTaskId => write!(f, "Invalid, finished or cancelled task ID"),
        }
    }
}

impl std::error::Error for TaskError {}
