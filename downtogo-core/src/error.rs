//! Error types for downtogo.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in downtogo operations.
///
/// The membership store never returns these; they come from configuration,
/// catalog loading and the storage backends.
#[derive(Error, Debug)]
pub enum DownToGoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not parse catalog at {path}: {message}")]
    Catalog { path: PathBuf, message: String },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for downtogo operations.
pub type DownToGoResult<T> = Result<T, DownToGoError>;
