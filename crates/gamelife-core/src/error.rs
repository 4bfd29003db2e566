//! Core error types for gamelife-core.
//!
//! Domain commands (rewarding, reordering, time-slot placement) never fail;
//! they report "nothing happened" through `bool`/`Option` returns. The
//! errors below only surface at the storage and configuration boundary,
//! plus the one validated input in the core, the timeline range.

use std::path::PathBuf;
use thiserror::Error;

/// State persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the state file failed
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted blob is not a valid game state
    #[error("Malformed game state: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The state could not be serialized
    #[error("Failed to serialize game state: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Not an `HH:MM` wall-clock time
    #[error("Invalid time for '{field}': {value} (expected HH:MM)")]
    InvalidTime { field: String, value: String },

    /// Timeline range runs backwards
    #[error("Invalid time range: end ({end}) must not be earlier than start ({start})")]
    InvalidTimeRange { start: String, end: String },
}
