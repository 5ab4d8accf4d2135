//! Core error types for slotkeeper-core.
//!
//! The conflict engine itself never fails: an unresolved conflict is reported
//! through [`ConflictDetectionResult`](crate::conflict::ConflictDetectionResult).
//! Errors only arise at the boundary, when caller input is parsed into the
//! engine's value types or when preferences are loaded from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for slotkeeper-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed caller input
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML encoding errors
    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

/// Errors produced while converting strings into engine values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not a valid 24-hour `HH:mm` time
    #[error("Invalid time '{0}': expected HH:mm on a 24-hour clock")]
    InvalidTime(String),

    /// Not a valid ISO calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Not a valid two-digit hour prefix
    #[error("Invalid productivity hour '{0}': expected an hour between 00 and 23")]
    InvalidHour(String),

    /// Interval whose end does not come after its start
    #[error("Invalid time range: end ({end}) must be after start ({start})")]
    InvalidRange { start: String, end: String },
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

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
