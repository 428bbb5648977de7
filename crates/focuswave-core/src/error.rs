//! Core error types for focuswave-core.
//!
//! The taxonomy is deliberately small: unknown records are `NotFound`,
//! illegal state-machine transitions are `InvalidState`, and out-of-range
//! lifestyle inputs surface as `Validation` errors. Nothing is swallowed;
//! every failure is reported as a structured result.

use std::path::PathBuf;
use thiserror::Error;

use crate::session::SessionState;

/// Core error type for focuswave-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A user or session id did not resolve to a stored record.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// A session transition was attempted from a disallowed state.
    /// The session is left untouched when this is returned.
    #[error("cannot {action} a session in the '{state}' state")]
    InvalidState {
        action: &'static str,
        state: SessionState,
    },

    /// Lifestyle input failed range/type validation.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Record store errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which collection a failed lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Session,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::User => write!(f, "user"),
            RecordKind::Session => write!(f, "session"),
        }
    }
}

/// Lifestyle-input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Numeric field outside its accepted range.
    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Enum field could not be parsed from its string form.
    #[error("unknown value for '{field}': {value}")]
    UnknownVariant { field: &'static str, value: String },
}

/// Record-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a record collection from disk.
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a record collection to disk.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record collection exists but cannot be parsed.
    #[error("corrupt record collection at {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// The store directory could not be resolved or created.
    #[error("failed to open store directory: {0}")]
    OpenFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
