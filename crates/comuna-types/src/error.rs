//! Error types for comuna-registry

use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Backing store errors
///
/// The repository recovers from `Unreadable` and `Unwritable` itself and only
/// reports them through its observer. `MalformedRecord` escapes only when the
/// load policy says to abort.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cannot read store {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write store {}: {source}", path.display())]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Comuna {id} cannot be stored: {reason}")]
    UnstorableRecord { id: i32, reason: String },
}

impl StoreError {
    /// True when the store file simply does not exist yet
    pub fn is_missing_store(&self) -> bool {
        matches!(
            self,
            StoreError::Unreadable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Domain-level errors raised by callers of the repository
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("No comuna found with id {0}")]
    RecordNotFound(i32),

    #[error("Invalid date: {0}")]
    InvalidBirthDate(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Logger error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
