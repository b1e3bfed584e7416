//! Typed errors for the store and the entry form

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read '{key}' from {path}: {source}")]
    Read {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{key}' to {path}: {source}")]
    Write {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reason a submitted entry form was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is empty")]
    EmptyName,
    #[error("'{0}' is not a number")]
    InvalidAmount(String),
    #[error("date is empty")]
    EmptyDate,
}
