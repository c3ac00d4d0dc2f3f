//! Error types for potluck operations.

use thiserror::Error;

/// Errors that can occur while loading, aggregating or assembling event data.
#[derive(Error, Debug)]
pub enum PotluckError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Aggregation failed: {0}")]
    AggregationFailure(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PotluckError {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        PotluckError::NotFound(what.to_string())
    }
}

/// Result type alias for potluck operations.
pub type PotluckResult<T> = Result<T, PotluckError>;
