//! Error types for mise-core.
//!
//! The parsing and compiling pipeline is total and never produces these.
//! They only surface at the boundaries: decoding externally supplied JSON,
//! validating loaded recipes/documents, and validating configuration.

use thiserror::Error;

/// Result alias used across the crate.
pub type MiseResult<T> = Result<T, MiseError>;

#[derive(Debug, Error)]
pub enum MiseError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl MiseError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}

impl From<serde_json::Error> for MiseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
