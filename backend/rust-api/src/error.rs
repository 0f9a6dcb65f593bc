use thiserror::Error;

use crate::store::StoreError;

/// Failure taxonomy of the query engine. Each variant is distinguishable
/// by the transport layer; quiz exhaustion is deliberately absent because
/// it is a successful terminal outcome, not a failure.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed or missing caller input.
    #[error("{0}")]
    InvalidArgument(String),

    /// The referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The store collaborator failed; surfaced once, never retried.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

impl EngineError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        EngineError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        EngineError::NotFound(message.into())
    }
}
