//! Domain errors for the redraft analytics engine.

use thiserror::Error;

/// Domain-level errors that can occur in the redraft system.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The log store could not be queried. Deliberately distinct from an
    /// empty session, which is not an error and analyzes to a zeroed record.
    #[error("Log retrieval failed for session {session_id}: {reason}")]
    LogRetrievalFailed { session_id: String, reason: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
