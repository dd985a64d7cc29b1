//! Application-level error type.

use knowme_core::repository::RepositoryError;
use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Errors returned by command and query handlers.
#[derive(Debug, Error)]
pub enum GameError {
    /// One or more business rules rejected the operation.
    #[error(transparent)]
    Rejected(#[from] ValidationErrors),

    /// The storage collaborator failed: unknown game, stale version, or
    /// backend trouble.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
