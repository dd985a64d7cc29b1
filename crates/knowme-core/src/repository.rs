//! Aggregate repository abstraction.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::aggregate::AggregateRoot;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An aggregate was not found.
    #[error("aggregate not found: {0}")]
    AggregateNotFound(Uuid),

    /// Optimistic concurrency conflict.
    #[error(
        "concurrency conflict on aggregate {aggregate_id}: expected version {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        /// The aggregate that had the conflict.
        aggregate_id: Uuid,
        /// The expected version.
        expected: i64,
        /// The actual version found.
        actual: i64,
    },

    /// An infrastructure/backend error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

/// Repository trait for loading and saving whole aggregates.
///
/// `save` takes the version the caller observed at load time; a store must
/// reject the write with [`RepositoryError::ConcurrencyConflict`] when the
/// stored version has moved since. This is the serialization point for
/// concurrent mutations of one aggregate — the aggregates themselves do no
/// locking.
#[async_trait]
pub trait AggregateRepository<A: AggregateRoot>: Send + Sync {
    /// Load an aggregate by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::AggregateNotFound` if no aggregate exists
    /// under `aggregate_id`.
    async fn load(&self, aggregate_id: Uuid) -> Result<A, RepositoryError>;

    /// Persist an aggregate, guarded by the version observed at load time.
    ///
    /// A freshly created aggregate is saved with `expected_version` 0.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ConcurrencyConflict` if the stored version
    /// no longer matches `expected_version`.
    async fn save(&self, aggregate: &A, expected_version: i64) -> Result<(), RepositoryError>;
}
