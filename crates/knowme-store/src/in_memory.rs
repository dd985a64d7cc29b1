//! In-memory `AggregateRepository` backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use knowme_core::aggregate::AggregateRoot;
use knowme_core::repository::{AggregateRepository, RepositoryError};
use uuid::Uuid;

/// Stores whole aggregates keyed by id.
///
/// The map's per-key entry lock makes the version check and the write one
/// atomic step, so two writers racing on the same aggregate resolve into
/// one win and one [`RepositoryError::ConcurrencyConflict`] — never a lost
/// update.
#[derive(Debug)]
pub struct InMemoryRepository<A> {
    aggregates: DashMap<Uuid, A>,
}

impl<A: AggregateRoot + Clone> InMemoryRepository<A> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aggregates: DashMap::new(),
        }
    }
}

impl<A: AggregateRoot + Clone> Default for InMemoryRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<A: AggregateRoot + Clone> AggregateRepository<A> for InMemoryRepository<A> {
    async fn load(&self, aggregate_id: Uuid) -> Result<A, RepositoryError> {
        self.aggregates
            .get(&aggregate_id)
            .map(|entry| entry.value().clone())
            .ok_or(RepositoryError::AggregateNotFound(aggregate_id))
    }

    async fn save(&self, aggregate: &A, expected_version: i64) -> Result<(), RepositoryError> {
        let aggregate_id = aggregate.aggregate_id();
        match self.aggregates.entry(aggregate_id) {
            Entry::Occupied(mut slot) => {
                let actual = slot.get().version();
                if actual != expected_version {
                    return Err(RepositoryError::ConcurrencyConflict {
                        aggregate_id,
                        expected: expected_version,
                        actual,
                    });
                }
                slot.insert(aggregate.clone());
                Ok(())
            }
            Entry::Vacant(slot) => {
                if expected_version != 0 {
                    return Err(RepositoryError::ConcurrencyConflict {
                        aggregate_id,
                        expected: expected_version,
                        actual: 0,
                    });
                }
                slot.insert(aggregate.clone());
                Ok(())
            }
        }
    }
}
