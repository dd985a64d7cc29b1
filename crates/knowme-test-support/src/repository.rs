//! Test repositories — mock `AggregateRepository` implementations.

use std::marker::PhantomData;
use std::sync::Mutex;

use async_trait::async_trait;
use knowme_core::aggregate::AggregateRoot;
use knowme_core::repository::{AggregateRepository, RepositoryError};
use uuid::Uuid;

/// A repository over a single aggregate slot that records every save.
///
/// `load` returns a clone of whatever is in the slot regardless of the
/// requested id (or `AggregateNotFound` when the slot is empty), and every
/// successful `save` replaces the slot, so sequential handler calls observe
/// each other's writes.
#[derive(Debug)]
pub struct RecordingRepository<A> {
    slot: Mutex<Option<A>>,
    saves: Mutex<Vec<(Uuid, i64, i64)>>,
}

impl<A: AggregateRoot + Clone> RecordingRepository<A> {
    /// Creates a repository with an empty slot; every `load` fails with
    /// `AggregateNotFound`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slot: Mutex::new(None),
            saves: Mutex::new(Vec::new()),
        }
    }

    /// Creates a repository seeded with one aggregate.
    #[must_use]
    pub fn seeded(aggregate: A) -> Self {
        Self {
            slot: Mutex::new(Some(aggregate)),
            saves: Mutex::new(Vec::new()),
        }
    }

    /// Returns a clone of the aggregate currently in the slot.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn current(&self) -> Option<A> {
        self.slot.lock().unwrap().clone()
    }

    /// Returns `(aggregate_id, expected_version, version_after)` for every
    /// save, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saves(&self) -> Vec<(Uuid, i64, i64)> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl<A: AggregateRoot + Clone> AggregateRepository<A> for RecordingRepository<A> {
    async fn load(&self, aggregate_id: Uuid) -> Result<A, RepositoryError> {
        self.slot
            .lock()
            .unwrap()
            .clone()
            .ok_or(RepositoryError::AggregateNotFound(aggregate_id))
    }

    async fn save(&self, aggregate: &A, expected_version: i64) -> Result<(), RepositoryError> {
        self.saves.lock().unwrap().push((
            aggregate.aggregate_id(),
            expected_version,
            aggregate.version(),
        ));
        *self.slot.lock().unwrap() = Some(aggregate.clone());
        Ok(())
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingRepository<A>(PhantomData<fn() -> A>);

impl<A> FailingRepository<A> {
    /// Creates a failing repository.
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<A> Default for FailingRepository<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<A: AggregateRoot> AggregateRepository<A> for FailingRepository<A> {
    async fn load(&self, _aggregate_id: Uuid) -> Result<A, RepositoryError> {
        Err(RepositoryError::Infrastructure("connection refused".into()))
    }

    async fn save(&self, _aggregate: &A, _expected_version: i64) -> Result<(), RepositoryError> {
        Err(RepositoryError::Infrastructure("connection refused".into()))
    }
}
