//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for state-stored aggregate roots.
///
/// An aggregate mutates its own state in place and records a domain event
/// for every change. The version counts committed events and is the value
/// optimistic saves compare against; uncommitted events do not advance it
/// until [`AggregateRoot::commit_events`] drains them.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of committed events).
    fn version(&self) -> i64;

    /// Returns events recorded since the last commit.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Drains the uncommitted events, advancing the version past them.
    fn commit_events(&mut self) -> Vec<Self::Event>;
}
