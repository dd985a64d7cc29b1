//! Shared application state.

use std::sync::Arc;

use knowme_core::clock::Clock;
use knowme_core::repository::AggregateRepository;
use knowme_game::domain::session::GameSession;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of timestamps for domain operations.
    pub clock: Arc<dyn Clock>,
    /// Storage collaborator for game session aggregates.
    pub games: Arc<dyn AggregateRepository<GameSession>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        games: Arc<dyn AggregateRepository<GameSession>>,
    ) -> Self {
        Self { clock, games }
    }
}
