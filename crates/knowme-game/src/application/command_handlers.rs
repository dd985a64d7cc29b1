//! Command handlers for the game session context.
//!
//! Each handler orchestrates one command: load the aggregate (or create
//! it), run the domain operation, commit the recorded events, and save
//! with the version observed at load time. The committed events are
//! returned to the caller, which decides how to dispatch them.

use knowme_core::aggregate::AggregateRoot;
use knowme_core::clock::Clock;
use knowme_core::command::Command;
use knowme_core::event::DomainEvent;
use knowme_core::repository::AggregateRepository;
use tracing::debug;
use uuid::Uuid;

use crate::domain::commands::{
    AddQuestion, CreateGame, JoinGame, RecordChoice, RecordGuess, StartGame,
};
use crate::domain::events::GameEvent;
use crate::domain::session::GameSession;

use super::error::GameError;

/// Result of a successfully handled game command.
#[derive(Debug)]
pub struct GameCommandResult {
    /// The game affected or created by the command.
    pub game_id: Uuid,
    /// The domain events committed by the command.
    pub events: Vec<GameEvent>,
}

/// Result of a successfully handled `AddQuestion` command.
#[derive(Debug)]
pub struct QuestionCommandResult {
    /// The game the question was added to.
    pub game_id: Uuid,
    /// The new question.
    pub question_id: Uuid,
    /// The domain events committed by the command.
    pub events: Vec<GameEvent>,
}

fn log_committed_events(command: &dyn Command, events: &[GameEvent]) {
    for event in events {
        debug!(
            command_type = command.command_type(),
            correlation_id = %command.correlation_id(),
            event_type = event.event_type(),
            game_id = %event.metadata().aggregate_id,
            "domain event committed"
        );
    }
}

/// Handles `CreateGame`: creates the aggregate and saves it.
///
/// # Errors
///
/// Returns `GameError::Rejected` when validation fails and
/// `GameError::Repository` when the save fails.
pub async fn handle_create_game(
    command: &CreateGame,
    clock: &dyn Clock,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<GameCommandResult, GameError> {
    let mut game = GameSession::create(
        command.name.clone(),
        command.created_by,
        command.correlation_id,
        clock,
    )?;

    let events = game.commit_events();
    repo.save(&game, 0).await?;
    log_committed_events(command, &events);

    Ok(GameCommandResult {
        game_id: game.id(),
        events,
    })
}

/// Handles `JoinGame`: loads the game and adds the player.
///
/// # Errors
///
/// Returns `GameError::Repository` when the game cannot be loaded or
/// saved, and `GameError::Rejected` when the roster rules refuse the join.
pub async fn handle_join_game(
    command: &JoinGame,
    clock: &dyn Clock,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<GameCommandResult, GameError> {
    let mut game = repo.load(command.game_id).await?;
    let expected_version = game.version();

    game.add_player(command.user_id, command.correlation_id, clock)?;

    let events = game.commit_events();
    repo.save(&game, expected_version).await?;
    log_committed_events(command, &events);

    Ok(GameCommandResult {
        game_id: game.id(),
        events,
    })
}

/// Handles `AddQuestion`: loads the game and appends a validated question.
///
/// # Errors
///
/// Returns `GameError::Repository` when the game cannot be loaded or
/// saved, and `GameError::Rejected` when question validation fails.
pub async fn handle_add_question(
    command: &AddQuestion,
    clock: &dyn Clock,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<QuestionCommandResult, GameError> {
    let mut game = repo.load(command.game_id).await?;
    let expected_version = game.version();

    let question_id = game.add_question(
        command.text.clone(),
        command.multiple_answers,
        &command.variants,
        command.created_by,
        command.correlation_id,
        clock,
    )?;

    let events = game.commit_events();
    repo.save(&game, expected_version).await?;
    log_committed_events(command, &events);

    Ok(QuestionCommandResult {
        game_id: game.id(),
        question_id,
        events,
    })
}

/// Handles `StartGame`.
///
/// # Errors
///
/// Returns `GameError::Repository` when the game cannot be loaded or
/// saved, and `GameError::Rejected` when the start preconditions fail.
pub async fn handle_start_game(
    command: &StartGame,
    clock: &dyn Clock,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<GameCommandResult, GameError> {
    let mut game = repo.load(command.game_id).await?;
    let expected_version = game.version();

    game.start_game(command.correlation_id, clock)?;

    let events = game.commit_events();
    repo.save(&game, expected_version).await?;
    log_committed_events(command, &events);

    Ok(GameCommandResult {
        game_id: game.id(),
        events,
    })
}

/// Handles `RecordChoice` on the game's current question.
///
/// # Errors
///
/// Returns `GameError::Repository` when the game cannot be loaded or
/// saved, and `GameError::Rejected` when the choice is refused.
pub async fn handle_record_choice(
    command: &RecordChoice,
    clock: &dyn Clock,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<GameCommandResult, GameError> {
    let mut game = repo.load(command.game_id).await?;
    let expected_version = game.version();

    game.record_choice(
        command.user_id,
        &command.selected_variant_ids,
        command.correlation_id,
        clock,
    )?;

    let events = game.commit_events();
    repo.save(&game, expected_version).await?;
    log_committed_events(command, &events);

    Ok(GameCommandResult {
        game_id: game.id(),
        events,
    })
}

/// Handles `RecordGuess` on the game's current question. A completing
/// guess also advances the session, so the committed events may include a
/// question advancement or the end of the game.
///
/// # Errors
///
/// Returns `GameError::Repository` when the game cannot be loaded or
/// saved, and `GameError::Rejected` when the guess is refused.
pub async fn handle_record_guess(
    command: &RecordGuess,
    clock: &dyn Clock,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<GameCommandResult, GameError> {
    let mut game = repo.load(command.game_id).await?;
    let expected_version = game.version();

    game.record_guess(
        command.guessing_user_id,
        command.choice_user_id,
        &command.selected_variant_ids,
        command.correlation_id,
        clock,
    )?;

    let events = game.commit_events();
    repo.save(&game, expected_version).await?;
    log_committed_events(command, &events);

    Ok(GameCommandResult {
        game_id: game.id(),
        events,
    })
}
