//! Domain events for the game session context.
//!
//! The aggregate records one of these for every state change. The
//! application layer drains them after a successful save; pushing them to
//! connected clients is the transport collaborator's job.

use knowme_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted when a game session is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCreated {
    /// The game identifier.
    pub game_id: Uuid,
    /// The session name.
    pub name: String,
    /// The founding user, who is also the first player.
    pub created_by: Uuid,
}

/// Emitted when a player joins the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerJoined {
    /// The game identifier.
    pub game_id: Uuid,
    /// The joining user.
    pub user_id: Uuid,
}

/// Emitted when a question is added to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAdded {
    /// The game identifier.
    pub game_id: Uuid,
    /// The new question.
    pub question_id: Uuid,
    /// The question's position in the session.
    pub sequence: usize,
}

/// Emitted when the game starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStarted {
    /// The game identifier.
    pub game_id: Uuid,
    /// The question the game opens on.
    pub first_question_id: Uuid,
}

/// Emitted when a player records their own choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceRecorded {
    /// The game identifier.
    pub game_id: Uuid,
    /// The question the choice belongs to.
    pub question_id: Uuid,
    /// The answering user.
    pub user_id: Uuid,
}

/// Emitted when a player records a guess about another player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRecorded {
    /// The game identifier.
    pub game_id: Uuid,
    /// The question the guess belongs to.
    pub question_id: Uuid,
    /// The guessing user.
    pub guessing_user_id: Uuid,
    /// The user whose choice was guessed.
    pub choice_user_id: Uuid,
}

/// Emitted when the session moves on to the next unanswered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAdvanced {
    /// The game identifier.
    pub game_id: Uuid,
    /// The question that was just completed.
    pub previous_question_id: Uuid,
    /// The question the session now points at.
    pub next_question_id: Uuid,
}

/// Emitted when the last question completes and the game ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEnded {
    /// The game identifier.
    pub game_id: Uuid,
}

/// Event type identifier for [`GameCreated`].
pub const GAME_CREATED_EVENT_TYPE: &str = "game.created";

/// Event type identifier for [`PlayerJoined`].
pub const PLAYER_JOINED_EVENT_TYPE: &str = "game.player_joined";

/// Event type identifier for [`QuestionAdded`].
pub const QUESTION_ADDED_EVENT_TYPE: &str = "game.question_added";

/// Event type identifier for [`GameStarted`].
pub const GAME_STARTED_EVENT_TYPE: &str = "game.started";

/// Event type identifier for [`ChoiceRecorded`].
pub const CHOICE_RECORDED_EVENT_TYPE: &str = "game.choice_recorded";

/// Event type identifier for [`GuessRecorded`].
pub const GUESS_RECORDED_EVENT_TYPE: &str = "game.guess_recorded";

/// Event type identifier for [`QuestionAdvanced`].
pub const QUESTION_ADVANCED_EVENT_TYPE: &str = "game.question_advanced";

/// Event type identifier for [`GameEnded`].
pub const GAME_ENDED_EVENT_TYPE: &str = "game.ended";

/// Event payload variants for the game session context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEventKind {
    /// A game session has been created.
    GameCreated(GameCreated),
    /// A player has joined.
    PlayerJoined(PlayerJoined),
    /// A question has been added.
    QuestionAdded(QuestionAdded),
    /// The game has started.
    GameStarted(GameStarted),
    /// A choice has been recorded.
    ChoiceRecorded(ChoiceRecorded),
    /// A guess has been recorded.
    GuessRecorded(GuessRecorded),
    /// The session advanced to the next question.
    QuestionAdvanced(QuestionAdvanced),
    /// The game has ended.
    GameEnded(GameEnded),
}

/// Domain event envelope for the game session context.
#[derive(Debug, Clone)]
pub struct GameEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: GameEventKind,
}

impl DomainEvent for GameEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            GameEventKind::GameCreated(_) => GAME_CREATED_EVENT_TYPE,
            GameEventKind::PlayerJoined(_) => PLAYER_JOINED_EVENT_TYPE,
            GameEventKind::QuestionAdded(_) => QUESTION_ADDED_EVENT_TYPE,
            GameEventKind::GameStarted(_) => GAME_STARTED_EVENT_TYPE,
            GameEventKind::ChoiceRecorded(_) => CHOICE_RECORDED_EVENT_TYPE,
            GameEventKind::GuessRecorded(_) => GUESS_RECORDED_EVENT_TYPE,
            GameEventKind::QuestionAdvanced(_) => QUESTION_ADVANCED_EVENT_TYPE,
            GameEventKind::GameEnded(_) => GAME_ENDED_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("GameEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
