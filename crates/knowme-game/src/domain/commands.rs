//! Commands for the game session context.

use std::collections::BTreeMap;

use knowme_core::command::Command;
use uuid::Uuid;

/// Command to create a new game session.
#[derive(Debug, Clone)]
pub struct CreateGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session name.
    pub name: String,
    /// The founding user.
    pub created_by: Uuid,
}

impl Command for CreateGame {
    fn command_type(&self) -> &'static str {
        "game.create"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to add a player to a game.
#[derive(Debug, Clone)]
pub struct JoinGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game to join.
    pub game_id: Uuid,
    /// The joining user.
    pub user_id: Uuid,
}

impl Command for JoinGame {
    fn command_type(&self) -> &'static str {
        "game.join"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to add a question to a game.
#[derive(Debug, Clone)]
pub struct AddQuestion {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game the question belongs to.
    pub game_id: Uuid,
    /// The question text.
    pub text: String,
    /// Whether several variants together form the right answer.
    pub multiple_answers: bool,
    /// Answer variants, label to text.
    pub variants: BTreeMap<String, String>,
    /// The authoring user.
    pub created_by: Uuid,
}

impl Command for AddQuestion {
    fn command_type(&self) -> &'static str {
        "game.add_question"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to start a game.
#[derive(Debug, Clone)]
pub struct StartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game to start.
    pub game_id: Uuid,
}

impl Command for StartGame {
    fn command_type(&self) -> &'static str {
        "game.start"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to record a player's own choice on the current question.
#[derive(Debug, Clone)]
pub struct RecordChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game being played.
    pub game_id: Uuid,
    /// The answering user.
    pub user_id: Uuid,
    /// The selected variant ids.
    pub selected_variant_ids: Vec<Uuid>,
}

impl Command for RecordChoice {
    fn command_type(&self) -> &'static str {
        "game.record_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to record one player's guess about another player's choice.
#[derive(Debug, Clone)]
pub struct RecordGuess {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game being played.
    pub game_id: Uuid,
    /// The guessing user.
    pub guessing_user_id: Uuid,
    /// The user whose choice is being guessed.
    pub choice_user_id: Uuid,
    /// The selected variant ids.
    pub selected_variant_ids: Vec<Uuid>,
}

impl Command for RecordGuess {
    fn command_type(&self) -> &'static str {
        "game.record_guess"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
