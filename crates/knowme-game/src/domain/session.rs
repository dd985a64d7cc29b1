//! The game session aggregate root.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use knowme_core::aggregate::AggregateRoot;
use knowme_core::clock::Clock;
use knowme_core::event::EventMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::{
    ChoiceRecorded, GameCreated, GameEnded, GameEvent, GameEventKind, GameStarted, GuessRecorded,
    PlayerJoined, QuestionAdded, QuestionAdvanced,
};
use super::question::{Question, UserResult};
use super::validation::{Outcome, ValidationError, ValidationErrors};

const MAX_NAME_LEN: usize = 100;
const MIN_PLAYERS: usize = 2;
const MIN_QUESTIONS: usize = 2;

/// Lifecycle of a game session. Transitions are one-directional:
/// Created → Started → Ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Players are joining and questions are being collected.
    Created,
    /// The game is running.
    Started,
    /// Every question has been fully answered.
    Ended,
}

/// The aggregate root for one run of the game.
///
/// Owns the player roster, the ordered question set, and the current
/// question pointer. All mutations go through its operations; question
/// state is reached only by delegation. The aggregate does no locking —
/// concurrent mutations are serialized by the repository's optimistic
/// version check.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    created_by: Uuid,
    version: i64,
    status: GameStatus,
    players: Vec<Uuid>,
    questions: Vec<Question>,
    current_question_id: Option<Uuid>,
    uncommitted_events: Vec<GameEvent>,
}

impl GameSession {
    /// Creates a session with the founding user as its sole player.
    ///
    /// # Errors
    ///
    /// Returns `GameNameTooLong` if the name exceeds 100 characters.
    pub fn create(
        name: String,
        created_by: Uuid,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Outcome<Self> {
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationErrors::from(ValidationError::GameNameTooLong));
        }

        let mut game = Self {
            id: Uuid::new_v4(),
            name,
            created_at: clock.now(),
            created_by,
            version: 0,
            status: GameStatus::Created,
            players: vec![created_by],
            questions: Vec::new(),
            current_question_id: None,
            uncommitted_events: Vec::new(),
        };

        game.record_event(
            GameEventKind::GameCreated(GameCreated {
                game_id: game.id,
                name: game.name.clone(),
                created_by,
            }),
            correlation_id,
            clock,
        );

        Ok(game)
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the session name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the founding user.
    #[must_use]
    pub fn created_by(&self) -> Uuid {
        self.created_by
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the roster in join order. The creator is always first.
    #[must_use]
    pub fn players(&self) -> &[Uuid] {
        &self.players
    }

    /// Returns the questions in insertion order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question the game currently points at. `None` before
    /// the game starts and after it ends.
    #[must_use]
    pub fn current_question_id(&self) -> Option<Uuid> {
        self.current_question_id
    }

    /// Adds a user to the roster.
    ///
    /// # Errors
    ///
    /// Rejects duplicate players and joins after the game has started.
    pub fn add_player(
        &mut self,
        user_id: Uuid,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Outcome<()> {
        let mut errors = Vec::new();
        if let Some(error) = self.require_created() {
            errors.push(error);
        }
        if self.players.contains(&user_id) {
            errors.push(ValidationError::DuplicatePlayer);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        self.players.push(user_id);
        self.record_event(
            GameEventKind::PlayerJoined(PlayerJoined {
                game_id: self.id,
                user_id,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Validates and appends a question, assigning it the next position.
    ///
    /// # Errors
    ///
    /// Rejects questions once the game has started, and accumulates every
    /// violation found by question validation (text length, variant count
    /// bounds, variant labels and texts).
    pub fn add_question(
        &mut self,
        text: String,
        multiple_answers: bool,
        variants: &BTreeMap<String, String>,
        created_by: Uuid,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Outcome<Uuid> {
        let mut errors = Vec::new();
        if let Some(error) = self.require_created() {
            errors.push(error);
        }

        let created = Question::create(
            text,
            multiple_answers,
            variants,
            created_by,
            self.questions.len(),
            clock.now(),
        );

        let question = match created {
            Ok(question) if errors.is_empty() => question,
            Ok(_) => return Err(errors.into()),
            Err(question_errors) => {
                errors.extend(question_errors);
                return Err(errors.into());
            }
        };

        let question_id = question.id();
        let sequence = question.sequence();
        self.questions.push(question);
        self.record_event(
            GameEventKind::QuestionAdded(QuestionAdded {
                game_id: self.id,
                question_id,
                sequence,
            }),
            correlation_id,
            clock,
        );
        Ok(question_id)
    }

    /// Starts the game and points it at the first question.
    ///
    /// # Errors
    ///
    /// Accumulates `NotEnoughPlayers` and `NotEnoughQuestions` (both are
    /// reported when both apply), and rejects repeated starts.
    pub fn start_game(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Outcome<()> {
        let mut errors = Vec::new();
        if let Some(error) = self.require_created() {
            errors.push(error);
        }
        if self.players.len() < MIN_PLAYERS {
            errors.push(ValidationError::NotEnoughPlayers);
        }
        if self.questions.len() < MIN_QUESTIONS {
            errors.push(ValidationError::NotEnoughQuestions);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let first_question_id = self
            .questions
            .iter()
            .min_by_key(|q| q.sequence())
            .map(Question::id)
            .expect("a starting game has at least two questions");

        self.status = GameStatus::Started;
        self.current_question_id = Some(first_question_id);
        self.record_event(
            GameEventKind::GameStarted(GameStarted {
                game_id: self.id,
                first_question_id,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Records a player's own choice on the current question.
    ///
    /// Recording a choice never advances the question pointer; only
    /// guesses complete a question.
    ///
    /// # Errors
    ///
    /// Rejects calls outside a running game and from users not on the
    /// roster, plus everything question-level validation rejects
    /// (duplicate choice, empty or unknown selections).
    pub fn record_choice(
        &mut self,
        user_id: Uuid,
        selected_variant_ids: &[Uuid],
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Outcome<()> {
        let mut errors = Vec::new();
        if let Some(error) = self.require_started() {
            errors.push(error);
        }
        if !self.players.contains(&user_id) {
            errors.push(ValidationError::NotAPlayer(user_id));
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let question_id = self.current_question();
        self.question_mut(question_id)
            .record_choice(user_id, selected_variant_ids)?;

        self.record_event(
            GameEventKind::ChoiceRecorded(ChoiceRecorded {
                game_id: self.id,
                question_id,
                user_id,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Records one player's guess about another player's choice on the
    /// current question, then advances the session if the question is now
    /// fully answered.
    ///
    /// # Errors
    ///
    /// Rejects calls outside a running game, users not on the roster
    /// (either side of the guess), self-guesses, duplicate pairs, and
    /// empty or unknown selections.
    pub fn record_guess(
        &mut self,
        guessing_user_id: Uuid,
        choice_user_id: Uuid,
        selected_variant_ids: &[Uuid],
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Outcome<()> {
        let mut errors = Vec::new();
        if let Some(error) = self.require_started() {
            errors.push(error);
        }
        if !self.players.contains(&guessing_user_id) {
            errors.push(ValidationError::NotAPlayer(guessing_user_id));
        }
        if !self.players.contains(&choice_user_id) {
            errors.push(ValidationError::NotAPlayer(choice_user_id));
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let question_id = self.current_question();
        self.question_mut(question_id)
            .record_guess(guessing_user_id, choice_user_id, selected_variant_ids)?;

        self.record_event(
            GameEventKind::GuessRecorded(GuessRecorded {
                game_id: self.id,
                question_id,
                guessing_user_id,
                choice_user_id,
            }),
            correlation_id,
            clock,
        );

        self.advance_if_current_question_answered(correlation_id, clock);
        Ok(())
    }

    /// Scores a fully answered question.
    ///
    /// # Errors
    ///
    /// Returns `UnknownQuestion` for ids outside this game and
    /// `QuestionNotAnswered` until every choice and guess is in.
    pub fn question_results(&self, question_id: Uuid) -> Outcome<Vec<UserResult>> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id() == question_id)
            .ok_or_else(|| ValidationErrors::from(ValidationError::UnknownQuestion(question_id)))?;
        question.user_results(&self.players)
    }

    /// The sole transition trigger besides `start_game`: moves the pointer
    /// to the lowest-sequence unanswered question, or ends the game when
    /// none remain.
    fn advance_if_current_question_answered(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        let current_id = self.current_question();
        let player_count = self.players.len();
        if !self.question(current_id).answered(player_count) {
            return;
        }

        let next_id = self
            .questions
            .iter()
            .filter(|q| !q.answered(player_count))
            .min_by_key(|q| q.sequence())
            .map(Question::id);

        match next_id {
            Some(next_question_id) => {
                self.current_question_id = Some(next_question_id);
                self.record_event(
                    GameEventKind::QuestionAdvanced(QuestionAdvanced {
                        game_id: self.id,
                        previous_question_id: current_id,
                        next_question_id,
                    }),
                    correlation_id,
                    clock,
                );
            }
            None => {
                self.status = GameStatus::Ended;
                self.current_question_id = None;
                self.record_event(
                    GameEventKind::GameEnded(GameEnded { game_id: self.id }),
                    correlation_id,
                    clock,
                );
            }
        }
    }

    fn require_created(&self) -> Option<ValidationError> {
        match self.status {
            GameStatus::Created => None,
            GameStatus::Started => Some(ValidationError::GameAlreadyStarted),
            GameStatus::Ended => Some(ValidationError::GameAlreadyEnded),
        }
    }

    fn require_started(&self) -> Option<ValidationError> {
        match self.status {
            GameStatus::Started => None,
            GameStatus::Created => Some(ValidationError::GameNotStarted),
            GameStatus::Ended => Some(ValidationError::GameAlreadyEnded),
        }
    }

    fn current_question(&self) -> Uuid {
        self.current_question_id
            .expect("a started game always points at a question")
    }

    fn question(&self, question_id: Uuid) -> &Question {
        self.questions
            .iter()
            .find(|q| q.id() == question_id)
            .expect("the current question id always identifies a question in this game")
    }

    fn question_mut(&mut self, question_id: Uuid) -> &mut Question {
        self.questions
            .iter_mut()
            .find(|q| q.id() == question_id)
            .expect("the current question id always identifies a question in this game")
    }

    fn record_event(&mut self, kind: GameEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = GameEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                correlation_id,
                causation_id: correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.uncommitted_events.push(event);
    }

    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }
}

impl AggregateRoot for GameSession {
    type Event = GameEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    #[allow(clippy::cast_possible_wrap)]
    fn commit_events(&mut self) -> Vec<Self::Event> {
        let events = std::mem::take(&mut self.uncommitted_events);
        self.version += events.len() as i64;
        events
    }
}
