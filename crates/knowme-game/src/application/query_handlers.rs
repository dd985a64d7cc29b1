//! Query handlers for the game session context.
//!
//! Read-only view DTOs over the aggregate. Views never expose who picked
//! what — recorded choices and guesses surface only as counts until the
//! question is scored.

use knowme_core::aggregate::AggregateRoot;
use knowme_core::repository::AggregateRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::question::{Question, UserResult};
use crate::domain::session::{GameSession, GameStatus};

use super::error::GameError;

/// Read-only view of one answer variant.
#[derive(Debug, Serialize)]
pub struct VariantView {
    /// The variant identifier.
    pub variant_id: Uuid,
    /// The single-character label.
    pub label: char,
    /// The answer text.
    pub text: String,
}

/// Read-only view of one question.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    /// The question identifier.
    pub question_id: Uuid,
    /// The question's position in the session.
    pub sequence: usize,
    /// The question text.
    pub text: String,
    /// Whether several variants together form the right answer.
    pub multiple_answers: bool,
    /// The answer variants.
    pub variants: Vec<VariantView>,
    /// How many players have recorded their choice.
    pub choices_recorded: usize,
    /// How many guesses have been recorded.
    pub guesses_recorded: usize,
    /// Whether the question is fully answered.
    pub answered: bool,
}

/// Read-only view of a game session aggregate.
#[derive(Debug, Serialize)]
pub struct GameView {
    /// The game identifier.
    pub game_id: Uuid,
    /// The session name.
    pub name: String,
    /// The lifecycle status.
    pub status: GameStatus,
    /// The founding user.
    pub created_by: Uuid,
    /// The roster in join order.
    pub players: Vec<Uuid>,
    /// The question the game currently points at, if any.
    pub current_question_id: Option<Uuid>,
    /// The questions in play order.
    pub questions: Vec<QuestionView>,
    /// Current version (committed-event count).
    pub version: i64,
}

fn question_view(question: &Question, player_count: usize) -> QuestionView {
    QuestionView {
        question_id: question.id(),
        sequence: question.sequence(),
        text: question.text().to_owned(),
        multiple_answers: question.multiple_answers(),
        variants: question
            .variants()
            .iter()
            .map(|v| VariantView {
                variant_id: v.id(),
                label: v.label(),
                text: v.text().to_owned(),
            })
            .collect(),
        choices_recorded: question.choice_count(),
        guesses_recorded: question.guess_count(),
        answered: question.answered(player_count),
    }
}

/// Retrieves a game session by id.
///
/// # Errors
///
/// Returns `GameError::Repository` when the game cannot be loaded.
pub async fn get_game_by_id(
    game_id: Uuid,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<GameView, GameError> {
    let game = repo.load(game_id).await?;
    let player_count = game.players().len();

    Ok(GameView {
        game_id: game.id(),
        name: game.name().to_owned(),
        status: game.status(),
        created_by: game.created_by(),
        players: game.players().to_vec(),
        current_question_id: game.current_question_id(),
        questions: game
            .questions()
            .iter()
            .map(|q| question_view(q, player_count))
            .collect(),
        version: game.version(),
    })
}

/// Retrieves the per-user scores for a fully answered question.
///
/// # Errors
///
/// Returns `GameError::Repository` when the game cannot be loaded and
/// `GameError::Rejected` for unknown or not-yet-answered questions.
pub async fn get_question_results(
    game_id: Uuid,
    question_id: Uuid,
    repo: &dyn AggregateRepository<GameSession>,
) -> Result<Vec<UserResult>, GameError> {
    let game = repo.load(game_id).await?;
    Ok(game.question_results(question_id)?)
}
