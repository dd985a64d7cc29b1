//! Routes for the game session context.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use knowme_game::application::command_handlers::{self, GameCommandResult};
use knowme_game::application::query_handlers::{self, GameView};
use knowme_game::domain::commands;
use knowme_game::domain::question::UserResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// The session name.
    pub name: String,
    /// The founding user.
    pub created_by: Uuid,
}

/// Request body for POST /{game_id}/players.
#[derive(Debug, Deserialize)]
pub struct JoinGameRequest {
    /// The joining user.
    pub user_id: Uuid,
}

/// Request body for POST /{game_id}/questions.
#[derive(Debug, Deserialize)]
pub struct AddQuestionRequest {
    /// The question text.
    pub text: String,
    /// Whether several variants together form the right answer.
    pub multiple_answers: bool,
    /// Answer variants, label to text.
    pub variants: BTreeMap<String, String>,
    /// The authoring user.
    pub created_by: Uuid,
}

/// Request body for POST /{game_id}/choices.
#[derive(Debug, Deserialize)]
pub struct RecordChoiceRequest {
    /// The answering user.
    pub user_id: Uuid,
    /// The selected variant ids.
    pub selected_variant_ids: Vec<Uuid>,
}

/// Request body for POST /{game_id}/guesses.
#[derive(Debug, Deserialize)]
pub struct RecordGuessRequest {
    /// The guessing user.
    pub guessing_user_id: Uuid,
    /// The user whose choice is being guessed.
    pub choice_user_id: Uuid,
    /// The selected variant ids.
    pub selected_variant_ids: Vec<Uuid>,
}

/// Response body returned after a command is successfully handled.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// The game affected by the command.
    pub game_id: Uuid,
    /// IDs of the domain events produced by the command.
    pub event_ids: Vec<Uuid>,
}

/// Response body returned after a question is successfully added.
#[derive(Debug, Serialize)]
pub struct QuestionCommandResponse {
    /// The game the question was added to.
    pub game_id: Uuid,
    /// The new question.
    pub question_id: Uuid,
    /// IDs of the domain events produced by the command.
    pub event_ids: Vec<Uuid>,
}

// TODO: dispatch the committed events to the real-time notifier once the
// push gateway exists; until then clients poll the game view.
fn command_response(result: GameCommandResult) -> CommandResponse {
    CommandResponse {
        game_id: result.game_id,
        event_ids: result.events.iter().map(|e| e.metadata.event_id).collect(),
    }
}

/// POST /
#[instrument(skip(state, request), fields(created_by = %request.created_by))]
async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::CreateGame {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        created_by: request.created_by,
    };

    info!(correlation_id = %command.correlation_id, "handling create_game command");

    let result =
        command_handlers::handle_create_game(&command, state.clock.as_ref(), state.games.as_ref())
            .await?;

    Ok(Json(command_response(result)))
}

/// POST /{game_id}/players
#[instrument(skip(state, request))]
async fn join_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<JoinGameRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::JoinGame {
        correlation_id: Uuid::new_v4(),
        game_id,
        user_id: request.user_id,
    };

    info!(correlation_id = %command.correlation_id, "handling join_game command");

    let result =
        command_handlers::handle_join_game(&command, state.clock.as_ref(), state.games.as_ref())
            .await?;

    Ok(Json(command_response(result)))
}

/// POST /{game_id}/questions
#[instrument(skip(state, request))]
async fn add_question(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<AddQuestionRequest>,
) -> Result<Json<QuestionCommandResponse>, ApiError> {
    let command = commands::AddQuestion {
        correlation_id: Uuid::new_v4(),
        game_id,
        text: request.text,
        multiple_answers: request.multiple_answers,
        variants: request.variants,
        created_by: request.created_by,
    };

    info!(correlation_id = %command.correlation_id, "handling add_question command");

    let result = command_handlers::handle_add_question(
        &command,
        state.clock.as_ref(),
        state.games.as_ref(),
    )
    .await?;

    Ok(Json(QuestionCommandResponse {
        game_id: result.game_id,
        question_id: result.question_id,
        event_ids: result.events.iter().map(|e| e.metadata.event_id).collect(),
    }))
}

/// POST /{game_id}/start
#[instrument(skip(state))]
async fn start_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::StartGame {
        correlation_id: Uuid::new_v4(),
        game_id,
    };

    info!(correlation_id = %command.correlation_id, "handling start_game command");

    let result =
        command_handlers::handle_start_game(&command, state.clock.as_ref(), state.games.as_ref())
            .await?;

    Ok(Json(command_response(result)))
}

/// POST /{game_id}/choices
#[instrument(skip(state, request))]
async fn record_choice(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<RecordChoiceRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::RecordChoice {
        correlation_id: Uuid::new_v4(),
        game_id,
        user_id: request.user_id,
        selected_variant_ids: request.selected_variant_ids,
    };

    info!(correlation_id = %command.correlation_id, "handling record_choice command");

    let result = command_handlers::handle_record_choice(
        &command,
        state.clock.as_ref(),
        state.games.as_ref(),
    )
    .await?;

    Ok(Json(command_response(result)))
}

/// POST /{game_id}/guesses
#[instrument(skip(state, request))]
async fn record_guess(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<RecordGuessRequest>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::RecordGuess {
        correlation_id: Uuid::new_v4(),
        game_id,
        guessing_user_id: request.guessing_user_id,
        choice_user_id: request.choice_user_id,
        selected_variant_ids: request.selected_variant_ids,
    };

    info!(correlation_id = %command.correlation_id, "handling record_guess command");

    let result = command_handlers::handle_record_guess(
        &command,
        state.clock.as_ref(),
        state.games.as_ref(),
    )
    .await?;

    Ok(Json(command_response(result)))
}

/// GET /{game_id}
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    let view = query_handlers::get_game_by_id(game_id, state.games.as_ref()).await?;
    Ok(Json(view))
}

/// GET /{game_id}/questions/{question_id}/results
#[instrument(skip(state))]
async fn get_results(
    State(state): State<AppState>,
    Path((game_id, question_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<UserResult>>, ApiError> {
    let results =
        query_handlers::get_question_results(game_id, question_id, state.games.as_ref()).await?;
    Ok(Json(results))
}

/// Returns the router for the game session context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_game))
        .route("/{game_id}", get(get_game))
        .route("/{game_id}/players", post(join_game))
        .route("/{game_id}/questions", post(add_question))
        .route("/{game_id}/start", post(start_game))
        .route("/{game_id}/choices", post(record_choice))
        .route("/{game_id}/guesses", post(record_guess))
        .route("/{game_id}/questions/{question_id}/results", get(get_results))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use knowme_core::clock::Clock;
    use knowme_core::repository::AggregateRepository;
    use knowme_game::domain::session::GameSession;
    use knowme_store::InMemoryRepository;
    use knowme_test_support::FixedClock;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app_state() -> AppState {
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap()));
        let games: Arc<dyn AggregateRepository<GameSession>> =
            Arc::new(InMemoryRepository::new());
        AppState::new(clock, games)
    }

    async fn send_post(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_create_game_returns_200_with_event_ids() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({
            "name": "Friday night",
            "created_by": Uuid::new_v4(),
        });

        // Act
        let (status, json) = send_post(app, "/", &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        Uuid::parse_str(json["game_id"].as_str().unwrap()).unwrap();

        let event_ids = json["event_ids"].as_array().unwrap();
        assert_eq!(event_ids.len(), 1);
        for id in event_ids {
            Uuid::parse_str(id.as_str().unwrap()).unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_game_with_long_name_returns_400_with_details() {
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({
            "name": "x".repeat(101),
            "created_by": Uuid::new_v4(),
        });

        let (status, json) = send_post(app, "/", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
        assert_eq!(
            json["details"],
            serde_json::json!(["game name cannot be longer than 100 characters"])
        );
    }

    #[tokio::test]
    async fn test_join_unknown_game_returns_404() {
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "user_id": Uuid::new_v4() });

        let (status, json) = send_post(app, &format!("/{}/players", Uuid::new_v4()), &body).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "game_not_found");
    }

    #[tokio::test]
    async fn test_create_game_returns_422_for_missing_body() {
        // Arrange
        let app = router().with_state(test_app_state());

        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert — Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
