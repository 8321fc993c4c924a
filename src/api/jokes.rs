//! Joke API handlers
//!
//! Contains HTTP request handlers for joke retrieval and CRUD operations.

use crate::dispatch::JokeKind;
use crate::error::AppError;
use crate::jokes::{JokeUpdate, NewJoke};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Query parameters for joke retrieval
#[derive(Deserialize)]
pub struct JokeParams {
    /// Which source to serve the joke from ("Chuck", "Dad" or "Own")
    pub kind: Option<String>,
}

/// Served joke response
#[derive(Debug, Serialize)]
pub struct JokeResponse {
    /// The joke text
    pub joke: String,
}

/// Response for a created joke
#[derive(Debug, Serialize)]
pub struct CreateJokeResponse {
    /// ID assigned to the new joke
    pub id: String,
}

/// Message response
#[derive(Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok", "error")
    pub status: String,
}

/// GET /joke?kind=<k> - Serve one joke from the requested source
pub async fn get_joke(
    State(state): State<Arc<AppState>>,
    Query(params): Query<JokeParams>,
) -> Result<Json<JokeResponse>, AppError> {
    let kind: JokeKind = params.kind.ok_or(AppError::MissingKind)?.parse()?;

    let joke = state.dispatcher.dispatch(kind, &state.db).await?;

    info!(kind = ?kind, "Served joke");
    Ok(Json(JokeResponse { joke }))
}

/// POST /joke - Store a new joke
pub async fn create_joke(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<NewJoke>,
) -> Result<(StatusCode, Json<CreateJokeResponse>), AppError> {
    let joke = state.db.create(submission).await?;

    info!(joke_id = %joke.id, "Stored new joke");
    Ok((StatusCode::CREATED, Json(CreateJokeResponse { id: joke.id })))
}

/// PUT /joke/:id - Partially update a stored joke
pub async fn update_joke(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<JokeUpdate>,
) -> Result<Json<MessageResponse>, AppError> {
    state.db.update(&id, patch).await?;

    info!(joke_id = %id, "Updated joke");
    Ok(Json(MessageResponse {
        message: "Joke updated successfully".to_string(),
        status: "ok".to_string(),
    }))
}

/// DELETE /joke/:id - Delete a stored joke
pub async fn delete_joke(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.db.delete_by_id(&id).await?;

    info!(joke_id = %id, "Deleted joke");
    Ok(Json(MessageResponse {
        message: "Joke deleted successfully".to_string(),
        status: "ok".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::dispatch::JokeDispatcher;
    use crate::jokes::JokeDb;
    use tempfile::TempDir;

    async fn create_test_state() -> (TempDir, Arc<AppState>) {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("jokes.db");
        let db = JokeDb::new(path.to_str().expect("utf-8 path"))
            .await
            .expect("db init");
        let providers = ProviderConfig {
            chuck_base_url: "http://127.0.0.1:1".to_string(),
            dad_base_url: "http://127.0.0.1:1".to_string(),
        };
        let state = AppState::from_parts(db, JokeDispatcher::new(&providers));
        (dir, state)
    }

    fn submission(text: &str, score: i64, category: &str) -> NewJoke {
        NewJoke {
            text: Some(text.to_string()),
            author: None,
            score: Some(score),
            category: Some(category.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_joke_returns_201_with_id() {
        let (_dir, state) = create_test_state().await;

        let result = create_joke(
            State(state),
            Json(submission("t", 7, "Dad joke")),
        )
        .await;

        let (status, response) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert!(!response.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_joke_invalid_category_rejected() {
        let (_dir, state) = create_test_state().await;

        let result = create_joke(
            State(state),
            Json(submission(
                "Why did the chicken cross the road?",
                5,
                "Chistoso",
            )),
        )
        .await;

        match result {
            Err(AppError::Validation(_)) => {}
            Err(other) => panic!("Expected Validation error, got: {:?}", other),
            Ok(_) => panic!("Expected Validation error, got a created joke"),
        }
    }

    #[tokio::test]
    async fn test_get_joke_missing_kind() {
        let (_dir, state) = create_test_state().await;

        let result = get_joke(State(state), Query(JokeParams { kind: None })).await;
        assert!(matches!(result, Err(AppError::MissingKind)));
    }

    #[tokio::test]
    async fn test_get_joke_unknown_kind() {
        let (_dir, state) = create_test_state().await;

        let result = get_joke(
            State(state),
            Query(JokeParams {
                kind: Some("Banana".to_string()),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::UnknownKind(_))));
    }

    #[tokio::test]
    async fn test_get_own_joke_empty_store() {
        let (_dir, state) = create_test_state().await;

        let result = get_joke(
            State(state),
            Query(JokeParams {
                kind: Some("Own".to_string()),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::NoJokesStored)));
    }

    #[tokio::test]
    async fn test_get_own_joke_after_create() {
        let (_dir, state) = create_test_state().await;

        create_joke(State(state.clone()), Json(submission("t", 7, "Dad joke")))
            .await
            .unwrap();

        let response = get_joke(
            State(state),
            Query(JokeParams {
                kind: Some("Own".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.joke, "t");
    }

    #[tokio::test]
    async fn test_update_joke_not_found() {
        let (_dir, state) = create_test_state().await;

        let result = update_joke(
            State(state),
            Path("nonexistent".to_string()),
            Json(JokeUpdate::default()),
        )
        .await;
        assert!(matches!(result, Err(AppError::JokeNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_joke_with_no_fields_succeeds() {
        let (_dir, state) = create_test_state().await;

        let (_, created) = create_joke(State(state.clone()), Json(submission("t", 7, "Dad joke")))
            .await
            .unwrap();

        let response = update_joke(
            State(state),
            Path(created.id.clone()),
            Json(JokeUpdate::default()),
        )
        .await
        .unwrap();
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_delete_joke_not_found() {
        let (_dir, state) = create_test_state().await;

        let result = delete_joke(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(AppError::JokeNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_joke_then_store_is_empty() {
        let (_dir, state) = create_test_state().await;

        let (_, created) = create_joke(State(state.clone()), Json(submission("t", 7, "Dad joke")))
            .await
            .unwrap();

        delete_joke(State(state.clone()), Path(created.id.clone())).await.unwrap();

        let jokes = state.db.list_all().await.unwrap();
        assert!(jokes.is_empty());
    }
}
