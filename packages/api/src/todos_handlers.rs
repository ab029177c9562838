// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: Every operation is scoped to the authenticated caller

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use tasklight_storage::Todo;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::AppState;

/// List the caller's todos, newest first
pub async fn list_todos(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.db.todo_storage.list_todos(&current_user.id).await?;
    Ok(Json(todos))
}

/// Request body for creating a todo
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub text: Option<String>,
}

/// Create a todo owned by the caller
pub async fn create_todo(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(request): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let text = match request.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(ApiError::Validation("Text is required".to_string())),
    };

    let todo = state
        .db
        .todo_storage
        .create_todo(&current_user.id, &text)
        .await?;

    info!("Created todo: {} for user: {}", todo.id, current_user.id);

    Ok(Json(todo))
}

/// Flip the completion flag on one of the caller's todos
pub async fn toggle_todo(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(todo_id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .db
        .todo_storage
        .toggle_todo(&current_user.id, &todo_id)
        .await?;

    Ok(Json(todo))
}

/// Delete one of the caller's todos
pub async fn delete_todo(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(todo_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .db
        .todo_storage
        .delete_todo(&current_user.id, &todo_id)
        .await?;

    info!("Deleted todo: {} for user: {}", todo_id, current_user.id);

    Ok(Json(json!({ "result": "Task deleted" })))
}
