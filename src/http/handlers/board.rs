//! Handlers for the kanban board surface.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;

use crate::board::services::{CreateCommentRequest, CreateTaskRequest, UpdateTaskRequest};
use crate::http::{ApiError, AppState};

/// Body of a task listing request.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksBody {
    /// Optional status to narrow the listing.
    #[serde(default)]
    status: Option<String>,
}

/// `POST /api/tasks/list` — `{tasks}` ordered newest first.
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    body: Option<Json<ListTasksBody>>,
) -> Result<Json<Value>, ApiError> {
    let request = body.map(|Json(parsed)| parsed).unwrap_or_default();
    let tasks = state.board.list_tasks(request.status.as_deref()).await?;
    Ok(Json(json!({ "tasks": tasks })))
}

/// `POST /api/tasks/create` — `{task}` for the created row.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<Value>, ApiError> {
    let task = state.board.create_task(request).await?;
    Ok(Json(json!({ "task": task })))
}

/// `POST /api/tasks/update` — `{task}` for the updated row, null when no
/// row matched.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Json(mut body): Json<Map<String, Value>>,
) -> Result<Json<Value>, ApiError> {
    let id = take_id(&mut body, "id");
    let task = state
        .board
        .update_task(UpdateTaskRequest { id, fields: body })
        .await?;
    Ok(Json(json!({ "task": task })))
}

/// Body of a task deletion request.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteTaskBody {
    /// Identifier of the task to delete.
    #[serde(default)]
    id: Option<String>,
}

/// `POST /api/tasks/delete` — `{success: true}`.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DeleteTaskBody>,
) -> Result<Json<Value>, ApiError> {
    state
        .board
        .delete_task(request.id.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// Body of a comment listing request.
#[derive(Debug, Default, Deserialize)]
pub struct ListCommentsBody {
    /// Parent task identifier.
    #[serde(default)]
    task_id: Option<String>,
}

/// `POST /api/comments/list` — `{comments}` oldest first.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ListCommentsBody>,
) -> Result<Json<Value>, ApiError> {
    let comments = state
        .board
        .list_comments(request.task_id.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "comments": comments })))
}

/// `POST /api/comments/create` — `{comment}` for the created row.
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<Value>, ApiError> {
    let comment = state.board.create_comment(request).await?;
    Ok(Json(json!({ "comment": comment })))
}

/// Pulls a string identifier out of a free-form body, leaving the other
/// keys for whitelist filtering.
pub fn take_id(body: &mut Map<String, Value>, key: &str) -> String {
    match body.remove(key) {
        Some(Value::String(id)) => id,
        _ => String::new(),
    }
}
