//! Handlers for the file manager surface.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::http::{ApiError, AppState};

/// Body carrying a single optional path.
#[derive(Debug, Default, Deserialize)]
pub struct PathBody {
    /// Client-relative path under the configured root.
    #[serde(default)]
    path: Option<String>,
}

/// Body of a file write request.
#[derive(Debug, Default, Deserialize)]
pub struct WriteBody {
    /// Client-relative path under the configured root.
    #[serde(default)]
    path: Option<String>,
    /// New file content; an absent field writes an empty file.
    #[serde(default)]
    content: Option<String>,
}

/// Body of a move request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveBody {
    /// Source path.
    #[serde(default)]
    from_path: Option<String>,
    /// Destination path.
    #[serde(default)]
    to_path: Option<String>,
}

/// `POST /api/files/list` — `{entries}` folders first.
pub async fn list_folder(
    State(state): State<Arc<AppState>>,
    body: Option<Json<PathBody>>,
) -> Result<Json<Value>, ApiError> {
    let request = body.map(|Json(parsed)| parsed).unwrap_or_default();
    let entries = state
        .files
        .list_folder(request.path.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "entries": entries })))
}

/// `POST /api/files/read` — `{content, metadata}`.
pub async fn read_file(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PathBody>,
) -> Result<Json<Value>, ApiError> {
    let read = state
        .files
        .read_file(request.path.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "content": read.content, "metadata": read.metadata })))
}

/// `POST /api/files/write` — `{success: true, metadata}`.
pub async fn write_file(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WriteBody>,
) -> Result<Json<Value>, ApiError> {
    let metadata = state
        .files
        .write_file(
            request.path.as_deref().unwrap_or_default(),
            request.content.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(json!({ "success": true, "metadata": metadata })))
}

/// `POST /api/files/create` — `{success: true, metadata}`.
pub async fn create_folder(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PathBody>,
) -> Result<Json<Value>, ApiError> {
    let metadata = state
        .files
        .create_folder(request.path.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "success": true, "metadata": metadata })))
}

/// `POST /api/files/move` — `{success: true, metadata}`.
pub async fn move_entry(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MoveBody>,
) -> Result<Json<Value>, ApiError> {
    let metadata = state
        .files
        .move_entry(
            request.from_path.as_deref().unwrap_or_default(),
            request.to_path.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(json!({ "success": true, "metadata": metadata })))
}

/// `POST /api/files/link` — `{link}` to a time-limited download URL.
pub async fn temporary_link(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PathBody>,
) -> Result<Json<Value>, ApiError> {
    let link = state
        .files
        .temporary_link(request.path.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "link": link })))
}
