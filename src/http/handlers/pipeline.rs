//! Handlers for the guest pipeline surface.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;

use super::board::take_id;
use crate::http::{ApiError, AppState};
use crate::pipeline::services::{CreateGuestRequest, UpdateGuestRequest};

/// Body of a guest listing request.
#[derive(Debug, Default, Deserialize)]
pub struct ListGuestsBody {
    /// Optional status to narrow the listing.
    #[serde(default)]
    status: Option<String>,
}

/// `POST /api/pipeline/list` — `{guests}` ordered newest first.
pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    body: Option<Json<ListGuestsBody>>,
) -> Result<Json<Value>, ApiError> {
    let request = body.map(|Json(parsed)| parsed).unwrap_or_default();
    let guests = state
        .pipeline
        .list_guests(request.status.as_deref())
        .await?;
    Ok(Json(json!({ "guests": guests })))
}

/// `POST /api/pipeline/create` — `{guest}` for the created row.
pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateGuestRequest>,
) -> Result<Json<Value>, ApiError> {
    let guest = state.pipeline.create_guest(request).await?;
    Ok(Json(json!({ "guest": guest })))
}

/// `POST /api/pipeline/update` — `{guest}` for the updated row, null when
/// no row matched.
pub async fn update_guest(
    State(state): State<Arc<AppState>>,
    Json(mut body): Json<Map<String, Value>>,
) -> Result<Json<Value>, ApiError> {
    let id = take_id(&mut body, "id");
    let guest = state
        .pipeline
        .update_guest(UpdateGuestRequest { id, fields: body })
        .await?;
    Ok(Json(json!({ "guest": guest })))
}

/// Body of a guest deletion request.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteGuestBody {
    /// Identifier of the guest to delete.
    #[serde(default)]
    id: Option<String>,
}

/// `POST /api/pipeline/delete` — `{success: true}`.
pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DeleteGuestBody>,
) -> Result<Json<Value>, ApiError> {
    state
        .pipeline
        .delete_guest(request.id.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "success": true })))
}
