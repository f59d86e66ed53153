//! Handler for the workflow subway-map surface.

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::http::{ApiError, AppState};
use crate::workflow::services::WorkflowMap;

/// `GET /api/workflow/list` — the full graph with derived lines and
/// routes.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<WorkflowMap>, ApiError> {
    let map = state.workflow.snapshot().await?;
    Ok(Json(map))
}
