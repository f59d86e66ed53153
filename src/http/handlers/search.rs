//! Handler for the global search surface.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::http::{ApiError, AppState};

/// Body of a search request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    /// Free-text query; under two trimmed characters returns nothing.
    #[serde(default)]
    query: Option<String>,
}

/// `POST /api/search` — `{results}` concatenated across surfaces.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchBody>,
) -> Result<Json<Value>, ApiError> {
    let results = state
        .search
        .search(request.query.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!({ "results": results })))
}
