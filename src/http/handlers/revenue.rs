//! Handler for the revenue dashboard surface.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::http::{ApiError, AppState};

/// Body of a revenue summary request.
#[derive(Debug, Default, Deserialize)]
pub struct RevenueBody {
    /// Dashboard account name.
    #[serde(default)]
    account: Option<String>,
}

/// `POST /api/revenue/stripe` — `{today, mtd, ytd}` in major units.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RevenueBody>,
) -> Result<Json<Value>, ApiError> {
    let summary = state
        .revenue
        .summarize(request.account.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(json!(summary)))
}
