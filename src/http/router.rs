//! Route table for the `/api/*` surface.

use super::handlers::{board, files, pipeline, revenue, search, workflow};
use super::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Builds the full API router over shared state.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/tasks/list", post(board::list_tasks))
        .route("/api/tasks/create", post(board::create_task))
        .route("/api/tasks/update", post(board::update_task))
        .route("/api/tasks/delete", post(board::delete_task))
        .route("/api/comments/list", post(board::list_comments))
        .route("/api/comments/create", post(board::create_comment))
        .route("/api/pipeline/list", post(pipeline::list_guests))
        .route("/api/pipeline/create", post(pipeline::create_guest))
        .route("/api/pipeline/update", post(pipeline::update_guest))
        .route("/api/pipeline/delete", post(pipeline::delete_guest))
        .route("/api/files/list", post(files::list_folder))
        .route("/api/files/read", post(files::read_file))
        .route("/api/files/write", post(files::write_file))
        .route("/api/files/create", post(files::create_folder))
        .route("/api/files/move", post(files::move_entry))
        .route("/api/files/link", post(files::temporary_link))
        .route("/api/revenue/stripe", post(revenue::summarize))
        .route("/api/search", post(search::search))
        .route("/api/workflow/list", get(workflow::list))
        .with_state(state)
}
