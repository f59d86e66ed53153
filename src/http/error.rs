//! Wire-level error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::board::services::BoardServiceError;
use crate::files::services::FileServiceError;
use crate::files::{domain::FilesDomainError, ports::FileStoreError};
use crate::pipeline::services::PipelineServiceError;
use crate::revenue::{ports::BalanceFeedError, services::RevenueServiceError};
use crate::search::services::SearchServiceError;
use crate::workflow::services::WorkflowServiceError;

/// A failure ready to go on the wire as `{ "error": message }`.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 400 validation failure.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A 500 internal/upstream failure.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the wire message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::warn!(status = %self.status, error = %self.message, "request rejected");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl From<BoardServiceError> for ApiError {
    fn from(err: BoardServiceError) -> Self {
        match err {
            BoardServiceError::Domain(domain) => Self::bad_request(domain.to_string()),
            BoardServiceError::Repository(repo) => Self::internal(repo.to_string()),
        }
    }
}

impl From<PipelineServiceError> for ApiError {
    fn from(err: PipelineServiceError) -> Self {
        match err {
            PipelineServiceError::Domain(domain) => Self::bad_request(domain.to_string()),
            PipelineServiceError::Repository(repo) => Self::internal(repo.to_string()),
        }
    }
}

impl From<FileServiceError> for ApiError {
    fn from(err: FileServiceError) -> Self {
        match err {
            FileServiceError::MissingPath => Self::bad_request("Path is required"),
            FileServiceError::Domain(FilesDomainError::PathOutsideRoot { .. }) => {
                Self::new(StatusCode::FORBIDDEN, "Access denied")
            }
            // The backend's own status carries through, as the original
            // routes proxied it.
            FileServiceError::Store(FileStoreError::Upstream { status, summary }) => {
                Self::new(upstream_status(status), summary)
            }
            FileServiceError::Store(store) => Self::internal(store.to_string()),
        }
    }
}

impl From<RevenueServiceError> for ApiError {
    fn from(err: RevenueServiceError) -> Self {
        match err {
            RevenueServiceError::UnknownAccount(parse) => Self::bad_request(parse.to_string()),
            RevenueServiceError::Feed(BalanceFeedError::UnconfiguredAccount(account)) => {
                Self::internal(format!("Missing API key for account: {account}"))
            }
            RevenueServiceError::Feed(feed) => Self::internal(feed.to_string()),
        }
    }
}

impl From<SearchServiceError> for ApiError {
    fn from(err: SearchServiceError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<WorkflowServiceError> for ApiError {
    fn from(err: WorkflowServiceError) -> Self {
        Self::internal(err.to_string())
    }
}
