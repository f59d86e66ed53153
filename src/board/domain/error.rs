//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task identifier is missing from an update or delete request.
    #[error("task id is required")]
    MissingTaskId,

    /// The task identifier is not a valid UUID.
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),

    /// The status value is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The priority value is unknown.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),

    /// The comment body is empty after trimming.
    #[error("comment body must not be empty")]
    EmptyCommentBody,

    /// The comment author is empty after trimming.
    #[error("comment author is required")]
    EmptyCommentAuthor,
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
