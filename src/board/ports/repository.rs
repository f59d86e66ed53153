//! Repository port for task and comment persistence.

use crate::board::domain::{
    CommentDraft, CommentHit, Task, TaskComment, TaskDraft, TaskId, TaskPatch, TaskStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Task and comment persistence contract.
///
/// Implementations delegate uniqueness, foreign keys, and default
/// generation (ids, creation timestamps) to the backing store.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Lists tasks ordered by `updated_at` descending, newest first, with
    /// the comment count attached. An optional status narrows the listing.
    async fn list_tasks(&self, status: Option<TaskStatus>) -> BoardRepositoryResult<Vec<Task>>;

    /// Stores a new task and returns the created row.
    async fn create_task(&self, draft: &TaskDraft) -> BoardRepositoryResult<Task>;

    /// Applies a whitelisted patch to the task, stamping `updated_at`.
    ///
    /// Returns `None` when no row matched the identifier.
    async fn update_task(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Option<Task>>;

    /// Deletes the task. Deleting a missing task is not an error.
    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<()>;

    /// Lists comments for a task ordered by `created_at` ascending.
    async fn list_comments(&self, task_id: TaskId) -> BoardRepositoryResult<Vec<TaskComment>>;

    /// Stores a new comment and returns the created row.
    async fn create_comment(&self, draft: &CommentDraft) -> BoardRepositoryResult<TaskComment>;

    /// Pattern-matches tasks whose title or description contains `term`,
    /// case-insensitively, up to `limit` rows.
    async fn search_tasks(&self, term: &str, limit: u32) -> BoardRepositoryResult<Vec<Task>>;

    /// Pattern-matches comments whose body contains `term`,
    /// case-insensitively, joined with the parent task title.
    async fn search_comments(&self, term: &str, limit: u32)
    -> BoardRepositoryResult<Vec<CommentHit>>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// Backend-layer failure.
    #[error("board persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a backend error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
