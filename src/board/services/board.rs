//! Service layer for kanban task and comment operations.

use crate::board::{
    domain::{
        BoardDomainError, CommentDraft, CommentHit, Task, TaskComment, TaskDraft, TaskId,
        TaskPatch, TaskPriority, TaskStatus,
    },
    ports::{BoardRepository, BoardRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// Required task title.
    #[serde(default)]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional initial status name; defaults to backlog.
    #[serde(default)]
    pub status: Option<String>,
    /// Optional priority name; defaults to medium.
    #[serde(default)]
    pub priority: Option<String>,
    /// Optional assignee display name.
    #[serde(default)]
    pub assignee_name: Option<String>,
    /// Optional due date.
    #[serde(default)]
    pub due: Option<String>,
    /// Optional notes file path.
    #[serde(default)]
    pub notes_path: Option<String>,
}

/// Request payload for updating a task: the identifier plus arbitrary
/// column/value pairs, whitelist-filtered before they reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    /// Identifier of the task to update.
    pub id: String,
    /// Raw update fields from the request body.
    pub fields: Map<String, Value>,
}

/// Request payload for creating a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequest {
    /// Parent task identifier.
    #[serde(default)]
    pub task_id: String,
    /// Comment author display name.
    #[serde(default)]
    pub author: String,
    /// Comment text.
    #[serde(default)]
    pub body: String,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Kanban board orchestration service.
pub struct BoardService<R, C>
where
    R: BoardRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> BoardService<R, C>
where
    R: BoardRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists tasks, optionally narrowed to one status, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an unknown status name and
    /// [`BoardServiceError::Repository`] when the backend fails.
    pub async fn list_tasks(&self, status: Option<&str>) -> BoardServiceResult<Vec<Task>> {
        let status = status
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(BoardDomainError::from)?;
        Ok(self.repository.list_tasks(status).await?)
    }

    /// Creates a task from a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when validation fails or the backend
    /// rejects the insert.
    pub async fn create_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let mut draft = TaskDraft::new(request.title)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(status) = request.status {
            draft = draft.with_status(
                TaskStatus::try_from(status.as_str()).map_err(BoardDomainError::from)?,
            );
        }
        if let Some(priority) = request.priority {
            draft = draft.with_priority(
                TaskPriority::try_from(priority.as_str()).map_err(BoardDomainError::from)?,
            );
        }
        if let Some(assignee_name) = request.assignee_name {
            draft = draft.with_assignee_name(assignee_name);
        }
        if let Some(due) = request.due {
            draft = draft.with_due(due);
        }
        if let Some(notes_path) = request.notes_path {
            draft = draft.with_notes_path(notes_path);
        }

        Ok(self.repository.create_task(&draft).await?)
    }

    /// Applies a whitelist-filtered update and stamps `updated_at` from the
    /// service clock. Returns `None` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a missing or malformed
    /// identifier and [`BoardServiceError::Repository`] when the backend
    /// fails.
    pub async fn update_task(
        &self,
        request: UpdateTaskRequest,
    ) -> BoardServiceResult<Option<Task>> {
        let id = parse_task_id(&request.id)?;
        let patch = TaskPatch::from_json(&request.fields);
        Ok(self
            .repository
            .update_task(id, &patch, self.clock.utc())
            .await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a missing or malformed
    /// identifier and [`BoardServiceError::Repository`] when the backend
    /// fails.
    pub async fn delete_task(&self, id: &str) -> BoardServiceResult<()> {
        let id = parse_task_id(id)?;
        Ok(self.repository.delete_task(id).await?)
    }

    /// Lists comments for a task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a malformed task
    /// identifier and [`BoardServiceError::Repository`] when the backend
    /// fails.
    pub async fn list_comments(&self, task_id: &str) -> BoardServiceResult<Vec<TaskComment>> {
        let task_id = parse_task_id(task_id)?;
        Ok(self.repository.list_comments(task_id).await?)
    }

    /// Creates a comment from a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when validation fails or the backend
    /// rejects the insert.
    pub async fn create_comment(
        &self,
        request: CreateCommentRequest,
    ) -> BoardServiceResult<TaskComment> {
        let task_id = parse_task_id(&request.task_id)?;
        let draft = CommentDraft::new(task_id, request.author, request.body)?;
        Ok(self.repository.create_comment(&draft).await?)
    }

    /// Pattern-matches tasks for the search surface.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the backend fails.
    pub async fn search_tasks(&self, term: &str, limit: u32) -> BoardServiceResult<Vec<Task>> {
        Ok(self.repository.search_tasks(term, limit).await?)
    }

    /// Pattern-matches comments for the search surface.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the backend fails.
    pub async fn search_comments(
        &self,
        term: &str,
        limit: u32,
    ) -> BoardServiceResult<Vec<CommentHit>> {
        Ok(self.repository.search_comments(term, limit).await?)
    }
}

fn parse_task_id(value: &str) -> Result<TaskId, BoardDomainError> {
    if value.trim().is_empty() {
        return Err(BoardDomainError::MissingTaskId);
    }
    TaskId::parse(value)
}
