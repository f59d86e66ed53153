//! In-memory board repository for tests.
//!
//! Mimics the backend's responsibilities: it generates row identifiers and
//! creation timestamps, and applies update payloads the way PostgREST
//! would (field merge, unknown values rejected at decode time).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{
        CommentDraft, CommentHit, CommentId, Task, TaskComment, TaskDraft, TaskId, TaskPatch,
        TaskStatus,
    },
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Clone)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<InMemoryBoardState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    tasks: HashMap<TaskId, Task>,
    comments: HashMap<CommentId, TaskComment>,
}

impl Default for InMemoryBoardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBoardRepository {
    /// Creates an empty repository stamping rows with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository stamping rows with the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryBoardState::default())),
            clock,
        }
    }

    /// Seeds a task row directly, bypassing draft validation.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the state lock is poisoned.
    pub fn seed_task(&self, task: Task) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        state.tasks.insert(task.id, task);
        Ok(())
    }

    /// Seeds a comment row directly, bypassing draft validation.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the state lock is poisoned.
    pub fn seed_comment(&self, comment: TaskComment) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        state.comments.insert(comment.id, comment);
        Ok(())
    }
}

fn write_state(
    state: &Arc<RwLock<InMemoryBoardState>>,
) -> BoardRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryBoardState>> {
    state
        .write()
        .map_err(|err| BoardRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn read_state(
    state: &Arc<RwLock<InMemoryBoardState>>,
) -> BoardRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryBoardState>> {
    state
        .read()
        .map_err(|err| BoardRepositoryError::persistence(std::io::Error::other(err.to_string())))
}

fn comment_count(state: &InMemoryBoardState, task_id: TaskId) -> usize {
    state
        .comments
        .values()
        .filter(|comment| comment.task_id == task_id)
        .count()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn list_tasks(&self, status: Option<TaskStatus>) -> BoardRepositoryResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| status.is_none_or(|wanted| task.status == wanted))
            .cloned()
            .map(|mut task| {
                task.comment_count = Some(comment_count(&state, task.id));
                task
            })
            .collect();
        tasks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(tasks)
    }

    async fn create_task(&self, draft: &TaskDraft) -> BoardRepositoryResult<Task> {
        let now = self.clock.utc();
        let task = Task {
            id: TaskId::new(),
            title: draft.title().to_owned(),
            description: draft.description().map(str::to_owned),
            status: draft.status(),
            priority: draft.priority(),
            assignee_name: draft.assignee_name().map(str::to_owned),
            assignee_id: None,
            due: draft.due().map(str::to_owned),
            notes_path: draft.notes_path().map(str::to_owned),
            last_activity: None,
            created_at: now,
            updated_at: now,
            created_by: None,
            comment_count: None,
        };

        let mut state = write_state(&self.state)?;
        state.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update_task(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Option<Task>> {
        let mut state = write_state(&self.state)?;
        let Some(existing) = state.tasks.get(&id) else {
            return Ok(None);
        };

        let mut row =
            serde_json::to_value(existing).map_err(BoardRepositoryError::persistence)?;
        if let Value::Object(row_map) = &mut row {
            for (column, value) in patch.fields() {
                row_map.insert(column.clone(), value.clone());
            }
            row_map.insert(
                "updated_at".to_owned(),
                Value::from(updated_at.to_rfc3339()),
            );
        }
        let updated: Task =
            serde_json::from_value(row).map_err(BoardRepositoryError::persistence)?;
        state.tasks.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<()> {
        let mut state = write_state(&self.state)?;
        state.tasks.remove(&id);
        Ok(())
    }

    async fn list_comments(&self, task_id: TaskId) -> BoardRepositoryResult<Vec<TaskComment>> {
        let state = read_state(&self.state)?;
        let mut comments: Vec<TaskComment> = state
            .comments
            .values()
            .filter(|comment| comment.task_id == task_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn create_comment(&self, draft: &CommentDraft) -> BoardRepositoryResult<TaskComment> {
        let comment = TaskComment {
            id: CommentId::new(),
            task_id: draft.task_id(),
            author: draft.author().to_owned(),
            body: draft.body().to_owned(),
            created_at: self.clock.utc(),
        };

        let mut state = write_state(&self.state)?;
        state.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn search_tasks(&self, term: &str, limit: u32) -> BoardRepositoryResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| {
                contains_ci(&task.title, term)
                    || task
                        .description
                        .as_deref()
                        .is_some_and(|description| contains_ci(description, term))
            })
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        tasks.truncate(limit as usize);
        Ok(tasks)
    }

    async fn search_comments(
        &self,
        term: &str,
        limit: u32,
    ) -> BoardRepositoryResult<Vec<CommentHit>> {
        let state = read_state(&self.state)?;
        let mut hits: Vec<CommentHit> = state
            .comments
            .values()
            .filter(|comment| contains_ci(&comment.body, term))
            .map(|comment| CommentHit {
                comment: comment.clone(),
                task_title: state
                    .tasks
                    .get(&comment.task_id)
                    .map(|task| task.title.clone()),
            })
            .collect();
        hits.sort_by(|a, b| a.comment.created_at.cmp(&b.comment.created_at));
        hits.truncate(limit as usize);
        Ok(hits)
    }
}
