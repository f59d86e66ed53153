//! Board repository speaking to the PostgREST table API.

use super::models::{CommentSearchRow, TaskListRow};
use crate::board::{
    domain::{
        CommentDraft, CommentHit, Task, TaskComment, TaskDraft, TaskId, TaskPatch, TaskStatus,
    },
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::postgrest::{Order, PostgrestClient, Query};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

const TASKS_TABLE: &str = "tasks";
const COMMENTS_TABLE: &str = "task_comments";

/// PostgREST-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgrestBoardRepository {
    client: PostgrestClient,
}

impl PostgrestBoardRepository {
    /// Creates a repository over a shared PostgREST client.
    #[must_use]
    pub const fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BoardRepository for PostgrestBoardRepository {
    async fn list_tasks(&self, status: Option<TaskStatus>) -> BoardRepositoryResult<Vec<Task>> {
        let mut query = Query::new()
            .select("*,task_comments(id)")
            .order("updated_at", Order::Desc);
        if let Some(status) = status {
            query = query.eq("status", status.as_str());
        }

        let rows: Vec<TaskListRow> = self
            .client
            .select(TASKS_TABLE, &query)
            .await
            .map_err(BoardRepositoryError::persistence)?;
        Ok(rows.into_iter().map(TaskListRow::into_task).collect())
    }

    async fn create_task(&self, draft: &TaskDraft) -> BoardRepositoryResult<Task> {
        let rows: Vec<Task> = self
            .client
            .insert(TASKS_TABLE, &draft.insert_payload())
            .await
            .map_err(BoardRepositoryError::persistence)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BoardRepositoryError::persistence(EmptyRepresentation(TASKS_TABLE)))
    }

    async fn update_task(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> BoardRepositoryResult<Option<Task>> {
        let query = Query::new().eq("id", &id.to_string());
        let payload: Map<String, Value> = patch.payload_with_timestamp(updated_at);
        let rows: Vec<Task> = self
            .client
            .update(TASKS_TABLE, &query, &payload)
            .await
            .map_err(BoardRepositoryError::persistence)?;
        Ok(rows.into_iter().next())
    }

    async fn delete_task(&self, id: TaskId) -> BoardRepositoryResult<()> {
        let query = Query::new().eq("id", &id.to_string());
        self.client
            .delete(TASKS_TABLE, &query)
            .await
            .map_err(BoardRepositoryError::persistence)
    }

    async fn list_comments(&self, task_id: TaskId) -> BoardRepositoryResult<Vec<TaskComment>> {
        let query = Query::new()
            .eq("task_id", &task_id.to_string())
            .order("created_at", Order::Asc);
        self.client
            .select(COMMENTS_TABLE, &query)
            .await
            .map_err(BoardRepositoryError::persistence)
    }

    async fn create_comment(&self, draft: &CommentDraft) -> BoardRepositoryResult<TaskComment> {
        let mut payload = Map::new();
        payload.insert(
            "task_id".to_owned(),
            Value::from(draft.task_id().to_string()),
        );
        payload.insert("author".to_owned(), Value::from(draft.author()));
        payload.insert("body".to_owned(), Value::from(draft.body()));

        let rows: Vec<TaskComment> = self
            .client
            .insert(COMMENTS_TABLE, &payload)
            .await
            .map_err(BoardRepositoryError::persistence)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| BoardRepositoryError::persistence(EmptyRepresentation(COMMENTS_TABLE)))
    }

    async fn search_tasks(&self, term: &str, limit: u32) -> BoardRepositoryResult<Vec<Task>> {
        let query = Query::new()
            .select("*")
            .ilike_any(&["title", "description"], term)
            .limit(limit);
        self.client
            .select(TASKS_TABLE, &query)
            .await
            .map_err(BoardRepositoryError::persistence)
    }

    async fn search_comments(
        &self,
        term: &str,
        limit: u32,
    ) -> BoardRepositoryResult<Vec<CommentHit>> {
        let query = Query::new()
            .select("*,tasks(id,title)")
            .ilike("body", term)
            .limit(limit);
        let rows: Vec<CommentSearchRow> = self
            .client
            .select(COMMENTS_TABLE, &query)
            .await
            .map_err(BoardRepositoryError::persistence)?;
        Ok(rows.into_iter().map(CommentSearchRow::into_hit).collect())
    }
}

/// A mutating request asked for `return=representation` but got no rows.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0} mutation returned no representation")]
struct EmptyRepresentation(&'static str);
