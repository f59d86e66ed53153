//! Row shapes specific to the PostgREST board queries.

use crate::board::domain::{CommentHit, Task, TaskComment};
use serde::Deserialize;

/// Task row with embedded comment rows from `select=*,task_comments(id)`.
#[derive(Debug, Deserialize)]
pub struct TaskListRow {
    /// The task columns.
    #[serde(flatten)]
    pub task: Task,
    /// Embedded comment rows; only their count matters.
    #[serde(default)]
    pub task_comments: Vec<serde_json::Value>,
}

impl TaskListRow {
    /// Collapses the embedded rows into a comment count.
    #[must_use]
    pub fn into_task(self) -> Task {
        let mut task = self.task;
        task.comment_count = Some(self.task_comments.len());
        task
    }
}

/// Embedded parent task from `select=*,tasks(id,title)`; only the title
/// is consumed, the rest of the projection is ignored.
#[derive(Debug, Deserialize)]
pub struct EmbeddedTaskTitle {
    /// Parent task title.
    pub title: String,
}

/// Comment row with its embedded parent task.
#[derive(Debug, Deserialize)]
pub struct CommentSearchRow {
    /// The comment columns.
    #[serde(flatten)]
    pub comment: TaskComment,
    /// Embedded parent task, null when the foreign key is dangling.
    #[serde(default)]
    pub tasks: Option<EmbeddedTaskTitle>,
}

impl CommentSearchRow {
    /// Reshapes the row into a search hit.
    #[must_use]
    pub fn into_hit(self) -> CommentHit {
        CommentHit {
            comment: self.comment,
            task_title: self.tasks.map(|task| task.title),
        }
    }
}
