//! Task comment row mirror and creation payload.

use super::{BoardDomainError, CommentId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment row as mirrored from the backend `task_comments` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    /// Row identifier.
    pub id: CommentId,
    /// Task the comment belongs to.
    pub task_id: TaskId,
    /// Comment author display name.
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its parent task title, as returned by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentHit {
    /// The matching comment.
    pub comment: TaskComment,
    /// Title of the parent task, when the join resolved.
    pub task_title: Option<String>,
}

/// Validated payload for creating a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    task_id: TaskId,
    author: String,
    body: String,
}

impl CommentDraft {
    /// Creates a validated comment draft. The body is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyCommentAuthor`] or
    /// [`BoardDomainError::EmptyCommentBody`] when either value trims to
    /// nothing.
    pub fn new(
        task_id: TaskId,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        let author = author.into().trim().to_owned();
        if author.is_empty() {
            return Err(BoardDomainError::EmptyCommentAuthor);
        }
        let body = body.into().trim().to_owned();
        if body.is_empty() {
            return Err(BoardDomainError::EmptyCommentBody);
        }
        Ok(Self {
            task_id,
            author,
            body,
        })
    }

    /// Returns the parent task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author display name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the trimmed comment body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
