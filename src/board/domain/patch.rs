//! Task creation and update payloads.
//!
//! Updates are whitelist-filtered: keys outside [`TASK_UPDATE_COLUMNS`] are
//! dropped before the payload reaches the backend, so a client can never
//! mutate a column the board does not expose.

use super::{BoardDomainError, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Columns an update request may touch.
pub const TASK_UPDATE_COLUMNS: [&str; 10] = [
    "title",
    "description",
    "status",
    "priority",
    "assignee_name",
    "assignee_id",
    "due",
    "notes_path",
    "last_activity",
    "created_by",
];

/// Validated payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    assignee_name: Option<String>,
    due: Option<String>,
    notes_path: Option<String>,
}

impl TaskDraft {
    /// Creates a draft with the required title, trimmed. Status defaults to
    /// backlog and priority to medium.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title trims to
    /// nothing.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        Ok(Self {
            title,
            description: None,
            status: TaskStatus::Backlog,
            priority: TaskPriority::Medium,
            assignee_name: None,
            due: None,
            notes_path: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee display name.
    #[must_use]
    pub fn with_assignee_name(mut self, assignee_name: impl Into<String>) -> Self {
        self.assignee_name = Some(assignee_name.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Sets the attached notes file path.
    #[must_use]
    pub fn with_notes_path(mut self, notes_path: impl Into<String>) -> Self {
        self.notes_path = Some(notes_path.into());
        self
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assignee display name, if set.
    #[must_use]
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee_name.as_deref()
    }

    /// Returns the due date, if set.
    #[must_use]
    pub fn due(&self) -> Option<&str> {
        self.due.as_deref()
    }

    /// Returns the notes file path, if set.
    #[must_use]
    pub fn notes_path(&self) -> Option<&str> {
        self.notes_path.as_deref()
    }

    /// Builds the insert body sent to the backend. Optional columns are
    /// omitted entirely when unset so backend defaults apply.
    #[must_use]
    pub fn insert_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("title".to_owned(), Value::from(self.title.clone()));
        payload.insert("status".to_owned(), Value::from(self.status.as_str()));
        payload.insert("priority".to_owned(), Value::from(self.priority.as_str()));
        insert_optional(&mut payload, "description", self.description.as_deref());
        insert_optional(&mut payload, "assignee_name", self.assignee_name.as_deref());
        insert_optional(&mut payload, "due", self.due.as_deref());
        insert_optional(&mut payload, "notes_path", self.notes_path.as_deref());
        payload
    }
}

fn insert_optional(payload: &mut Map<String, Value>, column: &str, value: Option<&str>) {
    if let Some(value) = value {
        payload.insert(column.to_owned(), Value::from(value));
    }
}

/// Whitelist-filtered update payload.
///
/// Built from arbitrary request JSON; only keys in [`TASK_UPDATE_COLUMNS`]
/// survive. Values are forwarded as-is (including explicit nulls, which
/// clear nullable columns).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    fields: BTreeMap<String, Value>,
}

impl TaskPatch {
    /// Builds a patch from a request body, keeping only updatable columns.
    #[must_use]
    pub fn from_json(body: &Map<String, Value>) -> Self {
        let fields = body
            .iter()
            .filter(|(key, _)| TASK_UPDATE_COLUMNS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self { fields }
    }

    /// Returns the surviving column/value pairs.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Returns true when no updatable column survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds the PATCH body: surviving fields plus the server-stamped
    /// `updated_at`.
    #[must_use]
    pub fn payload_with_timestamp(&self, updated_at: DateTime<Utc>) -> Map<String, Value> {
        let mut payload: Map<String, Value> = self
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        payload.insert(
            "updated_at".to_owned(),
            Value::from(updated_at.to_rfc3339()),
        );
        payload
    }
}
