//! Search result rows.

use serde::Serialize;

/// Which surface a search hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchHitKind {
    /// A kanban task.
    Task,
    /// A task comment.
    Comment,
    /// A pipeline guest.
    Pipeline,
}

/// One search result with its highlighted snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Row identifier of the matching record.
    pub id: String,
    /// Which surface the hit came from.
    #[serde(rename = "type")]
    pub kind: SearchHitKind,
    /// Display title.
    pub title: String,
    /// Highlighted snippet around the match.
    pub snippet: String,
    /// Which column matched.
    pub match_field: &'static str,
    /// Parent record identifier (the task, for comment hits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Parent record title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_title: Option<String>,
}
