//! Service layer aggregating search hits across surfaces.

use crate::board::{domain::CommentHit, ports::{BoardRepository, BoardRepositoryError}};
use crate::pipeline::{
    domain::PodcastGuest,
    ports::{PipelineRepository, PipelineRepositoryError},
};
use crate::search::domain::{SearchHit, SearchHitKind, snippet};
use std::sync::Arc;
use thiserror::Error;

/// Per-surface row cap, matching the backend query limit.
pub const SEARCH_LIMIT: u32 = 20;

/// Queries shorter than this (trimmed) return no results at all.
const MIN_QUERY_CHARS: usize = 2;

/// Service-level errors for search operations.
#[derive(Debug, Error)]
pub enum SearchServiceError {
    /// The task/comment backend failed.
    #[error(transparent)]
    Board(#[from] BoardRepositoryError),
    /// The guest backend failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineRepositoryError),
}

/// Result type for search service operations.
pub type SearchServiceResult<T> = Result<T, SearchServiceError>;

/// Cross-surface search service.
pub struct SearchService<B, P>
where
    B: BoardRepository + ?Sized,
    P: PipelineRepository + ?Sized,
{
    board: Arc<B>,
    pipeline: Arc<P>,
}

impl<B, P> SearchService<B, P>
where
    B: BoardRepository + ?Sized,
    P: PipelineRepository + ?Sized,
{
    /// Creates a new search service.
    #[must_use]
    pub const fn new(board: Arc<B>, pipeline: Arc<P>) -> Self {
        Self { board, pipeline }
    }

    /// Searches tasks, comments, and guests, concatenated in that order.
    ///
    /// Queries shorter than two trimmed characters short-circuit to an
    /// empty result set without touching the backend.
    ///
    /// # Errors
    ///
    /// Returns [`SearchServiceError`] when any backend query fails.
    pub async fn search(&self, query: &str) -> SearchServiceResult<Vec<SearchHit>> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }
        let term = trimmed.to_lowercase();

        let mut hits = Vec::new();
        for task in self.board.search_tasks(&term, SEARCH_LIMIT).await? {
            hits.push(task_hit(&term, trimmed, &task));
        }
        for comment in self.board.search_comments(&term, SEARCH_LIMIT).await? {
            hits.push(comment_hit(trimmed, comment));
        }
        for guest in self.pipeline.search_guests(&term, SEARCH_LIMIT).await? {
            hits.push(guest_hit(&term, trimmed, &guest));
        }
        Ok(hits)
    }
}

fn task_hit(term: &str, query: &str, task: &crate::board::domain::Task) -> SearchHit {
    let title_match = task.title.to_lowercase().contains(term);
    let (match_field, snippet_text) = if title_match {
        ("title", snippet(&task.title, query))
    } else {
        (
            "description",
            snippet(task.description.as_deref().unwrap_or_default(), query),
        )
    };
    SearchHit {
        id: task.id.to_string(),
        kind: SearchHitKind::Task,
        title: task.title.clone(),
        snippet: snippet_text,
        match_field,
        parent_id: None,
        parent_title: None,
    }
}

fn comment_hit(query: &str, hit: CommentHit) -> SearchHit {
    let CommentHit {
        comment,
        task_title,
    } = hit;
    SearchHit {
        id: comment.id.to_string(),
        kind: SearchHitKind::Comment,
        title: format!("Comment by {}", comment.author),
        snippet: snippet(&comment.body, query),
        match_field: "body",
        parent_id: Some(comment.task_id.to_string()),
        parent_title: Some(task_title.unwrap_or_else(|| "Unknown task".to_owned())),
    }
}

fn guest_hit(term: &str, query: &str, guest: &PodcastGuest) -> SearchHit {
    let podcast_match = guest.podcast_name.to_lowercase().contains(term);
    let notes_match = guest
        .notes
        .as_deref()
        .is_some_and(|notes| notes.to_lowercase().contains(term));

    let (match_field, snippet_text) = if podcast_match {
        ("podcast_name", snippet(&guest.podcast_name, query))
    } else if notes_match {
        (
            "notes",
            snippet(guest.notes.as_deref().unwrap_or_default(), query),
        )
    } else {
        ("host_name", snippet(&guest.host_name, query))
    };

    SearchHit {
        id: guest.id.to_string(),
        kind: SearchHitKind::Pipeline,
        title: format!("{} - {}", guest.host_name, guest.podcast_name),
        snippet: snippet_text,
        match_field,
        parent_id: None,
        parent_title: None,
    }
}
