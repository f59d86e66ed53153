//! Repository port for guest persistence.

use crate::pipeline::domain::{GuestDraft, GuestId, GuestPatch, GuestStatus, PodcastGuest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for pipeline repository operations.
pub type PipelineRepositoryResult<T> = Result<T, PipelineRepositoryError>;

/// Guest persistence contract.
#[async_trait]
pub trait PipelineRepository: Send + Sync {
    /// Lists guests ordered by `updated_at` descending, newest first. An
    /// optional status narrows the listing.
    async fn list_guests(
        &self,
        status: Option<GuestStatus>,
    ) -> PipelineRepositoryResult<Vec<PodcastGuest>>;

    /// Stores a new guest and returns the created row.
    async fn create_guest(&self, draft: &GuestDraft) -> PipelineRepositoryResult<PodcastGuest>;

    /// Applies a whitelisted patch to the guest, stamping `updated_at`.
    ///
    /// Returns `None` when no row matched the identifier.
    async fn update_guest(
        &self,
        id: GuestId,
        patch: &GuestPatch,
        updated_at: DateTime<Utc>,
    ) -> PipelineRepositoryResult<Option<PodcastGuest>>;

    /// Deletes the guest. Deleting a missing guest is not an error.
    async fn delete_guest(&self, id: GuestId) -> PipelineRepositoryResult<()>;

    /// Pattern-matches guests whose host name, podcast name, or notes
    /// contain `term`, case-insensitively, up to `limit` rows.
    async fn search_guests(
        &self,
        term: &str,
        limit: u32,
    ) -> PipelineRepositoryResult<Vec<PodcastGuest>>;
}

/// Errors returned by pipeline repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PipelineRepositoryError {
    /// Backend-layer failure.
    #[error("pipeline persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PipelineRepositoryError {
    /// Wraps a backend error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
