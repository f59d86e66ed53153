//! Service layer for podcast-guest pipeline operations.

use crate::pipeline::{
    domain::{
        GuestDraft, GuestId, GuestPatch, GuestStatus, PipelineDomainError, PodcastGuest,
    },
    ports::{PipelineRepository, PipelineRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a guest: the required names plus any of
/// the optional funnel columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateGuestRequest {
    /// Required host display name.
    #[serde(default)]
    pub host_name: String,
    /// Required podcast name.
    #[serde(default)]
    pub podcast_name: String,
    /// Optional initial status name; defaults to prospect.
    #[serde(default)]
    pub status: Option<String>,
    /// Remaining optional columns, whitelist-filtered downstream.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Request payload for updating a guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGuestRequest {
    /// Identifier of the guest to update.
    pub id: String,
    /// Raw update fields from the request body.
    pub fields: Map<String, Value>,
}

/// Service-level errors for pipeline operations.
#[derive(Debug, Error)]
pub enum PipelineServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PipelineDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PipelineRepositoryError),
}

/// Result type for pipeline service operations.
pub type PipelineServiceResult<T> = Result<T, PipelineServiceError>;

/// Pipeline orchestration service.
pub struct PipelineService<R, C>
where
    R: PipelineRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> PipelineService<R, C>
where
    R: PipelineRepository + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new pipeline service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists guests, optionally narrowed to one status, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineServiceError::Domain`] for an unknown status name
    /// and [`PipelineServiceError::Repository`] when the backend fails.
    pub async fn list_guests(
        &self,
        status: Option<&str>,
    ) -> PipelineServiceResult<Vec<PodcastGuest>> {
        let status = status
            .map(GuestStatus::try_from)
            .transpose()
            .map_err(PipelineDomainError::from)?;
        Ok(self.repository.list_guests(status).await?)
    }

    /// Creates a guest from a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineServiceError`] when validation fails or the
    /// backend rejects the insert.
    pub async fn create_guest(
        &self,
        request: CreateGuestRequest,
    ) -> PipelineServiceResult<PodcastGuest> {
        let mut draft = GuestDraft::new(request.host_name, request.podcast_name)?;
        if let Some(status) = request.status {
            draft = draft.with_status(
                GuestStatus::try_from(status.as_str()).map_err(PipelineDomainError::from)?,
            );
        }
        draft = draft.with_extra(GuestPatch::from_json(&request.fields));
        Ok(self.repository.create_guest(&draft).await?)
    }

    /// Applies a whitelist-filtered update and stamps `updated_at` from the
    /// service clock. Returns `None` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineServiceError::Domain`] for a missing or malformed
    /// identifier and [`PipelineServiceError::Repository`] when the backend
    /// fails.
    pub async fn update_guest(
        &self,
        request: UpdateGuestRequest,
    ) -> PipelineServiceResult<Option<PodcastGuest>> {
        let id = parse_guest_id(&request.id)?;
        let patch = GuestPatch::from_json(&request.fields);
        Ok(self
            .repository
            .update_guest(id, &patch, self.clock.utc())
            .await?)
    }

    /// Deletes a guest.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineServiceError::Domain`] for a missing or malformed
    /// identifier and [`PipelineServiceError::Repository`] when the backend
    /// fails.
    pub async fn delete_guest(&self, id: &str) -> PipelineServiceResult<()> {
        let id = parse_guest_id(id)?;
        Ok(self.repository.delete_guest(id).await?)
    }

    /// Pattern-matches guests for the search surface.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineServiceError::Repository`] when the backend fails.
    pub async fn search_guests(
        &self,
        term: &str,
        limit: u32,
    ) -> PipelineServiceResult<Vec<PodcastGuest>> {
        Ok(self.repository.search_guests(term, limit).await?)
    }
}

fn parse_guest_id(value: &str) -> Result<GuestId, PipelineDomainError> {
    if value.trim().is_empty() {
        return Err(PipelineDomainError::MissingGuestId);
    }
    GuestId::parse(value)
}
