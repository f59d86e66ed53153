//! Pipeline repository speaking to the PostgREST table API.

use crate::pipeline::{
    domain::{GuestDraft, GuestId, GuestPatch, GuestStatus, PodcastGuest},
    ports::{PipelineRepository, PipelineRepositoryError, PipelineRepositoryResult},
};
use crate::postgrest::{Order, PostgrestClient, Query};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The one guest table. The search surface routes through this same
/// constant, so a listing and a search can never disagree on the table.
const GUESTS_TABLE: &str = "podcast_guesting";

/// PostgREST-backed pipeline repository.
#[derive(Debug, Clone)]
pub struct PostgrestPipelineRepository {
    client: PostgrestClient,
}

impl PostgrestPipelineRepository {
    /// Creates a repository over a shared PostgREST client.
    #[must_use]
    pub const fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PipelineRepository for PostgrestPipelineRepository {
    async fn list_guests(
        &self,
        status: Option<GuestStatus>,
    ) -> PipelineRepositoryResult<Vec<PodcastGuest>> {
        let mut query = Query::new().select("*").order("updated_at", Order::Desc);
        if let Some(status) = status {
            query = query.eq("status", status.as_str());
        }
        self.client
            .select(GUESTS_TABLE, &query)
            .await
            .map_err(PipelineRepositoryError::persistence)
    }

    async fn create_guest(&self, draft: &GuestDraft) -> PipelineRepositoryResult<PodcastGuest> {
        let rows: Vec<PodcastGuest> = self
            .client
            .insert(GUESTS_TABLE, &draft.insert_payload())
            .await
            .map_err(PipelineRepositoryError::persistence)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| PipelineRepositoryError::persistence(EmptyRepresentation))
    }

    async fn update_guest(
        &self,
        id: GuestId,
        patch: &GuestPatch,
        updated_at: DateTime<Utc>,
    ) -> PipelineRepositoryResult<Option<PodcastGuest>> {
        let query = Query::new().eq("id", &id.to_string());
        let rows: Vec<PodcastGuest> = self
            .client
            .update(GUESTS_TABLE, &query, &patch.payload_with_timestamp(updated_at))
            .await
            .map_err(PipelineRepositoryError::persistence)?;
        Ok(rows.into_iter().next())
    }

    async fn delete_guest(&self, id: GuestId) -> PipelineRepositoryResult<()> {
        let query = Query::new().eq("id", &id.to_string());
        self.client
            .delete(GUESTS_TABLE, &query)
            .await
            .map_err(PipelineRepositoryError::persistence)
    }

    async fn search_guests(
        &self,
        term: &str,
        limit: u32,
    ) -> PipelineRepositoryResult<Vec<PodcastGuest>> {
        let query = Query::new()
            .select("*")
            .ilike_any(&["host_name", "podcast_name", "notes"], term)
            .limit(limit);
        self.client
            .select(GUESTS_TABLE, &query)
            .await
            .map_err(PipelineRepositoryError::persistence)
    }
}

/// A mutating request asked for `return=representation` but got no rows.
#[derive(Debug, Clone, thiserror::Error)]
#[error("guest mutation returned no representation")]
struct EmptyRepresentation;
