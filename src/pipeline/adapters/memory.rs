//! In-memory pipeline repository for tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::pipeline::{
    domain::{GuestDraft, GuestId, GuestPatch, GuestStatus, PodcastGuest},
    ports::{PipelineRepository, PipelineRepositoryError, PipelineRepositoryResult},
};

/// Thread-safe in-memory pipeline repository.
#[derive(Clone)]
pub struct InMemoryPipelineRepository {
    state: Arc<RwLock<HashMap<GuestId, PodcastGuest>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for InMemoryPipelineRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPipelineRepository {
    /// Creates an empty repository stamping rows with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository stamping rows with the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    fn write(
        &self,
    ) -> PipelineRepositoryResult<std::sync::RwLockWriteGuard<'_, HashMap<GuestId, PodcastGuest>>>
    {
        self.state.write().map_err(|err| {
            PipelineRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn read(
        &self,
    ) -> PipelineRepositoryResult<std::sync::RwLockReadGuard<'_, HashMap<GuestId, PodcastGuest>>>
    {
        self.state.read().map_err(|err| {
            PipelineRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn apply_patch(
    guest: &PodcastGuest,
    patch: &GuestPatch,
    updated_at: DateTime<Utc>,
) -> PipelineRepositoryResult<PodcastGuest> {
    let mut row = serde_json::to_value(guest).map_err(PipelineRepositoryError::persistence)?;
    if let Value::Object(row_map) = &mut row {
        for (column, value) in patch.fields() {
            row_map.insert(column.clone(), value.clone());
        }
        row_map.insert(
            "updated_at".to_owned(),
            Value::from(updated_at.to_rfc3339()),
        );
    }
    serde_json::from_value(row).map_err(PipelineRepositoryError::persistence)
}

#[async_trait]
impl PipelineRepository for InMemoryPipelineRepository {
    async fn list_guests(
        &self,
        status: Option<GuestStatus>,
    ) -> PipelineRepositoryResult<Vec<PodcastGuest>> {
        let state = self.read()?;
        let mut guests: Vec<PodcastGuest> = state
            .values()
            .filter(|guest| status.is_none_or(|wanted| guest.status == wanted))
            .cloned()
            .collect();
        guests.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(guests)
    }

    async fn create_guest(&self, draft: &GuestDraft) -> PipelineRepositoryResult<PodcastGuest> {
        let now = self.clock.utc();
        let base = PodcastGuest {
            id: GuestId::new(),
            host_name: draft.host_name().to_owned(),
            podcast_name: draft.podcast_name().to_owned(),
            podcast_url: None,
            audience_estimate: None,
            why_fit: None,
            status: draft.status(),
            source: None,
            channel: None,
            outreach_date: None,
            follow_up_count: 0,
            last_contact_date: None,
            next_action_date: None,
            recording_date: None,
            recording_time: None,
            recording_platform: None,
            episode_url: None,
            air_date: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        // Optional columns land the same way an update would apply them.
        let guest = apply_patch(&base, draft.extra(), now)?;

        let mut state = self.write()?;
        state.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn update_guest(
        &self,
        id: GuestId,
        patch: &GuestPatch,
        updated_at: DateTime<Utc>,
    ) -> PipelineRepositoryResult<Option<PodcastGuest>> {
        let mut state = self.write()?;
        let Some(existing) = state.get(&id) else {
            return Ok(None);
        };
        let updated = apply_patch(existing, patch, updated_at)?;
        state.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete_guest(&self, id: GuestId) -> PipelineRepositoryResult<()> {
        let mut state = self.write()?;
        state.remove(&id);
        Ok(())
    }

    async fn search_guests(
        &self,
        term: &str,
        limit: u32,
    ) -> PipelineRepositoryResult<Vec<PodcastGuest>> {
        let state = self.read()?;
        let mut guests: Vec<PodcastGuest> = state
            .values()
            .filter(|guest| {
                contains_ci(&guest.host_name, term)
                    || contains_ci(&guest.podcast_name, term)
                    || guest
                        .notes
                        .as_deref()
                        .is_some_and(|notes| contains_ci(notes, term))
            })
            .cloned()
            .collect();
        guests.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        guests.truncate(limit as usize);
        Ok(guests)
    }
}
