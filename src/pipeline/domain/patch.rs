//! Guest creation and update payloads.

use super::{GuestStatus, PipelineDomainError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Columns an update request may touch.
pub const GUEST_UPDATE_COLUMNS: [&str; 18] = [
    "host_name",
    "podcast_name",
    "podcast_url",
    "audience_estimate",
    "why_fit",
    "status",
    "source",
    "channel",
    "outreach_date",
    "follow_up_count",
    "last_contact_date",
    "next_action_date",
    "recording_date",
    "recording_time",
    "recording_platform",
    "episode_url",
    "air_date",
    "notes",
];

/// Whitelist-filtered update payload for a guest row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestPatch {
    fields: BTreeMap<String, Value>,
}

impl GuestPatch {
    /// Builds a patch from a request body, keeping only updatable columns.
    #[must_use]
    pub fn from_json(body: &Map<String, Value>) -> Self {
        let fields = body
            .iter()
            .filter(|(key, _)| GUEST_UPDATE_COLUMNS.contains(&key.as_str()))
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

/// Validated payload for creating a guest.
///
/// The required names are trimmed and checked; every other column rides
/// along as a whitelist-filtered patch, mirroring the optional-field
/// forwarding the funnel board does on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDraft {
    host_name: String,
    podcast_name: String,
    status: GuestStatus,
    extra: GuestPatch,
}

impl GuestDraft {
    /// Creates a draft with the required names, trimmed. Status defaults to
    /// prospect.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::EmptyHostName`] or
    /// [`PipelineDomainError::EmptyPodcastName`] when either name trims to
    /// nothing.
    pub fn new(
        host_name: impl Into<String>,
        podcast_name: impl Into<String>,
    ) -> Result<Self, PipelineDomainError> {
        let host_name = host_name.into().trim().to_owned();
        if host_name.is_empty() {
            return Err(PipelineDomainError::EmptyHostName);
        }
        let podcast_name = podcast_name.into().trim().to_owned();
        if podcast_name.is_empty() {
            return Err(PipelineDomainError::EmptyPodcastName);
        }
        Ok(Self {
            host_name,
            podcast_name,
            status: GuestStatus::Prospect,
            extra: GuestPatch::default(),
        })
    }

    /// Sets the initial funnel stage.
    #[must_use]
    pub const fn with_status(mut self, status: GuestStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches the optional columns from the request body.
    #[must_use]
    pub fn with_extra(mut self, extra: GuestPatch) -> Self {
        self.extra = extra;
        self
    }

    /// Returns the trimmed host name.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Returns the trimmed podcast name.
    #[must_use]
    pub fn podcast_name(&self) -> &str {
        &self.podcast_name
    }

    /// Returns the initial funnel stage.
    #[must_use]
    pub const fn status(&self) -> GuestStatus {
        self.status
    }

    /// Returns the optional columns.
    #[must_use]
    pub const fn extra(&self) -> &GuestPatch {
        &self.extra
    }

    /// Builds the insert body sent to the backend. The validated names and
    /// status override anything carried in the optional columns.
    #[must_use]
    pub fn insert_payload(&self) -> Map<String, Value> {
        let mut payload: Map<String, Value> = self
            .extra
            .fields()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        payload.insert("host_name".to_owned(), Value::from(self.host_name.clone()));
        payload.insert(
            "podcast_name".to_owned(),
            Value::from(self.podcast_name.clone()),
        );
        payload.insert("status".to_owned(), Value::from(self.status.as_str()));
        payload
    }
}
