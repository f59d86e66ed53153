//! Podcast guest row mirror and its status/source vocabularies.

use super::{GuestId, ParseGuestSourceError, ParseGuestStatusError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Funnel stage a guest booking sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestStatus {
    /// Identified but not yet contacted.
    Prospect,
    /// First contact sent.
    Outreach,
    /// Waiting on a follow-up.
    FollowUp,
    /// Recording scheduled.
    Booked,
    /// Episode recorded.
    Completed,
    /// Host declined.
    Declined,
}

impl GuestStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prospect => "prospect",
            Self::Outreach => "outreach",
            Self::FollowUp => "follow_up",
            Self::Booked => "booked",
            Self::Completed => "completed",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for GuestStatus {
    type Error = ParseGuestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "prospect" => Ok(Self::Prospect),
            "outreach" => Ok(Self::Outreach),
            "follow_up" => Ok(Self::FollowUp),
            "booked" => Ok(Self::Booked),
            "completed" => Ok(Self::Completed),
            "declined" => Ok(Self::Declined),
            _ => Err(ParseGuestStatusError(value.to_owned())),
        }
    }
}

/// How the booking originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestSource {
    /// The host reached out to us.
    Inbound,
    /// We reached out to the host.
    Outbound,
}

impl GuestSource {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

impl fmt::Display for GuestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for GuestSource {
    type Error = ParseGuestSourceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "inbound" => Ok(Self::Inbound),
            "outbound" => Ok(Self::Outbound),
            _ => Err(ParseGuestSourceError(value.to_owned())),
        }
    }
}

/// A guest row as mirrored from the backend `podcast_guesting` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastGuest {
    /// Row identifier.
    pub id: GuestId,
    /// Host display name.
    pub host_name: String,
    /// Podcast name.
    pub podcast_name: String,
    /// Podcast URL.
    pub podcast_url: Option<String>,
    /// Free-form audience size estimate.
    pub audience_estimate: Option<String>,
    /// Why this podcast is a fit.
    pub why_fit: Option<String>,
    /// Funnel stage.
    pub status: GuestStatus,
    /// Booking origin.
    pub source: Option<GuestSource>,
    /// Contact channel used for outreach.
    pub channel: Option<String>,
    /// Date of the first outreach.
    pub outreach_date: Option<String>,
    /// Number of follow-ups sent.
    #[serde(default)]
    pub follow_up_count: i64,
    /// Date of the last contact.
    pub last_contact_date: Option<String>,
    /// Date the next action is due.
    pub next_action_date: Option<String>,
    /// Scheduled recording date.
    pub recording_date: Option<String>,
    /// Scheduled recording time.
    pub recording_time: Option<String>,
    /// Recording platform.
    pub recording_platform: Option<String>,
    /// Published episode URL.
    pub episode_url: Option<String>,
    /// Episode air date.
    pub air_date: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
