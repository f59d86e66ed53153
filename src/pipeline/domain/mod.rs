//! Domain model for the podcast-guest pipeline.

mod error;
mod guest;
mod ids;
mod patch;

pub use error::{ParseGuestSourceError, ParseGuestStatusError, PipelineDomainError};
pub use guest::{GuestSource, GuestStatus, PodcastGuest};
pub use ids::GuestId;
pub use patch::{GUEST_UPDATE_COLUMNS, GuestDraft, GuestPatch};
