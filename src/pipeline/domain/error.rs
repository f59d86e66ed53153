//! Error types for pipeline domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing pipeline domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineDomainError {
    /// The host name is empty after trimming.
    #[error("host name is required")]
    EmptyHostName,

    /// The podcast name is empty after trimming.
    #[error("podcast name is required")]
    EmptyPodcastName,

    /// The guest identifier is missing from an update or delete request.
    #[error("guest id is required")]
    MissingGuestId,

    /// The guest identifier is not a valid UUID.
    #[error("invalid guest id: {0}")]
    InvalidGuestId(String),

    /// The status value is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseGuestStatusError),

    /// The source value is unknown.
    #[error(transparent)]
    InvalidSource(#[from] ParseGuestSourceError),
}

/// Error returned while parsing guest statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pipeline status: {0}")]
pub struct ParseGuestStatusError(pub String);

/// Error returned while parsing guest sources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pipeline source: {0}")]
pub struct ParseGuestSourceError(pub String);
