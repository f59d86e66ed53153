//! Orchestration services for the file manager context.

mod link_cache;
mod manager;

pub use link_cache::{TEMP_LINK_TTL_SECONDS, TempLinkCache};
pub use manager::{
    EntrySummary, FileManagerService, FileMetadata, FileRead, FileServiceError, FileServiceResult,
};
