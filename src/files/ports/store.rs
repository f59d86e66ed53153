//! Store port for the content backend.

use crate::files::domain::{EntryKind, RootedPath};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for file store operations.
pub type FileStoreResult<T> = Result<T, FileStoreError>;

/// A raw listing entry as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    /// Entry name.
    pub name: String,
    /// Absolute backend path.
    pub path: String,
    /// File or folder.
    pub kind: EntryKind,
    /// Size in bytes, files only.
    pub size: Option<u64>,
    /// Last modification timestamp, files only.
    pub modified: Option<String>,
}

/// Downloaded file content plus whatever metadata rode along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// File contents as text.
    pub content: String,
    /// Entry name, when reported.
    pub name: Option<String>,
    /// Size in bytes, when reported.
    pub size: Option<u64>,
    /// Last modification timestamp, when reported.
    pub modified: Option<String>,
}

/// Metadata returned for a mutating operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Entry name.
    pub name: String,
    /// Absolute backend path, when reported.
    pub path: Option<String>,
    /// Size in bytes, when reported.
    pub size: Option<u64>,
    /// Last modification timestamp, when reported.
    pub modified: Option<String>,
}

/// Content backend contract (Dropbox in production).
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Lists the immediate children of a folder.
    async fn list_folder(&self, path: &RootedPath) -> FileStoreResult<Vec<StoredEntry>>;

    /// Downloads a file as text.
    async fn download(&self, path: &RootedPath) -> FileStoreResult<FileContent>;

    /// Uploads text content, overwriting any existing file.
    async fn upload(&self, path: &RootedPath, content: &str) -> FileStoreResult<EntryMetadata>;

    /// Creates a folder.
    async fn create_folder(&self, path: &RootedPath) -> FileStoreResult<EntryMetadata>;

    /// Moves a file or folder.
    async fn move_entry(
        &self,
        from: &RootedPath,
        to: &RootedPath,
    ) -> FileStoreResult<EntryMetadata>;

    /// Issues a time-limited direct-download link for a file.
    async fn temporary_link(&self, path: &RootedPath) -> FileStoreResult<String>;
}

/// Errors returned by file store implementations.
#[derive(Debug, Clone, Error)]
pub enum FileStoreError {
    /// The backend answered with a non-success status.
    #[error("{summary}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error summary.
        summary: String,
    },

    /// The request could not be sent or the response not read.
    #[error("file store transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl FileStoreError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
