//! Service layer for root-confined file operations.

use super::TempLinkCache;
use crate::files::{
    domain::{EntryKind, FileEntry, FilesDomainError, RootedPath, extension_of, sort_entries},
    ports::{FileStore, FileStoreError},
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Metadata attached to read and write responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    /// Entry name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Last modification timestamp.
    pub modified: String,
}

/// A downloaded file with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRead {
    /// File contents as text.
    pub content: String,
    /// Attached metadata.
    pub metadata: FileMetadata,
}

/// Name and root-relative path of a created or moved entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    /// Entry name.
    pub name: String,
    /// Root-relative display path.
    pub path: String,
}

/// Service-level errors for file operations.
#[derive(Debug, Clone, Error)]
pub enum FileServiceError {
    /// The request omitted a required path.
    #[error("path is required")]
    MissingPath,

    /// The path escaped the configured root.
    #[error(transparent)]
    Domain(#[from] FilesDomainError),

    /// The content backend failed.
    #[error(transparent)]
    Store(#[from] FileStoreError),
}

/// Result type for file service operations.
pub type FileServiceResult<T> = Result<T, FileServiceError>;

/// Root-confined file manager service.
pub struct FileManagerService<S, C>
where
    S: FileStore + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    store: Arc<S>,
    clock: Arc<C>,
    root: String,
    links: TempLinkCache,
}

impl<S, C> FileManagerService<S, C>
where
    S: FileStore + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a service confining all operations under `root`.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>, root: &str) -> Self {
        Self {
            store,
            clock,
            root: normalize_root(root),
            links: TempLinkCache::new(),
        }
    }

    /// Returns the normalized root prefix.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Lists a folder, folders first, names case-insensitively ordered.
    /// The empty path lists the root itself.
    ///
    /// # Errors
    ///
    /// Returns [`FileServiceError::Domain`] when the path escapes the root
    /// and [`FileServiceError::Store`] when the backend fails.
    pub async fn list_folder(&self, path: &str) -> FileServiceResult<Vec<FileEntry>> {
        let resolved = self.resolve(path)?;
        let stored = self.store.list_folder(&resolved).await?;

        let mut entries: Vec<FileEntry> = stored
            .into_iter()
            .map(|entry| {
                let relative = entry
                    .path
                    .strip_prefix(&self.root)
                    .unwrap_or(&entry.path)
                    .to_owned();
                let extension = match entry.kind {
                    EntryKind::File => extension_of(&entry.name),
                    EntryKind::Folder => None,
                };
                FileEntry {
                    name: entry.name,
                    path: relative,
                    kind: entry.kind,
                    size: entry.size,
                    modified: entry.modified,
                    extension,
                }
            })
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }

    /// Downloads a file as text with metadata fallbacks: the name falls
    /// back to the path tail, the size to the content length, and the
    /// modification time to the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`FileServiceError::MissingPath`] for an empty path,
    /// [`FileServiceError::Domain`] on root escape, and
    /// [`FileServiceError::Store`] when the backend fails.
    pub async fn read_file(&self, path: &str) -> FileServiceResult<FileRead> {
        let resolved = self.resolve_required(path)?;
        let downloaded = self.store.download(&resolved).await?;

        let size = downloaded
            .size
            .unwrap_or(downloaded.content.len() as u64);
        let metadata = FileMetadata {
            name: downloaded
                .name
                .unwrap_or_else(|| resolved.name().to_owned()),
            size,
            modified: downloaded
                .modified
                .unwrap_or_else(|| self.clock.utc().to_rfc3339()),
        };
        Ok(FileRead {
            content: downloaded.content,
            metadata,
        })
    }

    /// Uploads text content, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`FileServiceError::MissingPath`] for an empty path,
    /// [`FileServiceError::Domain`] on root escape, and
    /// [`FileServiceError::Store`] when the backend fails.
    pub async fn write_file(&self, path: &str, content: &str) -> FileServiceResult<FileMetadata> {
        let resolved = self.resolve_required(path)?;
        let written = self.store.upload(&resolved, content).await?;

        Ok(FileMetadata {
            name: written.name,
            size: written.size.unwrap_or(content.len() as u64),
            modified: written
                .modified
                .unwrap_or_else(|| self.clock.utc().to_rfc3339()),
        })
    }

    /// Creates a folder.
    ///
    /// # Errors
    ///
    /// Returns [`FileServiceError::MissingPath`] for an empty path,
    /// [`FileServiceError::Domain`] on root escape, and
    /// [`FileServiceError::Store`] when the backend fails.
    pub async fn create_folder(&self, path: &str) -> FileServiceResult<EntrySummary> {
        let resolved = self.resolve_required(path)?;
        let created = self.store.create_folder(&resolved).await?;
        Ok(self.summarize(created.name, created.path, &resolved))
    }

    /// Moves a file or folder; both endpoints are root-checked.
    ///
    /// # Errors
    ///
    /// Returns [`FileServiceError::MissingPath`] when either path is empty,
    /// [`FileServiceError::Domain`] when either escapes the root, and
    /// [`FileServiceError::Store`] when the backend fails.
    pub async fn move_entry(&self, from: &str, to: &str) -> FileServiceResult<EntrySummary> {
        let resolved_from = self.resolve_required(from)?;
        let resolved_to = self.resolve_required(to)?;
        let moved = self.store.move_entry(&resolved_from, &resolved_to).await?;
        Ok(self.summarize(moved.name, moved.path, &resolved_to))
    }

    /// Returns a temporary direct-download link, cached per path until its
    /// TTL lapses.
    ///
    /// # Errors
    ///
    /// Returns [`FileServiceError::MissingPath`] for an empty path,
    /// [`FileServiceError::Domain`] on root escape, and
    /// [`FileServiceError::Store`] when the backend fails.
    pub async fn temporary_link(&self, path: &str) -> FileServiceResult<String> {
        let resolved = self.resolve_required(path)?;
        let now = self.clock.utc();
        if let Some(cached) = self.links.get(resolved.full(), now) {
            return Ok(cached);
        }

        let link = self.store.temporary_link(&resolved).await?;
        self.links.put(resolved.full(), &link, now);
        Ok(link)
    }

    fn resolve(&self, path: &str) -> Result<RootedPath, FilesDomainError> {
        RootedPath::resolve(&self.root, path)
    }

    fn resolve_required(&self, path: &str) -> FileServiceResult<RootedPath> {
        if path.trim().is_empty() {
            return Err(FileServiceError::MissingPath);
        }
        Ok(self.resolve(path)?)
    }

    fn summarize(
        &self,
        name: String,
        absolute: Option<String>,
        resolved: &RootedPath,
    ) -> EntrySummary {
        let path = absolute
            .as_deref()
            .and_then(|value| value.strip_prefix(&self.root))
            .map_or_else(|| resolved.relative().to_owned(), str::to_owned);
        EntrySummary { name, path }
    }
}

fn normalize_root(root: &str) -> String {
    let segments: Vec<&str> = root.split('/').filter(|segment| !segment.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
