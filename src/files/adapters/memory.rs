//! In-memory file store for tests.
//!
//! Mirrors the backend's observable behaviour: path errors come back as
//! 409 upstream failures with a `path/not_found`-style summary, and every
//! temporary link is freshly minted so caching is observable.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use crate::files::{
    domain::{EntryKind, RootedPath},
    ports::{EntryMetadata, FileContent, FileStore, FileStoreError, FileStoreResult, StoredEntry},
};

/// Thread-safe in-memory file store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileStore {
    state: Arc<RwLock<MemoryFsState>>,
}

#[derive(Debug, Default)]
struct MemoryFsState {
    files: BTreeMap<String, String>,
    folders: BTreeSet<String>,
    links_minted: u64,
}

impl InMemoryFileStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file with content.
    ///
    /// # Panics
    ///
    /// Panics when the state lock is poisoned; test-only usage.
    pub fn seed_file(&self, path: &str, content: &str) {
        let mut state = self.state.write().expect("file store lock poisoned");
        state.files.insert(path.to_owned(), content.to_owned());
    }

    /// Seeds an empty folder.
    ///
    /// # Panics
    ///
    /// Panics when the state lock is poisoned; test-only usage.
    pub fn seed_folder(&self, path: &str) {
        let mut state = self.state.write().expect("file store lock poisoned");
        state.folders.insert(path.to_owned());
    }

    /// Returns how many temporary links have been minted so far.
    ///
    /// # Panics
    ///
    /// Panics when the state lock is poisoned; test-only usage.
    #[must_use]
    pub fn links_minted(&self) -> u64 {
        self.state.read().expect("file store lock poisoned").links_minted
    }

    fn guard(
        &self,
    ) -> FileStoreResult<std::sync::RwLockWriteGuard<'_, MemoryFsState>> {
        self.state
            .write()
            .map_err(|err| FileStoreError::transport(std::io::Error::other(err.to_string())))
    }
}

fn not_found(path: &RootedPath) -> FileStoreError {
    FileStoreError::Upstream {
        status: 409,
        summary: format!("path/not_found/{}", path.full()),
    }
}

fn parent_of(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

fn name_of(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn list_folder(&self, path: &RootedPath) -> FileStoreResult<Vec<StoredEntry>> {
        let state = self.guard()?;
        let parent = path.full();

        let mut entries: Vec<StoredEntry> = state
            .folders
            .iter()
            .filter(|folder| parent_of(folder) == parent)
            .map(|folder| StoredEntry {
                name: name_of(folder).to_owned(),
                path: folder.clone(),
                kind: EntryKind::Folder,
                size: None,
                modified: None,
            })
            .collect();
        entries.extend(
            state
                .files
                .iter()
                .filter(|(file, _)| parent_of(file) == parent)
                .map(|(file, content)| StoredEntry {
                    name: name_of(file).to_owned(),
                    path: file.clone(),
                    kind: EntryKind::File,
                    size: Some(content.len() as u64),
                    modified: None,
                }),
        );
        Ok(entries)
    }

    async fn download(&self, path: &RootedPath) -> FileStoreResult<FileContent> {
        let state = self.guard()?;
        let content = state.files.get(path.full()).ok_or_else(|| not_found(path))?;
        Ok(FileContent {
            content: content.clone(),
            name: Some(path.name().to_owned()),
            size: Some(content.len() as u64),
            modified: None,
        })
    }

    async fn upload(&self, path: &RootedPath, content: &str) -> FileStoreResult<EntryMetadata> {
        let mut state = self.guard()?;
        state.files.insert(path.full().to_owned(), content.to_owned());
        Ok(EntryMetadata {
            name: path.name().to_owned(),
            path: Some(path.full().to_owned()),
            size: Some(content.len() as u64),
            modified: None,
        })
    }

    async fn create_folder(&self, path: &RootedPath) -> FileStoreResult<EntryMetadata> {
        let mut state = self.guard()?;
        if !state.folders.insert(path.full().to_owned()) {
            return Err(FileStoreError::Upstream {
                status: 409,
                summary: format!("path/conflict/folder/{}", path.full()),
            });
        }
        Ok(EntryMetadata {
            name: path.name().to_owned(),
            path: Some(path.full().to_owned()),
            size: None,
            modified: None,
        })
    }

    async fn move_entry(
        &self,
        from: &RootedPath,
        to: &RootedPath,
    ) -> FileStoreResult<EntryMetadata> {
        let mut state = self.guard()?;
        if let Some(content) = state.files.remove(from.full()) {
            state.files.insert(to.full().to_owned(), content);
        } else if state.folders.remove(from.full()) {
            state.folders.insert(to.full().to_owned());
            let prefix = format!("{}/", from.full());
            let moved: Vec<(String, String)> = state
                .files
                .iter()
                .filter(|(file, _)| file.starts_with(&prefix))
                .map(|(file, content)| (file.clone(), content.clone()))
                .collect();
            for (file, content) in moved {
                state.files.remove(&file);
                let suffix = file.strip_prefix(from.full()).unwrap_or_default();
                state.files.insert(format!("{}{suffix}", to.full()), content);
            }
        } else {
            return Err(not_found(from));
        }
        Ok(EntryMetadata {
            name: to.name().to_owned(),
            path: Some(to.full().to_owned()),
            size: None,
            modified: None,
        })
    }

    async fn temporary_link(&self, path: &RootedPath) -> FileStoreResult<String> {
        let mut state = self.guard()?;
        if !state.files.contains_key(path.full()) {
            return Err(not_found(path));
        }
        state.links_minted += 1;
        Ok(format!(
            "https://content.example/t{}{}",
            state.links_minted,
            path.full()
        ))
    }
}
