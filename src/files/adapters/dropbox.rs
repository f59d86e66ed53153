//! Dropbox API v2 file store.
//!
//! RPC-style calls go to `api.dropboxapi.com`; upload and download go to
//! `content.dropboxapi.com` with their arguments in the `Dropbox-API-Arg`
//! header and the payload in the body.

use crate::config::DropboxConfig;
use crate::files::{
    domain::{EntryKind, RootedPath},
    ports::{EntryMetadata, FileContent, FileStore, FileStoreError, FileStoreResult, StoredEntry},
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const API_BASE: &str = "https://api.dropboxapi.com/2";
const CONTENT_BASE: &str = "https://content.dropboxapi.com/2";

/// Folder listings are capped at this page size; the board's trees are tens
/// of entries, far below it.
const LIST_FOLDER_LIMIT: u32 = 2000;

/// Dropbox-backed file store.
#[derive(Debug, Clone)]
pub struct DropboxFileStore {
    http: reqwest::Client,
    access_token: String,
}

impl DropboxFileStore {
    /// Creates a store from backend settings and a shared HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &DropboxConfig) -> Self {
        Self {
            http,
            access_token: config.access_token.clone(),
        }
    }

    async fn rpc<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        arg: &serde_json::Value,
    ) -> FileStoreResult<T> {
        let response = self
            .http
            .post(format!("{API_BASE}/{endpoint}"))
            .bearer_auth(&self.access_token)
            .json(arg)
            .send()
            .await
            .map_err(FileStoreError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), response).await);
        }
        response.json().await.map_err(FileStoreError::transport)
    }
}

async fn upstream_error(status: u16, response: reqwest::Response) -> FileStoreError {
    let body = response.text().await.unwrap_or_default();
    let summary = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.error_summary)
        .unwrap_or_else(|| "Dropbox API error".to_owned());
    FileStoreError::Upstream { status, summary }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListFolderResponse {
    entries: Vec<ListEntryModel>,
}

#[derive(Debug, Deserialize)]
struct ListEntryModel {
    #[serde(rename = ".tag")]
    tag: String,
    name: String,
    #[serde(default)]
    path_display: Option<String>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    client_modified: Option<String>,
    #[serde(default)]
    server_modified: Option<String>,
}

impl ListEntryModel {
    fn into_stored(self) -> StoredEntry {
        let kind = if self.tag == "folder" {
            EntryKind::Folder
        } else {
            EntryKind::File
        };
        let path = self.path_display.unwrap_or_else(|| self.name.clone());
        StoredEntry {
            name: self.name,
            path,
            kind,
            size: self.size,
            modified: self.client_modified.or(self.server_modified),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct MetadataModel {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    path_display: Option<String>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    client_modified: Option<String>,
    #[serde(default)]
    server_modified: Option<String>,
}

impl MetadataModel {
    fn into_metadata(self, fallback_name: &str) -> EntryMetadata {
        EntryMetadata {
            name: self.name.unwrap_or_else(|| fallback_name.to_owned()),
            path: self.path_display,
            size: self.size,
            modified: self.client_modified.or(self.server_modified),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MetadataEnvelope {
    metadata: MetadataModel,
}

#[derive(Debug, Deserialize)]
struct TemporaryLinkResponse {
    link: String,
}

#[async_trait]
impl FileStore for DropboxFileStore {
    async fn list_folder(&self, path: &RootedPath) -> FileStoreResult<Vec<StoredEntry>> {
        let arg = json!({
            "path": path.full(),
            "include_media_info": true,
            "include_deleted": false,
            "include_has_explicit_shared_members": false,
            "limit": LIST_FOLDER_LIMIT,
        });
        let listing: ListFolderResponse = self.rpc("files/list_folder", &arg).await?;
        Ok(listing
            .entries
            .into_iter()
            .map(ListEntryModel::into_stored)
            .collect())
    }

    async fn download(&self, path: &RootedPath) -> FileStoreResult<FileContent> {
        let arg = json!({ "path": path.full() });
        let response = self
            .http
            .post(format!("{CONTENT_BASE}/files/download"))
            .bearer_auth(&self.access_token)
            .header("Dropbox-API-Arg", arg.to_string())
            .send()
            .await
            .map_err(FileStoreError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), response).await);
        }

        // Content comes in the body; metadata rides in a response header.
        let metadata: MetadataModel = response
            .headers()
            .get("Dropbox-API-Result")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| serde_json::from_str(value).ok())
            .unwrap_or_default();
        let content = response.text().await.map_err(FileStoreError::transport)?;

        Ok(FileContent {
            content,
            name: metadata.name,
            size: metadata.size,
            modified: metadata.client_modified.or(metadata.server_modified),
        })
    }

    async fn upload(&self, path: &RootedPath, content: &str) -> FileStoreResult<EntryMetadata> {
        let arg = json!({
            "path": path.full(),
            "mode": "overwrite",
            "autorename": false,
            "mute": true,
        });
        let response = self
            .http
            .post(format!("{CONTENT_BASE}/files/upload"))
            .bearer_auth(&self.access_token)
            .header("Dropbox-API-Arg", arg.to_string())
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(content.to_owned())
            .send()
            .await
            .map_err(FileStoreError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), response).await);
        }
        let metadata: MetadataModel = response.json().await.map_err(FileStoreError::transport)?;
        Ok(metadata.into_metadata(path.name()))
    }

    async fn create_folder(&self, path: &RootedPath) -> FileStoreResult<EntryMetadata> {
        let arg = json!({ "path": path.full(), "autorename": false });
        let envelope: MetadataEnvelope = self.rpc("files/create_folder_v2", &arg).await?;
        Ok(envelope.metadata.into_metadata(path.name()))
    }

    async fn move_entry(
        &self,
        from: &RootedPath,
        to: &RootedPath,
    ) -> FileStoreResult<EntryMetadata> {
        let arg = json!({
            "from_path": from.full(),
            "to_path": to.full(),
            "autorename": false,
        });
        let envelope: MetadataEnvelope = self.rpc("files/move_v2", &arg).await?;
        Ok(envelope.metadata.into_metadata(to.name()))
    }

    async fn temporary_link(&self, path: &RootedPath) -> FileStoreResult<String> {
        let arg = json!({ "path": path.full() });
        let response: TemporaryLinkResponse = self.rpc("files/get_temporary_link", &arg).await?;
        Ok(response.link)
    }
}
