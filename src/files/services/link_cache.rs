//! Per-path cache of temporary download links.
//!
//! Dropbox links expire after four hours; entries are kept slightly short
//! of that and refetched once stale.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

/// How long a cached link stays valid: 3.5 hours.
pub const TEMP_LINK_TTL_SECONDS: i64 = 12_600;

#[derive(Debug, Clone)]
struct CachedLink {
    url: String,
    expires_at: DateTime<Utc>,
}

/// Thread-safe temporary-link cache keyed by absolute backend path.
#[derive(Debug, Default)]
pub struct TempLinkCache {
    entries: RwLock<HashMap<String, CachedLink>>,
}

impl TempLinkCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached link for `path` when it is still fresh at `now`.
    #[must_use]
    pub fn get(&self, path: &str, now: DateTime<Utc>) -> Option<String> {
        let entries = self.entries.read().ok()?;
        entries
            .get(path)
            .filter(|cached| cached.expires_at > now)
            .map(|cached| cached.url.clone())
    }

    /// Stores a freshly minted link, valid for the TTL from `now`.
    pub fn put(&self, path: &str, url: &str, now: DateTime<Utc>) {
        let expires_at = now + TimeDelta::seconds(TEMP_LINK_TTL_SECONDS);
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                path.to_owned(),
                CachedLink {
                    url: url.to_owned(),
                    expires_at,
                },
            );
        }
    }

    /// Drops every cached link.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
