//! Port contracts for the file manager context.

mod store;

pub use store::{
    EntryMetadata, FileContent, FileStore, FileStoreError, FileStoreResult, StoredEntry,
};
