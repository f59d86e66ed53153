//! Adapter implementations for the file store port.

pub mod dropbox;
pub mod memory;

pub use dropbox::DropboxFileStore;
pub use memory::InMemoryFileStore;
