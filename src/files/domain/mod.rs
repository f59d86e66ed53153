//! Domain model for the file manager.

mod entry;
mod error;
mod path;

pub use entry::{
    EntryKind, FileEntry, IMAGE_EXTENSIONS, MARKDOWN_EXTENSIONS, TEXT_EXTENSIONS, extension_of,
    is_image_file, is_markdown_file, is_text_file, sort_entries,
};
pub use error::FilesDomainError;
pub use path::RootedPath;
