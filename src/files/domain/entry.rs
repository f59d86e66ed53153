//! File entries and extension classification.

use serde::{Deserialize, Serialize};

/// Extensions rendered in the image gallery.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Extensions opened in the markdown editor.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Extensions treated as editable text.
pub const TEXT_EXTENSIONS: [&str; 15] = [
    "md", "mdx", "txt", "json", "yml", "yaml", "toml", "csv", "xml", "html", "css", "js", "ts",
    "tsx", "jsx",
];

/// Whether an entry is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A folder.
    Folder,
}

/// A listing entry reshaped from backend metadata. Sourced live, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Entry name, final path segment.
    pub name: String,
    /// Root-relative display path.
    pub path: String,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Size in bytes, files only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modification timestamp, when the backend reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    /// Lowercased extension, files only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Returns the lowercased extension of `filename`, if it has one.
#[must_use]
pub fn extension_of(filename: &str) -> Option<String> {
    let (stem, extension) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        // Dotfiles such as `.gitignore` have no extension.
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

/// True when the filename carries an image extension.
#[must_use]
pub fn is_image_file(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// True when the filename carries a markdown extension.
#[must_use]
pub fn is_markdown_file(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.as_str()))
}

/// True when the filename carries an editable-text extension.
#[must_use]
pub fn is_text_file(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.as_str()))
}

/// Orders entries folders-first, then case-insensitively by name.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| {
        let rank = |entry: &FileEntry| match entry.kind {
            EntryKind::Folder => 0_u8,
            EntryKind::File => 1,
        };
        rank(a)
            .cmp(&rank(b))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}
