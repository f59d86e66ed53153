//! Error types for file manager domain validation.

use thiserror::Error;

/// Errors returned while constructing file manager domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilesDomainError {
    /// The resolved path does not stay under the configured root.
    #[error("access denied")]
    PathOutsideRoot {
        /// The offending client-supplied path.
        path: String,
    },
}
