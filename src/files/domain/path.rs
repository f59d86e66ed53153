//! Root-confined path resolution.
//!
//! Client paths are joined under a fixed root prefix, slash-normalized,
//! and resolved segment-wise. A path whose `.` / `..` segments climb above
//! the root is rejected before any upstream call is made.

use super::FilesDomainError;
use std::fmt;

/// An absolute backend path guaranteed to sit under the configured root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootedPath {
    full: String,
    relative: String,
}

impl RootedPath {
    /// Joins `input` under `root` and normalizes the result.
    ///
    /// Runs of slashes collapse, `.` segments drop, and `..` segments pop.
    /// The empty input resolves to the root itself.
    ///
    /// # Errors
    ///
    /// Returns [`FilesDomainError::PathOutsideRoot`] when resolution pops
    /// above the root.
    pub fn resolve(root: &str, input: &str) -> Result<Self, FilesDomainError> {
        let root_segments: Vec<&str> = segments_of(root).collect();

        let mut stack: Vec<&str> = root_segments.clone();
        for segment in segments_of(input) {
            match segment {
                "." => {}
                ".." => {
                    if stack.len() <= root_segments.len() {
                        return Err(FilesDomainError::PathOutsideRoot {
                            path: input.to_owned(),
                        });
                    }
                    stack.pop();
                }
                other => stack.push(other),
            }
        }

        let full = format!("/{}", stack.join("/"));
        let root_full = format!("/{}", root_segments.join("/"));
        let relative = full
            .strip_prefix(&root_full)
            .unwrap_or_default()
            .to_owned();
        Ok(Self { full, relative })
    }

    /// Returns the absolute backend path, root included.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Returns the root-relative display path: empty for the root itself,
    /// otherwise slash-led.
    #[must_use]
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Returns the final path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        self.full.rsplit('/').next().unwrap_or_default()
    }
}

impl fmt::Display for RootedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

fn segments_of(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
