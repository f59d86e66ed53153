//! Cross-table search.
//!
//! Issues pattern-match queries against tasks, comments, and pipeline
//! guests through their repository ports and concatenates the results with
//! snippet highlighting. There is no index; the backend's ILIKE scan is the
//! search engine.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
