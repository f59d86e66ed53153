//! Dropbox-backed file manager.
//!
//! Every operation takes a client-relative path, joins it under the
//! configured root prefix, and refuses anything that escapes that root.
//! Listings are live Dropbox state, never persisted locally. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
