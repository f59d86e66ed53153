//! Podcast-guest pipeline tracking.
//!
//! Guests live in the backend `podcast_guesting` table and move through a
//! fixed outreach funnel. The module follows hexagonal architecture:
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
