//! Arlo Board: personal productivity API service.
//!
//! This crate fronts three managed backends — a PostgREST-style table API,
//! the Dropbox content API, and the Stripe API — and exposes the
//! browser-facing JSON surface of the Arlo Board application: a kanban task
//! board with comments, a podcast-guest pipeline, a Dropbox-backed markdown
//! file manager, a revenue dashboard, cross-table search, and a workflow
//! subway-map data feed.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the managed backends
//! - **Adapters**: Concrete implementations of ports (HTTP clients, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Kanban tasks and task comments
//! - [`pipeline`]: Podcast-guest pipeline tracking
//! - [`files`]: Dropbox-backed file manager under a fixed root
//! - [`revenue`]: Stripe balance-transaction aggregation
//! - [`search`]: Cross-table pattern search with snippets
//! - [`workflow`]: Workflow graph snapshot and subway-route derivation
//! - [`postgrest`]: Shared PostgREST request client and filter builder
//! - [`http`]: The axum surface under `/api/*`
//! - [`config`]: Environment-derived configuration

pub mod board;
pub mod config;
pub mod files;
pub mod http;
pub mod pipeline;
pub mod postgrest;
pub mod revenue;
pub mod search;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;
