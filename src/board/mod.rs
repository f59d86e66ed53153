//! Kanban board: tasks and task comments.
//!
//! Tasks live in the backend `tasks` table and comments in `task_comments`;
//! all persistence and consistency guarantees are delegated to the table
//! API. The module follows hexagonal architecture:
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
