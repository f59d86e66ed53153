//! Workflow graph snapshot and subway-route derivation.
//!
//! The automation landscape is stored as a small directed graph: lanes
//! group nodes by owner, edges connect nodes, and processes name the
//! subgraphs reachable from a trigger node. Route derivation walks the
//! graph breadth-first per process, refusing to cross into another
//! process's start node, so each "subway line" stays its own. The module
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
