//! Adapter implementations for the board ports.

pub mod memory;
pub mod postgrest;
