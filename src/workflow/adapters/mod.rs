//! Adapter implementations for the workflow ports.

pub mod memory;
pub mod postgrest;

pub use memory::InMemoryWorkflowRepository;
pub use postgrest::PostgrestWorkflowRepository;
