//! Orchestration services for the workflow context.

mod map;

pub use map::{WorkflowMap, WorkflowService, WorkflowServiceError, WorkflowServiceResult};
