//! Repository port for the workflow graph tables.

use crate::workflow::domain::{Lane, WorkflowEdge, WorkflowNode, WorkflowProcess, WorkflowStep};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for workflow repository operations.
pub type WorkflowRepositoryResult<T> = Result<T, WorkflowRepositoryError>;

/// Read-only access to the five workflow tables.
#[async_trait]
pub trait WorkflowRepository: Send + Sync {
    /// Lists lanes ordered by `sort_order` ascending.
    async fn lanes(&self) -> WorkflowRepositoryResult<Vec<Lane>>;

    /// Lists nodes ordered by stored x position ascending.
    async fn nodes(&self) -> WorkflowRepositoryResult<Vec<WorkflowNode>>;

    /// Lists every edge.
    async fn edges(&self) -> WorkflowRepositoryResult<Vec<WorkflowEdge>>;

    /// Lists processes ordered by name ascending.
    async fn processes(&self) -> WorkflowRepositoryResult<Vec<WorkflowProcess>>;

    /// Lists steps ordered by `step_order` ascending.
    async fn steps(&self) -> WorkflowRepositoryResult<Vec<WorkflowStep>>;
}

/// Errors returned by workflow repository implementations.
#[derive(Debug, Clone, Error)]
pub enum WorkflowRepositoryError {
    /// Backend-layer failure.
    #[error("workflow persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkflowRepositoryError {
    /// Wraps a backend error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
