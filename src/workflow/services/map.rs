//! Service layer assembling the subway-map data feed.

use crate::workflow::{
    domain::{
        Lane, ProcessId, ProcessLine, ProcessRoute, WorkflowEdge, WorkflowNode, WorkflowStep,
        build_process_lines, derive_routes,
    },
    ports::{WorkflowRepository, WorkflowRepositoryError},
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Everything the subway map needs in one payload: the raw graph, the
/// decorated process lines, and each line's derived route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowMap {
    /// Lanes in display order.
    pub lanes: Vec<Lane>,
    /// Nodes in stored x order.
    pub nodes: Vec<WorkflowNode>,
    /// Every edge.
    pub edges: Vec<WorkflowEdge>,
    /// Decorated process lines.
    pub processes: Vec<ProcessLine>,
    /// Runbook steps in per-node order.
    pub steps: Vec<WorkflowStep>,
    /// Derived route per process.
    pub routes: HashMap<ProcessId, ProcessRoute>,
}

/// Service-level errors for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] WorkflowRepositoryError),
}

/// Result type for workflow service operations.
pub type WorkflowServiceResult<T> = Result<T, WorkflowServiceError>;

/// Subway-map assembly service.
pub struct WorkflowService<R>
where
    R: WorkflowRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> WorkflowService<R>
where
    R: WorkflowRepository + ?Sized,
{
    /// Creates a new workflow service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches the five graph tables and derives the process lines and
    /// their routes.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::Repository`] when any table fetch
    /// fails.
    pub async fn snapshot(&self) -> WorkflowServiceResult<WorkflowMap> {
        let lanes = self.repository.lanes().await?;
        let nodes = self.repository.nodes().await?;
        let edges = self.repository.edges().await?;
        let processes = self.repository.processes().await?;
        let steps = self.repository.steps().await?;

        let lines = build_process_lines(&processes, &nodes, &lanes);
        let routes = derive_routes(&lines, &nodes, &edges);

        Ok(WorkflowMap {
            lanes,
            nodes,
            edges,
            processes: lines,
            steps,
            routes,
        })
    }
}
