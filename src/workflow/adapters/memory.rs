//! In-memory workflow repository for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::workflow::{
    domain::{Lane, WorkflowEdge, WorkflowNode, WorkflowProcess, WorkflowStep},
    ports::{WorkflowRepository, WorkflowRepositoryError, WorkflowRepositoryResult},
};

/// Thread-safe in-memory workflow repository, seeded directly with rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkflowRepository {
    state: Arc<RwLock<GraphState>>,
}

#[derive(Debug, Default)]
struct GraphState {
    lanes: Vec<Lane>,
    nodes: Vec<WorkflowNode>,
    edges: Vec<WorkflowEdge>,
    processes: Vec<WorkflowProcess>,
    steps: Vec<WorkflowStep>,
}

impl InMemoryWorkflowRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds graph rows.
    ///
    /// # Panics
    ///
    /// Panics when the state lock is poisoned; test-only usage.
    pub fn seed(
        &self,
        lanes: Vec<Lane>,
        nodes: Vec<WorkflowNode>,
        edges: Vec<WorkflowEdge>,
        processes: Vec<WorkflowProcess>,
        steps: Vec<WorkflowStep>,
    ) {
        let mut state = self.state.write().expect("workflow lock poisoned");
        state.lanes = lanes;
        state.nodes = nodes;
        state.edges = edges;
        state.processes = processes;
        state.steps = steps;
    }

    fn read(&self) -> WorkflowRepositoryResult<std::sync::RwLockReadGuard<'_, GraphState>> {
        self.state.read().map_err(|err| {
            WorkflowRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl WorkflowRepository for InMemoryWorkflowRepository {
    async fn lanes(&self) -> WorkflowRepositoryResult<Vec<Lane>> {
        let mut lanes = self.read()?.lanes.clone();
        lanes.sort_by_key(|lane| lane.sort_order);
        Ok(lanes)
    }

    async fn nodes(&self) -> WorkflowRepositoryResult<Vec<WorkflowNode>> {
        let mut nodes = self.read()?.nodes.clone();
        nodes.sort_by(|a, b| {
            a.position_x
                .unwrap_or_default()
                .total_cmp(&b.position_x.unwrap_or_default())
        });
        Ok(nodes)
    }

    async fn edges(&self) -> WorkflowRepositoryResult<Vec<WorkflowEdge>> {
        Ok(self.read()?.edges.clone())
    }

    async fn processes(&self) -> WorkflowRepositoryResult<Vec<WorkflowProcess>> {
        let mut processes = self.read()?.processes.clone();
        processes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(processes)
    }

    async fn steps(&self) -> WorkflowRepositoryResult<Vec<WorkflowStep>> {
        let mut steps = self.read()?.steps.clone();
        steps.sort_by_key(|step| step.step_order);
        Ok(steps)
    }
}
