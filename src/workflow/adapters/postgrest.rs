//! Workflow repository speaking to the PostgREST table API.

use crate::postgrest::{Order, PostgrestClient, Query};
use crate::workflow::{
    domain::{Lane, WorkflowEdge, WorkflowNode, WorkflowProcess, WorkflowStep},
    ports::{WorkflowRepository, WorkflowRepositoryError, WorkflowRepositoryResult},
};
use async_trait::async_trait;

const LANES_TABLE: &str = "lanes";
const NODES_TABLE: &str = "workflow_nodes";
const EDGES_TABLE: &str = "workflow_edges";
const PROCESSES_TABLE: &str = "workflow_processes";
const STEPS_TABLE: &str = "workflow_steps";

/// PostgREST-backed workflow repository.
#[derive(Debug, Clone)]
pub struct PostgrestWorkflowRepository {
    client: PostgrestClient,
}

impl PostgrestWorkflowRepository {
    /// Creates a repository over a shared PostgREST client.
    #[must_use]
    pub const fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WorkflowRepository for PostgrestWorkflowRepository {
    async fn lanes(&self) -> WorkflowRepositoryResult<Vec<Lane>> {
        let query = Query::new().select("*").order("sort_order", Order::Asc);
        self.client
            .select(LANES_TABLE, &query)
            .await
            .map_err(WorkflowRepositoryError::persistence)
    }

    async fn nodes(&self) -> WorkflowRepositoryResult<Vec<WorkflowNode>> {
        let query = Query::new().select("*").order("position_x", Order::Asc);
        self.client
            .select(NODES_TABLE, &query)
            .await
            .map_err(WorkflowRepositoryError::persistence)
    }

    async fn edges(&self) -> WorkflowRepositoryResult<Vec<WorkflowEdge>> {
        let query = Query::new().select("*");
        self.client
            .select(EDGES_TABLE, &query)
            .await
            .map_err(WorkflowRepositoryError::persistence)
    }

    async fn processes(&self) -> WorkflowRepositoryResult<Vec<WorkflowProcess>> {
        let query = Query::new().select("*").order("name", Order::Asc);
        self.client
            .select(PROCESSES_TABLE, &query)
            .await
            .map_err(WorkflowRepositoryError::persistence)
    }

    async fn steps(&self) -> WorkflowRepositoryResult<Vec<WorkflowStep>> {
        let query = Query::new().select("*").order("step_order", Order::Asc);
        self.client
            .select(STEPS_TABLE, &query)
            .await
            .map_err(WorkflowRepositoryError::persistence)
    }
}
