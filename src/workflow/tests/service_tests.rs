//! Service tests for the subway-map snapshot.

use std::sync::Arc;

use super::fixtures::{edge, lane, node, process};
use crate::workflow::{
    adapters::memory::InMemoryWorkflowRepository,
    domain::NodeKind,
    services::WorkflowService,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_assembles_graph_lines_and_routes() {
    let owners = lane("Arlo Main", 0);
    let review = lane("Scott", 1);
    let trigger = node("Morning Brief", NodeKind::Cron, Some(owners.id));
    let worker = node("Summarize", NodeKind::Skill, Some(owners.id));
    let link = edge(trigger.id, worker.id);
    let stored = process("Morning Brief");

    let repository = Arc::new(InMemoryWorkflowRepository::new());
    repository.seed(
        vec![review.clone(), owners.clone()],
        vec![trigger.clone(), worker.clone()],
        vec![link.clone()],
        vec![stored.clone()],
        Vec::new(),
    );
    let service = WorkflowService::new(repository);

    let map = service.snapshot().await.expect("snapshot should succeed");

    // Lanes come back in sort order regardless of seed order.
    let lane_names: Vec<&str> = map.lanes.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(lane_names, vec!["Arlo Main", "Scott"]);

    assert_eq!(map.nodes.len(), 2);
    assert_eq!(map.edges.len(), 1);

    let line = map.processes.first().expect("one line");
    assert_eq!(line.name, "Morning Brief");
    assert_eq!(line.start_node_id, Some(trigger.id));
    assert_eq!(line.owner.as_deref(), Some("Arlo Main"));

    let route = map.routes.get(&line.id).expect("route");
    assert_eq!(route.node_ids, vec![trigger.id, worker.id]);
    assert_eq!(route.edge_ids, vec![link.id]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_of_an_empty_graph_is_empty() {
    let service = WorkflowService::new(Arc::new(InMemoryWorkflowRepository::new()));
    let map = service.snapshot().await.expect("snapshot should succeed");

    assert!(map.lanes.is_empty());
    assert!(map.nodes.is_empty());
    assert!(map.processes.is_empty());
    assert!(map.routes.is_empty());
}
