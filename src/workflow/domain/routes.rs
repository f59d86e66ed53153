//! Breadth-first route derivation per process.

use super::{EdgeId, NodeId, ProcessId, ProcessLine, WorkflowEdge, WorkflowNode};
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

/// The nodes and edges one process's line covers, with each node's
/// breadth-first distance from the start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessRoute {
    /// Covered nodes in discovery order, the start node first.
    pub node_ids: Vec<NodeId>,
    /// Covered edges in discovery order.
    pub edge_ids: Vec<EdgeId>,
    /// Breadth-first hop count from the start node.
    pub distances: HashMap<NodeId, u32>,
}

impl ProcessRoute {
    /// True when the route covers the node.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.distances.contains_key(&node)
    }

    /// Orients an edge for left-to-right layout: from the endpoint nearer
    /// the start to the farther one. Edges with an unknown endpoint keep
    /// their stored orientation.
    #[must_use]
    pub fn oriented(&self, edge: &WorkflowEdge) -> (NodeId, NodeId) {
        match (
            self.distances.get(&edge.source_id),
            self.distances.get(&edge.target_id),
        ) {
            (Some(source_distance), Some(target_distance))
                if source_distance > target_distance =>
            {
                (edge.target_id, edge.source_id)
            }
            _ => (edge.source_id, edge.target_id),
        }
    }
}

/// Derives each line's route by breadth-first traversal over undirected
/// adjacency from its start node.
///
/// A neighbour that is another line's start node is never entered and the
/// edge to it is not recorded, so lines stay disjoint at their anchors
/// while still sharing interior nodes. Lines without a resolvable start
/// node get an empty route. The walk is deterministic in the input order
/// of nodes and edges, so the same graph always yields the same routes.
#[must_use]
pub fn derive_routes(
    lines: &[ProcessLine],
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
) -> HashMap<ProcessId, ProcessRoute> {
    let known_nodes: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();

    let mut adjacency: HashMap<NodeId, Vec<&WorkflowEdge>> = HashMap::new();
    for edge in edges {
        adjacency.entry(edge.source_id).or_default().push(edge);
        adjacency.entry(edge.target_id).or_default().push(edge);
    }

    let start_ids: HashSet<NodeId> = lines
        .iter()
        .filter_map(|line| line.start_node_id)
        .collect();

    let mut routes = HashMap::new();
    for line in lines {
        let route = match line.start_node_id {
            Some(start) if known_nodes.contains(&start) => {
                walk(start, &adjacency, &start_ids)
            }
            _ => ProcessRoute::default(),
        };
        routes.insert(line.id, route);
    }
    routes
}

fn walk(
    start: NodeId,
    adjacency: &HashMap<NodeId, Vec<&WorkflowEdge>>,
    start_ids: &HashSet<NodeId>,
) -> ProcessRoute {
    let mut route = ProcessRoute {
        node_ids: vec![start],
        edge_ids: Vec::new(),
        distances: HashMap::from([(start, 0)]),
    };
    let mut seen_edges: HashSet<EdgeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let current_distance = route.distances.get(&current).copied().unwrap_or(0);
        let Some(next_edges) = adjacency.get(&current) else {
            continue;
        };

        for edge in next_edges {
            let Some(next) = edge.other_endpoint(current) else {
                continue;
            };
            // Another line's anchor ends this one; do not cross into it.
            if start_ids.contains(&next) && next != start {
                continue;
            }
            if seen_edges.insert(edge.id) {
                route.edge_ids.push(edge.id);
            }
            if !route.distances.contains_key(&next) {
                route.distances.insert(next, current_distance + 1);
                route.node_ids.push(next);
                queue.push_back(next);
            }
        }
    }

    route
}
