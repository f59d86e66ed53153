//! Row builders shared by the workflow tests.

use crate::workflow::domain::{
    EdgeId, Lane, LaneId, NodeId, NodeKind, ProcessId, WorkflowEdge, WorkflowNode,
    WorkflowProcess,
};
use chrono::DateTime;

pub fn lane(name: &str, sort_order: i64) -> Lane {
    Lane {
        id: LaneId::new(),
        name: name.to_owned(),
        color: "#89b4fa".to_owned(),
        sort_order,
    }
}

pub fn node(label: &str, kind: NodeKind, lane_id: Option<LaneId>) -> WorkflowNode {
    WorkflowNode {
        id: NodeId::new(),
        lane_id,
        label: label.to_owned(),
        schedule: None,
        description: None,
        node_type: kind,
        position_x: None,
        position_y: None,
    }
}

pub fn edge(source: NodeId, target: NodeId) -> WorkflowEdge {
    WorkflowEdge {
        id: EdgeId::new(),
        source_id: source,
        target_id: target,
        label: None,
    }
}

pub fn process(name: &str) -> WorkflowProcess {
    WorkflowProcess {
        id: ProcessId::new(),
        name: name.to_owned(),
        description: None,
        trigger_type: None,
        color: None,
        schedule: None,
        owner: None,
        status: None,
        created_at: DateTime::UNIX_EPOCH,
    }
}
