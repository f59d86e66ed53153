//! Domain model for the workflow graph.

mod graph;
mod ids;
mod process;
mod routes;

pub use graph::{
    Lane, NodeKind, ParseNodeKindError, ParseStepKindError, StepKind, WorkflowEdge, WorkflowNode,
    WorkflowStep,
};
pub use ids::{EdgeId, LaneId, NodeId, ProcessId, StepId};
pub use process::{
    PALETTE, ParseProcessStatusError, ParseTriggerKindError, ProcessLine, ProcessStatus,
    TriggerKind, WorkflowProcess, build_process_lines,
};
pub use routes::{ProcessRoute, derive_routes};
