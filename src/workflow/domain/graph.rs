//! Graph row mirrors: lanes, nodes, edges, steps.

use super::{EdgeId, LaneId, NodeId, StepId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How a workflow node is triggered or what it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Fires on a schedule.
    Cron,
    /// An automation skill invoked by another node.
    Skill,
    /// Kicked off by a person.
    Manual,
    /// An external system outside our control.
    External,
}

impl NodeKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cron => "cron",
            Self::Skill => "skill",
            Self::Manual => "manual",
            Self::External => "external",
        }
    }

    /// True when nodes of this kind anchor a process: scheduled and manual
    /// entry points start subway lines, skills and externals do not.
    #[must_use]
    pub const fn starts_process(self) -> bool {
        matches!(self, Self::Cron | Self::Manual)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NodeKind {
    type Error = ParseNodeKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "cron" => Ok(Self::Cron),
            "skill" => Ok(Self::Skill),
            "manual" => Ok(Self::Manual),
            "external" => Ok(Self::External),
            _ => Err(ParseNodeKindError(value.to_owned())),
        }
    }
}

/// Error returned while parsing node kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown node type: {0}")]
pub struct ParseNodeKindError(pub String);

/// The role a step plays within a node's runbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// What kicks the node off.
    Trigger,
    /// A processing step.
    Process,
    /// A branch point.
    Decision,
    /// Produced output.
    Output,
    /// Delivery to its destination.
    Delivery,
}

impl StepKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Output => "output",
            Self::Delivery => "delivery",
        }
    }
}

impl TryFrom<&str> for StepKind {
    type Error = ParseStepKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "trigger" => Ok(Self::Trigger),
            "process" => Ok(Self::Process),
            "decision" => Ok(Self::Decision),
            "output" => Ok(Self::Output),
            "delivery" => Ok(Self::Delivery),
            _ => Err(ParseStepKindError(value.to_owned())),
        }
    }
}

/// Error returned while parsing step kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown step type: {0}")]
pub struct ParseStepKindError(pub String);

/// A horizontal owner/category grouping on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// Row identifier.
    pub id: LaneId,
    /// Lane display name.
    pub name: String,
    /// Lane accent colour.
    pub color: String,
    /// Position among lanes, low to high.
    pub sort_order: i64,
}

/// A workflow node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Row identifier.
    pub id: NodeId,
    /// Owning lane, when assigned.
    pub lane_id: Option<LaneId>,
    /// Display label; process rows are matched against it by name.
    pub label: String,
    /// Human-readable schedule for scheduled nodes.
    pub schedule: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Node kind.
    pub node_type: NodeKind,
    /// Stored canvas position.
    pub position_x: Option<f64>,
    /// Stored canvas position.
    pub position_y: Option<f64>,
}

/// An edge between two workflow nodes. Stored with a direction, but
/// traversal treats adjacency as undirected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    /// Row identifier.
    pub id: EdgeId,
    /// Stored source node.
    pub source_id: NodeId,
    /// Stored target node.
    pub target_id: NodeId,
    /// Optional edge label.
    pub label: Option<String>,
}

impl WorkflowEdge {
    /// Returns the endpoint opposite `node`, when `node` is an endpoint.
    #[must_use]
    pub fn other_endpoint(&self, node: NodeId) -> Option<NodeId> {
        if self.source_id == node {
            Some(self.target_id)
        } else if self.target_id == node {
            Some(self.source_id)
        } else {
            None
        }
    }
}

/// One step of a node's runbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Row identifier.
    pub id: StepId,
    /// Node the step belongs to.
    pub workflow_node_id: NodeId,
    /// Position within the node's runbook, low to high.
    pub step_order: i64,
    /// Step display label.
    pub label: String,
    /// Longer description.
    pub description: Option<String>,
    /// Who or what performs the step.
    pub actor: Option<String>,
    /// Step role.
    pub step_type: StepKind,
}
