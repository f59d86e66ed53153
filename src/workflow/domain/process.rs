//! Processes ("subway lines") and their derivation from the graph.

use super::{Lane, LaneId, NodeId, ProcessId, WorkflowNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Line colours cycled through when a process has none stored.
pub const PALETTE: [&str; 7] = [
    "#f9e2af", "#a6e3a1", "#89b4fa", "#cba6f7", "#f38ba8", "#94e2d5", "#fab387",
];

/// What kicks a process off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Runs on a schedule.
    Time,
    /// Reacts to an event.
    Event,
    /// Fires when a condition holds.
    Condition,
    /// Started by a person.
    Manual,
}

impl TriggerKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Event => "event",
            Self::Condition => "condition",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TriggerKind {
    type Error = ParseTriggerKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "time" => Ok(Self::Time),
            "event" => Ok(Self::Event),
            "condition" => Ok(Self::Condition),
            "manual" => Ok(Self::Manual),
            _ => Err(ParseTriggerKindError(value.to_owned())),
        }
    }
}

/// Error returned while parsing trigger kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown trigger type: {0}")]
pub struct ParseTriggerKindError(pub String);

/// Operational state of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Running as intended.
    Active,
    /// Switched off.
    Disabled,
    /// Last run failed.
    Error,
}

impl ProcessStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
            Self::Error => "error",
        }
    }
}

impl TryFrom<&str> for ProcessStatus {
    type Error = ParseProcessStatusError;

    fn try_from(value: &str) -> Result<Self, <Self as TryFrom<&str>>::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            "error" => Ok(Self::Error),
            _ => Err(ParseProcessStatusError(value.to_owned())),
        }
    }
}

/// Error returned while parsing process statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown process status: {0}")]
pub struct ParseProcessStatusError(pub String);

/// A process row as mirrored from the backend `workflow_processes` table.
/// Presentation fields are nullable; [`build_process_lines`] fills the
/// gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowProcess {
    /// Row identifier.
    pub id: ProcessId,
    /// Process name; matched against node labels to find the start node.
    pub name: String,
    /// Longer description.
    pub description: Option<String>,
    /// What kicks the process off.
    pub trigger_type: Option<TriggerKind>,
    /// Line colour on the map.
    pub color: Option<String>,
    /// Human-readable schedule.
    pub schedule: Option<String>,
    /// Owner display name.
    pub owner: Option<String>,
    /// Operational state.
    pub status: Option<ProcessStatus>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

/// A process decorated with every display fallback resolved and its start
/// node attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessLine {
    /// Process identifier (the start node's id for derived lines).
    pub id: ProcessId,
    /// Process name.
    pub name: String,
    /// Longer description.
    pub description: Option<String>,
    /// What kicks the process off.
    pub trigger_type: TriggerKind,
    /// Line colour on the map.
    pub color: String,
    /// Human-readable schedule.
    pub schedule: Option<String>,
    /// Owner display name.
    pub owner: Option<String>,
    /// Operational state.
    pub status: ProcessStatus,
    /// Row creation time (the epoch for derived lines).
    pub created_at: DateTime<Utc>,
    /// Node the line starts from, when one resolves.
    pub start_node_id: Option<NodeId>,
}

/// Builds the display lines for the subway map.
///
/// With no stored processes, one line is derived per start-candidate node
/// (cron and manual nodes), cycling the palette for colours. With stored
/// processes, each is decorated with fallbacks: palette colour, schedule
/// from the matching node, owner from that node's lane. Start nodes are
/// matched by process name against node labels.
#[must_use]
pub fn build_process_lines(
    processes: &[WorkflowProcess],
    nodes: &[WorkflowNode],
    lanes: &[Lane],
) -> Vec<ProcessLine> {
    let lane_by_id: HashMap<LaneId, &Lane> = lanes.iter().map(|lane| (lane.id, lane)).collect();
    let node_by_label: HashMap<&str, &WorkflowNode> = nodes
        .iter()
        .map(|node| (node.label.as_str(), node))
        .collect();
    let lane_owner = |node: Option<&&WorkflowNode>| -> Option<String> {
        node.and_then(|found| found.lane_id)
            .and_then(|lane_id| lane_by_id.get(&lane_id))
            .map(|lane| lane.name.clone())
    };

    if processes.is_empty() {
        return nodes
            .iter()
            .filter(|node| node.node_type.starts_process())
            .enumerate()
            .map(|(index, node)| ProcessLine {
                id: ProcessId::from_uuid(node.id.into_inner()),
                name: node.label.clone(),
                description: node.description.clone(),
                trigger_type: if node.node_type == super::NodeKind::Manual {
                    TriggerKind::Manual
                } else {
                    TriggerKind::Time
                },
                color: palette_color(index),
                schedule: node.schedule.clone(),
                owner: lane_owner(Some(&node)),
                status: ProcessStatus::Active,
                created_at: DateTime::UNIX_EPOCH,
                start_node_id: Some(node.id),
            })
            .collect();
    }

    processes
        .iter()
        .enumerate()
        .map(|(index, process)| {
            let node_match = node_by_label.get(process.name.as_str());
            ProcessLine {
                id: process.id,
                name: process.name.clone(),
                description: process.description.clone(),
                trigger_type: process.trigger_type.unwrap_or(TriggerKind::Time),
                color: process
                    .color
                    .clone()
                    .filter(|color| !color.is_empty())
                    .unwrap_or_else(|| palette_color(index)),
                schedule: process
                    .schedule
                    .clone()
                    .or_else(|| node_match.and_then(|node| node.schedule.clone())),
                owner: process.owner.clone().or_else(|| lane_owner(node_match)),
                status: process.status.unwrap_or(ProcessStatus::Active),
                created_at: process.created_at,
                start_node_id: node_match.map(|node| node.id),
            }
        })
        .collect()
}

fn palette_color(index: usize) -> String {
    PALETTE
        .get(index % PALETTE.len())
        .copied()
        .unwrap_or("#7c7f93")
        .to_owned()
}
