//! Step log entries.
//!
//! One `VisualizationStep` per observable event. The log is append-only and
//! totally ordered; it is the only record of what the search did.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Bound, NodeId};

/// Event type of a step. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepKind {
    /// Entered a node.
    Visit,
    /// Evaluated a leaf.
    Leaf,
    /// Folded a child's value into a node and tightened its bound.
    Update,
    /// Skipped the remaining children of a node.
    Prune,
    /// Synthetic terminal step, appended once the root resolves.
    Final,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepKind::Visit => "VISIT",
            StepKind::Leaf => "LEAF",
            StepKind::Update => "UPDATE",
            StepKind::Prune => "PRUNE",
            StepKind::Final => "FINAL",
        };
        f.pad(s)
    }
}

/// Ids of pruned siblings, in child order.
pub type PrunedIds = SmallVec<[NodeId; 4]>;

/// One atomic event in the algorithm's execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationStep {
    #[serde(rename = "type")]
    pub kind: StepKind,

    /// Node this event concerns.
    pub node_id: NodeId,

    /// Human-readable description. Not parsed by any consumer.
    pub message: String,

    /// Alpha in effect at this event.
    pub alpha: Bound,

    /// Beta in effect at this event.
    pub beta: Bound,

    /// Set on LEAF, UPDATE and FINAL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    /// Set on PRUNE only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pruned_children: Option<PrunedIds>,

    /// Set on FINAL only: root-first principal variation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_path: Option<Vec<NodeId>>,
}

impl VisualizationStep {
    fn new(kind: StepKind, node_id: NodeId, message: String, alpha: Bound, beta: Bound) -> Self {
        Self {
            kind,
            node_id,
            message,
            alpha,
            beta,
            value: None,
            pruned_children: None,
            final_path: None,
        }
    }

    pub fn visit(node_id: NodeId, message: String, alpha: Bound, beta: Bound) -> Self {
        Self::new(StepKind::Visit, node_id, message, alpha, beta)
    }

    pub fn leaf(node_id: NodeId, message: String, alpha: Bound, beta: Bound, value: i64) -> Self {
        Self {
            value: Some(value),
            ..Self::new(StepKind::Leaf, node_id, message, alpha, beta)
        }
    }

    pub fn update(node_id: NodeId, message: String, alpha: Bound, beta: Bound, value: i64) -> Self {
        Self {
            value: Some(value),
            ..Self::new(StepKind::Update, node_id, message, alpha, beta)
        }
    }

    pub fn prune(
        node_id: NodeId,
        message: String,
        alpha: Bound,
        beta: Bound,
        pruned: PrunedIds,
    ) -> Self {
        Self {
            pruned_children: Some(pruned),
            ..Self::new(StepKind::Prune, node_id, message, alpha, beta)
        }
    }

    /// Terminal summary step. Bounds are always unbounded.
    pub fn final_step(root: NodeId, value: i64, path: Vec<NodeId>) -> Self {
        Self {
            value: Some(value),
            final_path: Some(path),
            ..Self::new(
                StepKind::Final,
                root,
                format!("Algorithm complete. The optimal value is {value}."),
                Bound::NegInfinity,
                Bound::Infinity,
            )
        }
    }

    /// Pruned sibling ids, empty for non-PRUNE steps.
    #[must_use]
    pub fn pruned(&self) -> &[NodeId] {
        self.pruned_children.as_deref().unwrap_or(&[])
    }
}
