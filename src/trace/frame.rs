//! What a presentation layer should show at one cursor position.

use rustc_hash::FxHashSet;

use crate::core::{GameTree, NodeId};
use crate::search::{StepKind, VisualizationStep};

/// Derived view of the log at a single step.
///
/// Built by replaying `steps[..=index]`; nothing here is stored on the tree.
#[derive(Clone, Debug)]
pub struct ReplayFrame<'a> {
    /// Cursor position this frame was built for.
    pub index: usize,

    /// Step under the cursor.
    pub step: &'a VisualizationStep,

    /// Every node pruned so far, with all of its descendants.
    pruned: FxHashSet<NodeId>,

    /// Principal variation, empty until the FINAL step is reached.
    final_path: &'a [NodeId],
}

impl<'a> ReplayFrame<'a> {
    /// Build the frame at `index`, or `None` if it is out of range.
    #[must_use]
    pub fn at(tree: &GameTree, steps: &'a [VisualizationStep], index: usize) -> Option<Self> {
        let step = steps.get(index)?;
        let seen = &steps[..=index];

        let mut pruned = FxHashSet::default();
        for prune in seen.iter().filter(|s| s.kind == StepKind::Prune) {
            for &id in prune.pruned() {
                if tree.try_get(id).is_some() {
                    pruned.extend(tree.subtree(id));
                }
            }
        }

        let final_path = seen
            .iter()
            .rev()
            .find(|s| s.kind == StepKind::Final)
            .and_then(|s| s.final_path.as_deref())
            .unwrap_or(&[]);

        Some(Self {
            index,
            step,
            pruned,
            final_path,
        })
    }

    /// Node the current step concerns.
    #[must_use]
    pub fn highlighted(&self) -> NodeId {
        self.step.node_id
    }

    #[must_use]
    pub fn is_pruned(&self, id: NodeId) -> bool {
        self.pruned.contains(&id)
    }

    /// Number of visually pruned nodes.
    #[must_use]
    pub fn pruned_count(&self) -> usize {
        self.pruned.len()
    }

    #[must_use]
    pub fn final_path(&self) -> &'a [NodeId] {
        self.final_path
    }

    #[must_use]
    pub fn is_on_path(&self, id: NodeId) -> bool {
        self.final_path.contains(&id)
    }

    /// Whether the parent→child edge is a consecutive pair on the path.
    #[must_use]
    pub fn edge_on_path(&self, parent: NodeId, child: NodeId) -> bool {
        self.final_path
            .windows(2)
            .any(|pair| pair[0] == parent && pair[1] == child)
    }
}
