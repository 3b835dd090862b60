//! Search statistics derived from a step log.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::step::{StepKind, VisualizationStep};
use crate::core::GameTree;

/// Counts collected by replaying a step log against its tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// VISIT steps (nodes entered).
    pub nodes_visited: usize,

    /// LEAF steps (static evaluations).
    pub leaves_evaluated: usize,

    /// UPDATE steps.
    pub bound_updates: usize,

    /// PRUNE steps, including ones that skipped nothing.
    pub prune_events: usize,

    /// Nodes never entered because they or an ancestor were pruned.
    pub nodes_pruned: usize,

    /// Total nodes in the tree.
    pub tree_size: usize,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a step log. Pruned children count with their whole subtree.
    #[must_use]
    pub fn from_steps(tree: &GameTree, steps: &[VisualizationStep]) -> Self {
        let mut stats = Self {
            tree_size: tree.len(),
            ..Self::default()
        };
        let mut pruned = FxHashSet::default();

        for step in steps {
            match step.kind {
                StepKind::Visit => stats.nodes_visited += 1,
                StepKind::Leaf => stats.leaves_evaluated += 1,
                StepKind::Update => stats.bound_updates += 1,
                StepKind::Prune => {
                    stats.prune_events += 1;
                    for &id in step.pruned() {
                        if tree.try_get(id).is_some() {
                            pruned.extend(tree.subtree(id));
                        }
                    }
                }
                StepKind::Final => {}
            }
        }

        stats.nodes_pruned = pruned.len();
        stats
    }

    /// Share of nodes skipped: `pruned / (visited + pruned)`.
    #[must_use]
    pub fn pruning_efficiency(&self) -> f64 {
        let total = self.nodes_visited + self.nodes_pruned;
        if total == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / total as f64
        }
    }

    /// Nodes a plain minimax would have entered but this search did not.
    #[must_use]
    pub fn nodes_saved(&self) -> usize {
        self.tree_size.saturating_sub(self.nodes_visited)
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "visited {}/{} nodes, {} leaves evaluated, {} pruned ({:.1}%)",
            self.nodes_visited,
            self.tree_size,
            self.leaves_evaluated,
            self.nodes_pruned,
            self.pruning_efficiency() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::search::engine::search;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.pruning_efficiency(), 0.0);
    }

    #[test]
    fn test_no_pruning() {
        let tree = parse("(A (B 3 5) (C 6))").unwrap();
        let outcome = search(&tree);
        let stats = SearchStats::from_steps(&tree, &outcome.steps);

        assert_eq!(stats.nodes_visited, 6);
        assert_eq!(stats.leaves_evaluated, 3);
        assert_eq!(stats.bound_updates, 5);
        assert_eq!(stats.prune_events, 0);
        assert_eq!(stats.nodes_pruned, 0);
        assert_eq!(stats.nodes_saved(), 0);
    }

    #[test]
    fn test_pruned_subtrees_count_fully() {
        // B prunes (C 1 2) after seeing 1, skipping three nodes.
        let tree = parse("(A (X 5) (B 1 (C 1 2)))").unwrap();
        let outcome = search(&tree);
        let stats = SearchStats::from_steps(&tree, &outcome.steps);

        assert_eq!(stats.prune_events, 1);
        assert_eq!(stats.nodes_pruned, 3);
        assert_eq!(stats.nodes_visited, 5);
        assert_eq!(stats.nodes_saved(), 3);
        assert!((stats.pruning_efficiency() - 3.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let tree = parse("(A 1 2)").unwrap();
        let stats = SearchStats::from_steps(&tree, &search(&tree).steps);
        assert_eq!(stats.to_string(), "visited 3/3 nodes, 2 leaves evaluated, 0 pruned (0.0%)");
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.nodes_visited, deserialized.nodes_visited);
    }
}
