//! Plain minimax without pruning.
//!
//! Visits every node. Used as the reference the pruned search is checked
//! against.

use super::config::SearchConfig;
use crate::core::{GameTree, NodeId, Role};

/// Exact minimax value of the root.
#[must_use]
pub fn evaluate(tree: &GameTree, config: &SearchConfig) -> i64 {
    if tree.is_empty() {
        return config.missing_leaf_value;
    }
    resolve(tree, config)[tree.root().index()]
}

/// Exact minimax value of every node, indexed by `NodeId`.
///
/// Children always carry larger ids than their parent, so one reverse pass
/// over the arena resolves every node after all of its children.
#[must_use]
pub fn resolve(tree: &GameTree, config: &SearchConfig) -> Vec<i64> {
    let mut values = vec![0; tree.len()];

    for node in tree.iter().rev() {
        values[node.id.index()] = if node.is_leaf() {
            node.value.unwrap_or(config.missing_leaf_value)
        } else {
            best_child(node.role(), &node.children, &values)
        };
    }

    values
}

fn best_child(role: Role, children: &[NodeId], values: &[i64]) -> i64 {
    children
        .iter()
        .fold(None, |best, &child| Some(role.fold(best, values[child.index()])))
        .unwrap_or_default()
}
