//! Post-hoc reconstruction of node values and the principal variation.
//!
//! Works purely from the step log: values come from the last LEAF/UPDATE
//! step per node, the path is found by matching values downwards from the
//! root. Where pruning destroyed the exact value, the path falls back to
//! the best defined child for the side to move. That fallback is a
//! heuristic; nothing stronger exists without an unpruned search.

use rustc_hash::FxHashMap;

use crate::core::{GameTree, NodeId, Role};
use crate::search::{StepKind, VisualizationStep};

/// Assign every node the last value the log recorded for it.
///
/// Nodes the log never valued (fully pruned subtrees) keep whatever they
/// had: static values on literal leaves, nothing on internal nodes.
pub fn assign_values(tree: &mut GameTree, steps: &[VisualizationStep]) {
    let mut resolved: FxHashMap<NodeId, i64> = FxHashMap::default();
    for step in steps {
        if matches!(step.kind, StepKind::Leaf | StepKind::Update) {
            if let Some(value) = step.value {
                resolved.insert(step.node_id, value);
            }
        }
    }

    for node in tree.iter_mut() {
        if let Some(&value) = resolved.get(&node.id) {
            node.value = Some(value);
        }
    }
}

/// Root-first path of node ids along the principal variation.
///
/// At each node, descend to the first child whose value equals the node's
/// own value. Both roles match exactly; only the fallback is role-aware:
/// the maximum defined child under MAX, the minimum under MIN, first one on
/// ties. Stops at a leaf or when no child has a value.
#[must_use]
pub fn optimal_path(tree: &GameTree) -> Vec<NodeId> {
    if tree.is_empty() {
        return Vec::new();
    }

    let mut current = tree.root();
    let mut role = Role::Max;
    let mut path = vec![current];

    loop {
        let node = tree.get(current);
        if node.is_leaf() {
            break;
        }

        let exact = node.value.and_then(|target| {
            node.children
                .iter()
                .copied()
                .find(|&child| tree.get(child).value == Some(target))
        });

        match exact.or_else(|| best_defined_child(tree, &node.children, role)) {
            Some(next) => {
                path.push(next);
                current = next;
                role = role.opponent();
            }
            None => break,
        }
    }

    path
}

fn best_defined_child(tree: &GameTree, children: &[NodeId], role: Role) -> Option<NodeId> {
    let mut best: Option<(NodeId, i64)> = None;
    for &child in children {
        let Some(value) = tree.get(child).value else {
            continue;
        };
        match best {
            Some((_, incumbent)) if !role.prefers(value, incumbent) => {}
            _ => best = Some((child, value)),
        }
    }
    best.map(|(id, _)| id)
}

/// Fill in node values, compute the optimal path and append the FINAL step.
///
/// Returns the path. An empty tree gets neither a path nor a FINAL step.
pub fn reconstruct(tree: &mut GameTree, steps: &mut Vec<VisualizationStep>) -> Vec<NodeId> {
    if tree.is_empty() {
        return Vec::new();
    }

    assign_values(tree, steps);
    let path = optimal_path(tree);
    let root = tree.root();
    let value = tree.get(root).value.unwrap_or_default();
    steps.push(VisualizationStep::final_step(root, value, path.clone()));

    path
}
