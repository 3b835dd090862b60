//! Instrumented minimax with alpha-beta pruning.
//!
//! Explicit MAX/MIN formulation: the root maximizes and roles alternate by
//! depth. Children are searched depth-first, left to right. Every event is
//! appended to the step log in the order it happens.

use tracing::{debug, info};

use super::config::SearchConfig;
use super::step::{PrunedIds, VisualizationStep};
use crate::core::{Bound, GameTree, NodeId, Role};

/// Result of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Value returned by the root call.
    pub value: i64,

    /// Every step emitted, in emission order. Contains no FINAL step.
    pub steps: Vec<VisualizationStep>,
}

/// Run alpha-beta over `tree` with the default config.
#[must_use]
pub fn search(tree: &GameTree) -> SearchOutcome {
    search_with(tree, &SearchConfig::default())
}

/// Run alpha-beta over `tree`.
///
/// Never fails: a childless node always ends the descent, and one without a
/// value scores `config.missing_leaf_value`.
#[must_use]
pub fn search_with(tree: &GameTree, config: &SearchConfig) -> SearchOutcome {
    if tree.is_empty() {
        return SearchOutcome {
            value: config.missing_leaf_value,
            steps: Vec::new(),
        };
    }

    let mut search = AlphaBeta {
        tree,
        config,
        steps: Vec::with_capacity(tree.len() * 2),
    };
    let value = search.run();
    info!(value, steps = search.steps.len(), nodes = tree.len(), "search complete");

    SearchOutcome {
        value,
        steps: search.steps,
    }
}

/// An internal node whose children are being scanned.
#[derive(Clone, Copy, Debug)]
struct Frame {
    id: NodeId,
    role: Role,
    alpha: Bound,
    beta: Bound,
    /// Running value; `None` is the role's starting infinity.
    best: Option<i64>,
    /// Index of the next child to search.
    next: usize,
    /// Set once the remaining children have been pruned.
    cut: bool,
}

struct AlphaBeta<'a> {
    tree: &'a GameTree,
    config: &'a SearchConfig,
    steps: Vec<VisualizationStep>,
}

impl<'a> AlphaBeta<'a> {
    /// Depth-first, left-to-right search driven by an explicit frame stack,
    /// so tree depth is limited only by memory.
    fn run(&mut self) -> i64 {
        let tree = self.tree;
        let mut stack: Vec<Frame> = Vec::new();
        let mut returned = self.enter(
            tree.root(),
            Bound::NegInfinity,
            Bound::Infinity,
            Role::Max,
            &mut stack,
        );

        while let Some(top) = stack.len().checked_sub(1) {
            if let Some(evaluation) = returned.take() {
                self.fold(&mut stack[top], evaluation);
            }

            let frame = stack[top];
            let children = tree.children(frame.id);
            if !frame.cut && frame.next < children.len() {
                let child = children[frame.next];
                stack[top].next += 1;
                returned = self.enter(
                    child,
                    frame.alpha,
                    frame.beta,
                    frame.role.opponent(),
                    &mut stack,
                );
            } else {
                stack.pop();
                returned = Some(frame.best.unwrap_or(self.config.missing_leaf_value));
            }
        }

        returned.unwrap_or(self.config.missing_leaf_value)
    }

    /// Record the visit. Leaves resolve immediately; internal nodes get a
    /// frame and resolve once their children are done.
    fn enter(
        &mut self,
        id: NodeId,
        alpha: Bound,
        beta: Bound,
        role: Role,
        stack: &mut Vec<Frame>,
    ) -> Option<i64> {
        let node = self.tree.get(id);

        self.steps.push(VisualizationStep::visit(
            id,
            format!("Visiting {role} node {}. α={alpha}, β={beta}", node.name),
            alpha,
            beta,
        ));

        if node.is_leaf() {
            let value = node.value.unwrap_or(self.config.missing_leaf_value);
            self.steps.push(VisualizationStep::leaf(
                id,
                format!("Terminal node {} reached. Value: {value}.", node.name),
                alpha,
                beta,
                value,
            ));
            return Some(value);
        }

        stack.push(Frame {
            id,
            role,
            alpha,
            beta,
            best: None,
            next: 0,
            cut: false,
        });
        None
    }

    /// Fold the value of the child just searched into `frame`, then test
    /// the cutoff.
    fn fold(&mut self, frame: &mut Frame, evaluation: i64) {
        let tree = self.tree;
        let node = tree.get(frame.id);
        let child = node.children[frame.next - 1];
        let running = frame.role.fold(frame.best, evaluation);
        frame.best = Some(running);

        let child_name = &tree.get(child).name;
        let message = match frame.role {
            Role::Max => {
                let old = frame.alpha;
                frame.alpha = frame.alpha.max(Bound::Finite(running));
                format!(
                    "MAX node {} receives {evaluation} from {child_name}. New value={running}. α updated from {old} to {}.",
                    node.name, frame.alpha
                )
            }
            Role::Min => {
                let old = frame.beta;
                frame.beta = frame.beta.min(Bound::Finite(running));
                format!(
                    "MIN node {} receives {evaluation} from {child_name}. New value={running}. β updated from {old} to {}.",
                    node.name, frame.beta
                )
            }
        };
        let (alpha, beta) = (frame.alpha, frame.beta);
        self.steps
            .push(VisualizationStep::update(frame.id, message, alpha, beta, running));

        if beta <= alpha {
            let pruned: PrunedIds = node.children[frame.next..].iter().copied().collect();
            debug!(node = %frame.id, name = %node.name, %alpha, %beta, pruned = pruned.len(), "pruning");
            self.steps.push(VisualizationStep::prune(
                frame.id,
                format!(
                    "PRUNING! β({beta}) ≤ α({alpha}) at node {}. Pruning remaining children.",
                    node.name
                ),
                alpha,
                beta,
                pruned,
            ));
            frame.cut = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::search::step::StepKind;

    fn kinds(steps: &[VisualizationStep]) -> Vec<StepKind> {
        steps.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_single_level() {
        let tree = parse("(A 3 5)").unwrap();
        let outcome = search(&tree);

        assert_eq!(outcome.value, 5);
        assert_eq!(
            kinds(&outcome.steps),
            vec![
                StepKind::Visit,
                StepKind::Visit,
                StepKind::Leaf,
                StepKind::Update,
                StepKind::Visit,
                StepKind::Leaf,
                StepKind::Update,
            ]
        );
    }

    #[test]
    fn test_messages() {
        let tree = parse("(A 3 5)").unwrap();
        let steps = search(&tree).steps;

        assert_eq!(steps[0].message, "Visiting MAX node A. α=-∞, β=+∞");
        assert_eq!(steps[1].message, "Visiting MIN node 3. α=-∞, β=+∞");
        assert_eq!(steps[2].message, "Terminal node 3 reached. Value: 3.");
        assert_eq!(
            steps[3].message,
            "MAX node A receives 3 from 3. New value=3. α updated from -∞ to 3."
        );
    }

    #[test]
    fn test_visit_records_entry_bounds() {
        let tree = parse("(A (B 3 5) (C 6))").unwrap();
        let steps = search(&tree).steps;

        let visit_c = steps
            .iter()
            .find(|s| s.kind == StepKind::Visit && s.node_id == NodeId::new(4))
            .unwrap();
        assert_eq!(visit_c.alpha, Bound::Finite(3));
        assert_eq!(visit_c.beta, Bound::Infinity);
    }

    #[test]
    fn test_update_values() {
        let tree = parse("(A (B 3 5) (C 6))").unwrap();
        let steps = search(&tree).steps;

        let b_updates: Vec<_> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Update && s.node_id == NodeId::new(1))
            .map(|s| (s.value, s.beta))
            .collect();
        assert_eq!(
            b_updates,
            vec![(Some(3), Bound::Finite(3)), (Some(3), Bound::Finite(3))]
        );
    }

    #[test]
    fn test_prune_stops_iteration() {
        // MIN node B sees 1 after alpha=5 from the first branch.
        let tree = parse("(A (X 5) (B 1 100 200))").unwrap();
        let outcome = search(&tree);

        assert_eq!(outcome.value, 5);
        let prune = outcome
            .steps
            .iter()
            .find(|s| s.kind == StepKind::Prune)
            .unwrap();
        assert_eq!(prune.node_id, NodeId::new(3));
        assert_eq!(prune.pruned(), &[NodeId::new(5), NodeId::new(6)]);
        assert!(prune.beta <= prune.alpha);

        // Neither pruned leaf was visited.
        assert!(!outcome
            .steps
            .iter()
            .any(|s| s.kind == StepKind::Visit && s.node_id.raw() >= 5));
    }

    #[test]
    fn test_prune_on_last_child_lists_nothing() {
        let tree = parse("(A (X 5) (B 7 1))").unwrap();
        let outcome = search(&tree);
        let prune = outcome
            .steps
            .iter()
            .find(|s| s.kind == StepKind::Prune)
            .unwrap();
        assert!(prune.pruned().is_empty());
        assert_eq!(outcome.value, 5);
    }

    #[test]
    fn test_ties_keep_first_value() {
        let tree = parse("(A 4 4)").unwrap();
        let steps = search(&tree).steps;
        let last = steps.last().unwrap();
        assert_eq!(last.value, Some(4));
        assert_eq!(last.alpha, Bound::Finite(4));
    }

    #[test]
    fn test_valueless_leaf_uses_fallback() {
        let tree = parse("(A (B) 3)").unwrap();
        assert_eq!(search(&tree).value, 3);

        let config = SearchConfig::default().with_missing_leaf_value(10);
        assert_eq!(search_with(&tree, &config).value, 10);
    }

    #[test]
    fn test_root_only() {
        let tree = parse("(A)").unwrap();
        let outcome = search(&tree);
        assert_eq!(outcome.value, 0);
        assert_eq!(kinds(&outcome.steps), vec![StepKind::Visit, StepKind::Leaf]);
    }

    #[test]
    fn test_deep_chain() {
        // Bracketed nodes at depths 0..=59_999 over a single leaf.
        let levels = 60_000;
        let text = format!("{}7{}", "(N ".repeat(levels), ")".repeat(levels));
        let config = crate::parser::ParseConfig::default().with_max_depth(0);
        let tree = crate::parser::parse_with(&text, &config).unwrap();

        let outcome = search(&tree);
        assert_eq!(outcome.value, 7);
        // VISIT per node, one LEAF, one UPDATE per bracketed node.
        assert_eq!(outcome.steps.len(), (levels + 1) + 1 + levels);
    }

    #[test]
    fn test_empty_tree() {
        let outcome = search(&GameTree::new());
        assert_eq!(outcome.value, 0);
        assert!(outcome.steps.is_empty());
    }
}
