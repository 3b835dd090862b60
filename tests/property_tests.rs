//! Property tests over randomly shaped trees.

use minimax_trace::core::{Bound, NodeId};
use minimax_trace::search::minimax;
use minimax_trace::{parse, run, search, SearchConfig, StepKind};
use proptest::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// A child: an integer leaf or a nested node with up to three children.
fn arb_child() -> impl Strategy<Value = String> {
    let leaf = (-50i64..50).prop_map(|v| v.to_string());
    leaf.prop_recursive(4, 48, 3, |inner| {
        ("[A-Z][a-z0-9]{0,2}", prop::collection::vec(inner, 0..4)).prop_map(node_text)
    })
}

/// A whole input: always bracketed at the root.
fn arb_tree() -> impl Strategy<Value = String> {
    ("[A-Z]", prop::collection::vec(arb_child(), 0..4)).prop_map(node_text)
}

fn node_text((name, children): (String, Vec<String>)) -> String {
    if children.is_empty() {
        format!("({name})")
    } else {
        format!("({name} {})", children.join(" "))
    }
}

proptest! {
    /// Parsing then rendering gives back the same text, and that text
    /// parses to the same tree.
    #[test]
    fn round_trip(text in arb_tree()) {
        let tree = parse(&text).unwrap();
        let rendered = tree.to_sexpr();
        prop_assert_eq!(&rendered, &text);
        prop_assert_eq!(parse(&rendered).unwrap(), tree);
    }

    /// Search never changes a literal leaf's static value.
    #[test]
    fn leaf_values_survive(text in arb_tree()) {
        let parsed = parse(&text).unwrap();
        let vis = run(&text).unwrap();

        for node in parsed.iter().filter(|n| n.is_literal) {
            prop_assert_eq!(vis.tree.get(node.id).value, node.value);
        }
    }

    /// Per node, alpha never drops and beta never rises.
    #[test]
    fn bounds_only_tighten(text in arb_tree()) {
        let steps = search(&parse(&text).unwrap()).steps;
        let mut last: FxHashMap<NodeId, (Bound, Bound)> = FxHashMap::default();

        for step in &steps {
            if let Some(&(alpha, beta)) = last.get(&step.node_id) {
                prop_assert!(step.alpha >= alpha, "alpha loosened at {}", step.node_id);
                prop_assert!(step.beta <= beta, "beta loosened at {}", step.node_id);
            }
            last.insert(step.node_id, (step.alpha, step.beta));
        }
    }

    /// Every PRUNE satisfies its own condition, and nothing it names is
    /// visited afterwards.
    #[test]
    fn pruning_is_sound(text in arb_tree()) {
        let steps = search(&parse(&text).unwrap()).steps;
        let mut pruned: FxHashSet<NodeId> = FxHashSet::default();

        for step in &steps {
            match step.kind {
                StepKind::Prune => {
                    prop_assert!(step.beta <= step.alpha);
                    pruned.extend(step.pruned().iter().copied());
                }
                StepKind::Visit => prop_assert!(!pruned.contains(&step.node_id)),
                _ => {}
            }
        }
    }

    /// Alpha-beta returns the exact minimax value.
    #[test]
    fn value_matches_minimax(text in arb_tree(), fallback in -5i64..5) {
        let tree = parse(&text).unwrap();
        let config = SearchConfig::default().with_missing_leaf_value(fallback);
        let outcome = minimax_trace::search_with(&tree, &config);
        prop_assert_eq!(outcome.value, minimax::evaluate(&tree, &config));
    }

    /// The FINAL step carries the search value, and the path starts at the
    /// root and only follows parent→child edges.
    #[test]
    fn final_step_is_consistent(text in arb_tree()) {
        let vis = run(&text).unwrap();
        let last = vis.steps.last().unwrap();

        prop_assert_eq!(last.kind, StepKind::Final);
        prop_assert_eq!(last.value, Some(vis.final_value));

        let path = vis.final_path();
        prop_assert_eq!(path.first().copied(), Some(vis.tree.root()));
        for pair in path.windows(2) {
            prop_assert!(vis.tree.children(pair[0]).contains(&pair[1]));
        }
    }

    /// Two independent parses of the same text produce identical logs.
    #[test]
    fn runs_are_repeatable(text in arb_tree()) {
        prop_assert_eq!(run(&text).unwrap(), run(&text).unwrap());
    }
}
