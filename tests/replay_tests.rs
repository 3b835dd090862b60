//! Replay tests: stepping a cursor through a finished run.

use minimax_trace::core::NodeId;
use minimax_trace::{run, StepCursor, StepKind};

const PRUNING: &str = "(A (B (D 3 17) (E 2 12)) (C (F 15) (G (H 0 2) (I 4 6))))";

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn test_cursor_walks_whole_log() {
    let vis = run(PRUNING).unwrap();
    let mut cursor = vis.cursor();
    let mut seen = vec![cursor.current(&vis.steps).unwrap().kind];

    while cursor.forward() {
        seen.push(cursor.current(&vis.steps).unwrap().kind);
    }

    assert_eq!(seen.len(), vis.steps.len());
    assert!(cursor.is_last());
    assert_eq!(seen.last(), Some(&StepKind::Final));
    assert!(!cursor.forward());
}

#[test]
fn test_cursor_back_and_forth() {
    let vis = run(PRUNING).unwrap();
    let mut cursor = vis.cursor();

    assert!(!cursor.back());
    assert!(cursor.seek(10));
    assert!(cursor.back());
    assert_eq!(cursor.index(), 9);
    assert!(!cursor.seek(vis.steps.len()));
    assert_eq!(cursor.index(), 9);

    cursor.reset();
    assert!(cursor.is_first());
}

#[test]
fn test_empty_cursor() {
    let mut cursor = StepCursor::new(0);
    assert!(cursor.is_empty());
    assert!(!cursor.forward());
    assert!(cursor.current(&[]).is_none());
}

// =============================================================================
// Frames
// =============================================================================

#[test]
fn test_pruned_nodes_appear_when_pruned() {
    let vis = run(PRUNING).unwrap();
    let first_prune = vis
        .steps
        .iter()
        .position(|s| s.kind == StepKind::Prune)
        .unwrap();

    let before = vis.frame(first_prune - 1).unwrap();
    assert!(!before.is_pruned(NodeId::new(14)));

    let at = vis.frame(first_prune).unwrap();
    assert!(at.is_pruned(NodeId::new(14)));
    assert!(!at.is_pruned(NodeId::new(17)));
    assert_eq!(at.highlighted(), NodeId::new(12));

    let end = vis.frame(vis.steps.len() - 1).unwrap();
    assert!(end.is_pruned(NodeId::new(14)));
    assert!(end.is_pruned(NodeId::new(17)));
    assert_eq!(end.pruned_count(), 2);
}

#[test]
fn test_subtree_pruning_marks_descendants() {
    // At C, beta drops to 1 below alpha 5, so G and both its leaves go.
    let vis = run("(A (B 5 6) (C 1 (G 7 8)))").unwrap();
    let end = vis.frame(vis.steps.len() - 1).unwrap();

    for raw in [6, 7, 8] {
        assert!(end.is_pruned(NodeId::new(raw)), "node-{raw} should be pruned");
    }
    assert!(!end.is_pruned(NodeId::new(5)));
}

#[test]
fn test_path_only_after_final() {
    let vis = run(PRUNING).unwrap();
    let last = vis.steps.len() - 1;

    for index in 0..last {
        assert!(vis.frame(index).unwrap().final_path().is_empty());
    }

    let end = vis.frame(last).unwrap();
    assert_eq!(end.final_path(), vis.final_path());
    assert!(end.edge_on_path(NodeId::new(1), NodeId::new(5)));
    assert!(!end.edge_on_path(NodeId::new(1), NodeId::new(2)));
    assert!(end.is_on_path(NodeId::new(7)));
}
