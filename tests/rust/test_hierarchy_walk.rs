use super::*;
use crate::hierarchy::build_tree;
use crate::readers::json::rows_from_value;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn tree(value: Value) -> FlowTree {
    build_tree(&rows_from_value(&value).unwrap())
}

/// `N0 <- N1 <- ... <- N(n-1)`, one account per level.
fn deep_chain(n: usize) -> FlowTree {
    let rows: Vec<Value> = (0..n)
        .map(|i| {
            if i == 0 {
                json!({"AccountNo": "N0", "Layer": 0})
            } else {
                json!({"AccountNo": format!("N{}", i), "Layer": 1, "parent_acc_no": format!("N{}", i - 1)})
            }
        })
        .collect();
    tree(Value::Array(rows))
}

/// Compact trace: `+id@depth`, `*id@depth` for cycles, `-id` on leave.
fn trace(tree: &FlowTree) -> Vec<String> {
    tree.walk()
        .map(|event| match event {
            WalkEvent::Enter { idx, depth, .. } => format!("+{}@{}", tree.node(idx).id, depth),
            WalkEvent::Cycle { idx, depth, .. } => format!("*{}@{}", tree.node(idx).id, depth),
            WalkEvent::Leave { idx } => format!("-{}", tree.node(idx).id),
        })
        .collect()
}

#[test]
fn test_walk_chain() {
    let t = tree(json!([
        {"AccountNo": "A1", "Layer": 1},
        {"AccountNo": "A2", "Layer": 1, "parent_acc_no": "A1"},
        {"AccountNo": "A3", "Layer": 2, "parent_acc_no": "A2"}
    ]));
    assert_eq!(trace(&t), vec!["+A1@0", "+A2@1", "+A3@2", "-A3", "-A2", "-A1"]);
}

#[test]
fn test_walk_repeats_shared_children() {
    let t = tree(json!([
        {"AccountNo": "R", "Layer": 0},
        {"AccountNo": "A", "Layer": 1, "parent_acc_no": "R"},
        {"AccountNo": "B", "Layer": 1, "parent_acc_no": "R"},
        {"AccountNo": "C", "Layer": 2, "parent_acc_no": "A"},
        {"AccountNo": "C", "Layer": 2, "parent_acc_no": "B"}
    ]));
    assert_eq!(
        trace(&t),
        vec!["+R@0", "+A@1", "+C@2", "-C", "-A", "+B@1", "+C@2", "-C", "-B", "-R"]
    );
}

#[test]
fn test_walk_cuts_links_to_ancestors() {
    let t = tree(json!([
        {"AccountNo": "A", "Layer": 1, "parent_acc_no": "B"},
        {"AccountNo": "B", "Layer": 1, "parent_acc_no": "A"}
    ]));
    assert_eq!(
        trace(&t),
        vec!["+A@0", "+B@1", "*A@2", "-B", "-A", "+B@0", "+A@1", "*B@2", "-A", "-B"]
    );
}

#[test]
fn test_walk_is_last_flags() {
    let t = tree(json!([
        {"AccountNo": "R", "Layer": 0},
        {"AccountNo": "X", "Layer": 1, "parent_acc_no": "R"},
        {"AccountNo": "Y", "Layer": 1, "parent_acc_no": "R"}
    ]));
    let lasts: Vec<(String, bool)> = t
        .walk()
        .filter_map(|event| match event {
            WalkEvent::Enter { idx, is_last, .. } => Some((t.node(idx).id.clone(), is_last)),
            _ => None,
        })
        .collect();
    assert_eq!(
        lasts,
        vec![
            ("R".to_string(), true),
            ("X".to_string(), false),
            ("Y".to_string(), true)
        ]
    );
}

#[test]
fn test_walk_no_data_is_empty() {
    assert_eq!(build_tree(&[]).walk().count(), 0);
}

#[test]
fn test_walk_deep_chain_without_recursion() {
    let n = 100_000;
    let t = deep_chain(n);
    let mut enters = 0;
    let mut leaves = 0;
    let mut max_depth = 0;
    for event in t.walk() {
        match event {
            WalkEvent::Enter { depth, .. } => {
                enters += 1;
                max_depth = max_depth.max(depth);
            }
            WalkEvent::Leave { .. } => leaves += 1,
            WalkEvent::Cycle { .. } => panic!("chain has no cycle"),
        }
    }
    assert_eq!(enters, n);
    assert_eq!(leaves, n);
    assert_eq!(max_depth, n - 1);
}
