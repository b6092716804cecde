use super::*;

fn graph_with(ids: &[(&str, i64)]) -> AccountGraph {
    let mut g = AccountGraph::new();
    for (id, layer) in ids {
        g.upsert(AccountNode::new(*id, *layer));
    }
    g
}

#[test]
fn test_empty_graph() {
    let g = AccountGraph::new();
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
    assert!(g.distinct_layers().is_empty());
    assert!(!g.has_cycle());
}

#[test]
fn test_upsert_overwrites_in_place() {
    let mut g = graph_with(&[("A", 1), ("B", 2)]);
    let (idx, overwritten) = g.upsert(AccountNode::new("A", 5));
    assert!(overwritten);
    assert_eq!(idx, g.index_of("A").unwrap());
    assert_eq!(g.len(), 2);
    assert_eq!(g.get("A").unwrap().layer, 5);
    // First-occurrence order is kept.
    let order: Vec<&str> = g.indices().map(|i| g.node(i).id.as_str()).collect();
    assert_eq!(order, vec!["A", "B"]);
}

#[test]
fn test_children_in_insertion_order_with_repeats() {
    let mut g = graph_with(&[("P", 0), ("X", 1), ("Y", 1)]);
    let p = g.index_of("P").unwrap();
    let x = g.index_of("X").unwrap();
    let y = g.index_of("Y").unwrap();
    g.add_child(p, y, 0);
    g.add_child(p, x, 1);
    g.add_child(p, y, 2);
    assert_eq!(g.child_ids(p), vec!["Y", "X", "Y"]);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn test_referenced_children() {
    let mut g = graph_with(&[("P", 0), ("X", 1), ("Y", 1)]);
    let p = g.index_of("P").unwrap();
    let x = g.index_of("X").unwrap();
    g.add_child(p, x, 0);
    let refs = g.referenced_children();
    assert_eq!(refs.len(), 1);
    assert!(refs.contains(&x));
}

#[test]
fn test_distinct_layers_sorted() {
    let g = graph_with(&[("A", 3), ("B", 1), ("C", 3), ("D", 0)]);
    assert_eq!(g.distinct_layers(), vec![0, 1, 3]);
}

#[test]
fn test_has_cycle() {
    let mut g = graph_with(&[("A", 1), ("B", 1)]);
    let a = g.index_of("A").unwrap();
    let b = g.index_of("B").unwrap();
    g.add_child(a, b, 0);
    assert!(!g.has_cycle());
    g.add_child(b, a, 1);
    assert!(g.has_cycle());
}
