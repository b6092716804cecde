//! Layer index — reachable accounts grouped by their declared layer.
//!
//! Membership comes from `AccountNode::layer` only, never from tree depth.
//! Traversal is depth-first pre-order from each root, and every node is
//! visited once even when the parent links contain cycles.

use std::collections::{BTreeMap, HashSet};

use petgraph::graph::NodeIndex;

use super::builder::FlowTree;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerIndex {
    groups: BTreeMap<i64, Vec<NodeIndex>>,
    layers: Vec<i64>,
}

impl LayerIndex {
    pub fn build(tree: &FlowTree) -> Self {
        let mut groups: BTreeMap<i64, Vec<NodeIndex>> = BTreeMap::new();
        let mut visited: HashSet<NodeIndex> = HashSet::new();

        for &root in &tree.roots {
            let mut stack = vec![root];
            while let Some(idx) = stack.pop() {
                if !visited.insert(idx) {
                    continue;
                }
                groups.entry(tree.node(idx).layer).or_default().push(idx);
                // Reverse so the first child is popped first.
                stack.extend(tree.children(idx).into_iter().rev());
            }
        }

        let layers = groups.keys().copied().collect();
        Self { groups, layers }
    }

    /// Distinct layers, ascending.
    pub fn layers(&self) -> &[i64] {
        &self.layers
    }

    pub fn nodes_in(&self, layer: i64) -> &[NodeIndex] {
        self.groups.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position of `layer` in the ascending layer sequence.
    pub fn rank(&self, layer: i64) -> Option<usize> {
        self.layers.binary_search(&layer).ok()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &[NodeIndex])> {
        self.groups.iter().map(|(&l, nodes)| (l, nodes.as_slice()))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_layers.rs"]
mod tests;
