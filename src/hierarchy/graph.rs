//! Account graph — petgraph DiGraph of accounts plus an id → index map.
//!
//! Edges run parent → child. Edge indices grow with insertion, so sorting a
//! node's outgoing edges by index gives its children in declaration order.

use std::collections::{BTreeSet, HashMap};

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::rows::FieldMap;

/// One account, built from the last row that named its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountNode {
    pub id: String,
    pub layer: i64,
    /// Canonical fields first, then every raw column of the source row.
    pub attributes: FieldMap,
}

impl AccountNode {
    pub fn new(id: impl Into<String>, layer: i64) -> Self {
        Self {
            id: id.into(),
            layer,
            attributes: FieldMap::new(),
        }
    }
}

/// Edge data: which input row declared the parent/child pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildLink {
    pub row: usize,
}

/// The account index and the parent → child relation over it.
#[derive(Debug, Clone, Default)]
pub struct AccountGraph {
    pub digraph: DiGraph<AccountNode, ChildLink>,
    /// Maps account id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl AccountGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.digraph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Insert `node`, replacing any node with the same id.
    ///
    /// A replaced node keeps the index of its first occurrence. Returns the
    /// index and whether an existing node was overwritten.
    pub fn upsert(&mut self, node: AccountNode) -> (NodeIndex, bool) {
        match self.node_index.get(&node.id) {
            Some(&idx) => {
                self.digraph[idx] = node;
                (idx, true)
            }
            None => {
                let id = node.id.clone();
                let idx = self.digraph.add_node(node);
                self.node_index.insert(id, idx);
                (idx, false)
            }
        }
    }

    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex, row: usize) {
        self.digraph.add_edge(parent, child, ChildLink { row });
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&AccountNode> {
        self.index_of(id).map(|idx| &self.digraph[idx])
    }

    pub fn node(&self, idx: NodeIndex) -> &AccountNode {
        &self.digraph[idx]
    }

    /// All node indices in index (first-occurrence) order.
    pub fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.digraph.node_indices()
    }

    /// Children of `idx` in the order their links were added. Repeated
    /// links appear repeatedly.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .digraph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        edges.sort_by_key(|(id, _)| id.index());
        edges.into_iter().map(|(_, target)| target).collect()
    }

    pub fn child_ids(&self, idx: NodeIndex) -> Vec<&str> {
        self.children(idx)
            .into_iter()
            .map(|c| self.digraph[c].id.as_str())
            .collect()
    }

    /// Every node that is the target of at least one child link.
    pub fn referenced_children(&self) -> BTreeSet<NodeIndex> {
        self.digraph
            .edge_indices()
            .filter_map(|e| self.digraph.edge_endpoints(e))
            .map(|(_, target)| target)
            .collect()
    }

    /// Distinct declared layers, ascending.
    pub fn distinct_layers(&self) -> Vec<i64> {
        let set: BTreeSet<i64> = self.digraph.node_weights().map(|n| n.layer).collect();
        set.into_iter().collect()
    }

    /// True if some chain of parent references loops back on itself.
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.digraph)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_graph.rs"]
mod tests;
