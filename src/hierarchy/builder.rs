//! Hierarchy builder — rows in, Flow Root out.
//!
//! Pass 1 turns every row with a resolvable account identifier into a node
//! (last row wins for a repeated identifier). Pass 2 wires parent → child
//! links. Root selection then tries, in order: nodes nobody references as a
//! child, the nodes of the lowest layer, every node.
//!
//! Nothing in here fails. Bad rows are dropped, dangling parents are
//! ignored, and degenerate graphs fall back to a broader root policy.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use tracing::{debug, info, warn};

use super::graph::{AccountGraph, AccountNode};
use super::walk::Walk;
use crate::rows::resolver::{ACCOUNT_ID, LAYER, PARENT_ID, SECONDARY_FIELDS};
use crate::rows::{CellValue, ColumnResolver, FieldMap, Row};

pub const FLOW_ROOT_NAME: &str = "Transaction Flow";
pub const NO_DATA_NAME: &str = "No Data";

// ─── RootPolicy ──────────────────────────────────────────────────────────────

/// Which rule produced the root set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootPolicy {
    /// Nodes not referenced as anyone's child.
    Unreferenced,
    /// Every node of the numerically lowest layer.
    LowestLayer(i64),
    /// Every node, each an independent root.
    AllNodes,
}

// ─── BuildReport ─────────────────────────────────────────────────────────────

/// Diagnostics collected while building.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildReport {
    pub rows_read: usize,
    /// 0-based indices of rows dropped for lacking an account identifier.
    pub skipped_rows: Vec<usize>,
    /// Identifiers that appeared on more than one row, once each.
    pub overwritten_ids: Vec<String>,
    /// Rows whose layer cell could not be read as a number.
    pub unreadable_layers: Vec<usize>,
    pub relationships: usize,
    /// Parent references naming an identifier that has no node.
    pub dangling_parents: usize,
    pub root_policy: Option<RootPolicy>,
}

// ─── FlowTree ────────────────────────────────────────────────────────────────

/// The Flow Root: the computed root set plus the account graph behind it.
///
/// An empty input produces the "No Data" sentinel: no accounts, no roots,
/// no attributes.
#[derive(Debug, Clone)]
pub struct FlowTree {
    pub graph: AccountGraph,
    pub roots: Vec<NodeIndex>,
    pub report: BuildReport,
    no_data: bool,
}

impl FlowTree {
    pub fn no_data() -> Self {
        Self {
            graph: AccountGraph::new(),
            roots: Vec::new(),
            report: BuildReport::default(),
            no_data: true,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.no_data
    }

    pub fn name(&self) -> &'static str {
        if self.no_data {
            NO_DATA_NAME
        } else {
            FLOW_ROOT_NAME
        }
    }

    pub fn total_accounts(&self) -> usize {
        self.graph.len()
    }

    pub fn total_layers(&self) -> usize {
        self.graph.distinct_layers().len()
    }

    /// `{totalAccounts, totalLayers}`, or nothing for the sentinel.
    pub fn attributes(&self) -> FieldMap {
        let mut attrs = FieldMap::new();
        if !self.no_data {
            attrs.insert("totalAccounts", self.total_accounts() as i64);
            attrs.insert("totalLayers", self.total_layers() as i64);
        }
        attrs
    }

    pub fn root_ids(&self) -> Vec<&str> {
        self.roots
            .iter()
            .map(|&idx| self.graph.node(idx).id.as_str())
            .collect()
    }

    pub fn node(&self, idx: NodeIndex) -> &AccountNode {
        self.graph.node(idx)
    }

    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph.children(idx)
    }

    /// Pre-order walk from the roots, repeating shared children and
    /// cutting links back to an ancestor.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }
}

// ─── Build ───────────────────────────────────────────────────────────────────

/// Build the account hierarchy for one input file.
pub fn build_tree(rows: &[Row]) -> FlowTree {
    if rows.is_empty() {
        debug!("no rows; returning the no-data tree");
        return FlowTree::no_data();
    }

    let mut report = BuildReport {
        rows_read: rows.len(),
        ..BuildReport::default()
    };
    let mut graph = AccountGraph::new();

    // Pass 1: nodes.
    let mut seen_twice: HashSet<String> = HashSet::new();
    for (i, row) in rows.iter().enumerate() {
        let resolver = ColumnResolver::new(row);
        let Some(node) = node_from_row(&resolver, row, i, &mut report) else {
            debug!(row = i, "skipping row without an account identifier");
            report.skipped_rows.push(i);
            continue;
        };
        let id = node.id.clone();
        let (_, overwritten) = graph.upsert(node);
        if overwritten && seen_twice.insert(id.clone()) {
            debug!(id = %id, row = i, "account identifier repeated; later row wins");
            report.overwritten_ids.push(id);
        }
    }
    if !report.skipped_rows.is_empty() {
        warn!(
            skipped = report.skipped_rows.len(),
            "rows without an account identifier were skipped"
        );
    }

    // Pass 2: parent → child links.
    for (i, row) in rows.iter().enumerate() {
        let resolver = ColumnResolver::new(row);
        let (Some(id), Some(parent_id)) = (
            resolver.resolve_string(ACCOUNT_ID),
            resolver.resolve_string(PARENT_ID),
        ) else {
            continue;
        };
        if id == "null" || parent_id == "null" {
            continue;
        }
        match (graph.index_of(&parent_id), graph.index_of(&id)) {
            (Some(parent), Some(child)) => {
                graph.add_child(parent, child, i);
                report.relationships += 1;
            }
            _ => {
                debug!(row = i, parent = %parent_id, "parent reference has no matching account");
                report.dangling_parents += 1;
            }
        }
    }

    let (roots, policy) = select_roots(&graph);
    if policy != RootPolicy::Unreferenced {
        warn!(?policy, "no unreferenced accounts; using fallback root policy");
    }
    report.root_policy = Some(policy);

    let tree = FlowTree {
        graph,
        roots,
        report,
        no_data: false,
    };
    info!(
        accounts = tree.total_accounts(),
        layers = tree.total_layers(),
        roots = tree.roots.len(),
        relationships = tree.report.relationships,
        "built transaction flow"
    );
    tree
}

fn node_from_row(
    resolver: &ColumnResolver<'_>,
    row: &Row,
    index: usize,
    report: &mut BuildReport,
) -> Option<AccountNode> {
    let account = resolver.resolve(ACCOUNT_ID)?;
    let id = account.to_string();

    let raw_layer = resolver.resolve(LAYER);
    let layer = match raw_layer {
        None => 0,
        Some(value) => value.as_integer().unwrap_or_else(|| {
            warn!(row = index, value = %value, "layer is not a number; using 0");
            report.unreadable_layers.push(index);
            0
        }),
    };

    let mut node = AccountNode::new(id, layer);
    node.attributes.insert("accountNo", account.clone());
    node.attributes.insert(
        "layer",
        raw_layer.cloned().unwrap_or(CellValue::Number(0.0)),
    );
    for (key, candidates) in SECONDARY_FIELDS {
        if let Some(value) = resolver.resolve(candidates) {
            node.attributes.insert(*key, value.clone());
        }
    }
    node.attributes.extend_from(row);
    Some(node)
}

/// Pick the roots: exactly one policy applies per build.
pub fn select_roots(graph: &AccountGraph) -> (Vec<NodeIndex>, RootPolicy) {
    let referenced = graph.referenced_children();
    let unreferenced: Vec<NodeIndex> = graph
        .indices()
        .filter(|idx| !referenced.contains(idx))
        .collect();
    if !unreferenced.is_empty() {
        return (unreferenced, RootPolicy::Unreferenced);
    }

    if let Some(&lowest) = graph.distinct_layers().first() {
        let lowest_layer: Vec<NodeIndex> = graph
            .indices()
            .filter(|&idx| graph.node(idx).layer == lowest)
            .collect();
        if !lowest_layer.is_empty() {
            return (lowest_layer, RootPolicy::LowestLayer(lowest));
        }
    }

    (graph.indices().collect(), RootPolicy::AllNodes)
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_builder.rs"]
mod tests;
