//! Text outlines of the hierarchy.
//!
//! `TreeOutline` draws the Flow Root as an indented tree. `LayerOutline`
//! draws the layer list: one section per layer with its accounts underneath
//! when the section is expanded.

use super::charset::{CharSet, TreeChars};
use super::{Renderer, account_count};
use crate::hierarchy::{FlowTree, LayerIndex, WalkEvent};
use crate::layout::ExpansionState;

// ─── TreeOutline ─────────────────────────────────────────────────────────────

/// ```text
/// Transaction Flow (3 Accounts, 2 layers)
/// └── A1 [L1]
///     └── A2 [L1]
///         └── A3 [L2]
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOutline {
    pub charset: CharSet,
}

impl TreeOutline {
    pub fn new(charset: CharSet) -> Self {
        Self { charset }
    }
}

impl Renderer<FlowTree> for TreeOutline {
    fn render(&self, tree: &FlowTree) -> String {
        if tree.is_no_data() {
            return format!("{}\n", tree.name());
        }
        let layers = tree.total_layers();
        let header = format!(
            "{} ({}, {} {})",
            tree.name(),
            account_count(tree.total_accounts()),
            layers,
            if layers == 1 { "layer" } else { "layers" }
        );
        let tc = TreeChars::for_charset(self.charset);
        let mut out = vec![header];
        // Continuation segments of the ancestors, one per open level.
        let mut levels: Vec<&'static str> = Vec::new();
        let mut prefix = String::new();
        for event in tree.walk() {
            let (idx, depth, is_last, cycle) = match event {
                WalkEvent::Enter { idx, depth, is_last } => (idx, depth, is_last, false),
                WalkEvent::Cycle { idx, depth, is_last } => (idx, depth, is_last, true),
                WalkEvent::Leave { .. } => continue,
            };
            while levels.len() > depth {
                if let Some(seg) = levels.pop() {
                    prefix.truncate(prefix.len() - seg.len());
                }
            }
            let node = tree.node(idx);
            let mut line = format!("{}{}{} [L{}]", prefix, tc.connector(is_last), node.id, node.layer);
            if cycle {
                line.push(' ');
                line.push_str(tc.cycle);
            } else {
                let seg = tc.continuation(is_last);
                levels.push(seg);
                prefix.push_str(seg);
            }
            out.push(line);
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

// ─── LayerOutline ────────────────────────────────────────────────────────────

/// What the layer list reads: the tree, its layer index and the list's own
/// expansion flags.
#[derive(Debug, Clone, Copy)]
pub struct LayerList<'a> {
    pub tree: &'a FlowTree,
    pub index: &'a LayerIndex,
    pub expansion: &'a ExpansionState,
}

/// ```text
/// ▾ Layer 1 (2 Accounts)
///   ├── A1 · Kerala · SBIN0001 · 1 connected
///   └── A2 · 1 connected
/// ▸ Layer 2 (1 Account)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerOutline {
    pub charset: CharSet,
}

impl LayerOutline {
    pub fn new(charset: CharSet) -> Self {
        Self { charset }
    }
}

/// Section heading: `Root Layer` for layer 0, else `Layer N`.
pub fn layer_heading(layer: i64) -> String {
    if layer == 0 {
        "Root Layer".to_string()
    } else {
        format!("Layer {}", layer)
    }
}

impl<'a> Renderer<LayerList<'a>> for LayerOutline {
    fn render(&self, list: &LayerList<'a>) -> String {
        if list.tree.is_no_data() {
            return format!("{}\n", list.tree.name());
        }
        let tc = TreeChars::for_charset(self.charset);
        let mut out = Vec::new();

        for (layer, nodes) in list.index.iter() {
            let expanded = list.expansion.is_expanded(layer);
            out.push(format!(
                "{} {} ({})",
                tc.toggle(expanded),
                layer_heading(layer),
                account_count(nodes.len())
            ));
            if !expanded {
                continue;
            }
            for (i, &idx) in nodes.iter().enumerate() {
                let node = list.tree.node(idx);
                let mut parts = vec![node.id.clone()];
                for key in ["state", "ifscCode"] {
                    if let Some(v) = node.attributes.get(key).filter(|v| !v.is_empty()) {
                        parts.push(v.to_string());
                    }
                }
                let connected = list.tree.children(idx).len();
                if connected > 0 {
                    parts.push(format!("{} connected", connected));
                }
                out.push(format!(
                    "  {}{}",
                    tc.connector(i + 1 == nodes.len()),
                    parts.join(tc.separator)
                ));
            }
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_outline.rs"]
mod tests;
