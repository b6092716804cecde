//! Nested JSON export of the Flow Root.
//!
//! The text is written straight from a `Walk`, so neither building nor
//! dropping the output nests on the call stack. Layout matches
//! `serde_json::to_string_pretty`.

use super::builder::FlowTree;
use super::graph::AccountNode;
use super::walk::WalkEvent;
use crate::rows::FieldMap;

const INDENT: &str = "  ";

struct JsonWriter {
    out: String,
    /// One entry per open `children` array: whether an item was written.
    open: Vec<bool>,
}

impl JsonWriter {
    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(INDENT);
        }
    }

    fn key(&mut self, level: usize, key: &str) {
        self.indent(level);
        self.out.push('"');
        self.out.push_str(key);
        self.out.push_str("\": ");
    }

    fn attributes(&mut self, level: usize, attrs: &FieldMap) -> serde_json::Result<()> {
        self.key(level, "attributes");
        if attrs.is_empty() {
            self.out.push_str("{}");
            return Ok(());
        }
        self.out.push('{');
        for (i, (k, v)) in attrs.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.out.push('\n');
            self.indent(level + 1);
            self.out.push_str(&serde_json::to_string(k)?);
            self.out.push_str(": ");
            self.out.push_str(&serde_json::to_string(v)?);
        }
        self.out.push('\n');
        self.indent(level);
        self.out.push('}');
        Ok(())
    }

    /// Separator and opening brace for an item of the array at `depth`.
    /// Returns the indent level of the item's fields.
    fn open_item(&mut self, depth: usize) -> usize {
        if let Some(wrote) = self.open.last_mut() {
            if *wrote {
                self.out.push(',');
            }
            *wrote = true;
        }
        self.out.push('\n');
        let level = 2 + 2 * depth;
        self.indent(level);
        self.out.push('{');
        level + 1
    }

    fn head(&mut self, level: usize, node: &AccountNode) -> serde_json::Result<()> {
        self.out.push('\n');
        self.key(level, "name");
        self.out.push_str(&serde_json::to_string(&node.id)?);
        self.out.push_str(",\n");
        self.key(level, "layer");
        self.out.push_str(&node.layer.to_string());
        self.out.push_str(",\n");
        Ok(())
    }

    fn close_children(&mut self, level: usize) {
        if self.open.pop().unwrap_or(false) {
            self.out.push('\n');
            self.indent(level);
        }
        self.out.push(']');
    }
}

impl FlowTree {
    /// Pretty-printed nested JSON: `{name, attributes, children}` at the top,
    /// `{name, layer, attributes, children}` per account.
    ///
    /// A node reachable from several parents is repeated under each. A link
    /// back to an ancestor is written as `{name, layer, cycle: true,
    /// children: []}` and not followed.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut w = JsonWriter {
            out: String::new(),
            open: Vec::new(),
        };
        w.out.push_str("{\n");
        w.key(1, "name");
        w.out.push_str(&serde_json::to_string(self.name())?);
        w.out.push_str(",\n");
        w.attributes(1, &self.attributes())?;
        w.out.push_str(",\n");
        w.key(1, "children");
        w.out.push('[');
        w.open.push(false);

        for event in self.walk() {
            match event {
                WalkEvent::Enter { idx, depth, .. } => {
                    let node = self.node(idx);
                    let level = w.open_item(depth);
                    w.head(level, node)?;
                    w.attributes(level, &node.attributes)?;
                    w.out.push_str(",\n");
                    w.key(level, "children");
                    w.out.push('[');
                    w.open.push(false);
                }
                WalkEvent::Cycle { idx, depth, .. } => {
                    let node = self.node(idx);
                    let level = w.open_item(depth);
                    w.head(level, node)?;
                    w.key(level, "cycle");
                    w.out.push_str("true,\n");
                    w.key(level, "children");
                    w.out.push_str("[]\n");
                    w.indent(level - 1);
                    w.out.push('}');
                }
                WalkEvent::Leave { .. } => {
                    // The array being closed belongs to a node at depth open.len() - 2.
                    let level = 2 * w.open.len() - 1;
                    w.close_children(level);
                    w.out.push('\n');
                    w.indent(level - 1);
                    w.out.push('}');
                }
            }
        }

        w.close_children(1);
        w.out.push_str("\n}");
        Ok(w.out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_export.rs"]
mod tests;
