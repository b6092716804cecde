//! Tree walk — depth-first pre-order over the Flow Root without recursion.
//!
//! Unlike `LayerIndex`, a node reachable from several parents is visited
//! once per path. Only a link back to an ancestor on the current path is
//! cut, and it is reported as `WalkEvent::Cycle`.

use petgraph::graph::NodeIndex;

use super::builder::FlowTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    /// A node is entered; its children follow, then a matching `Leave`.
    Enter {
        idx: NodeIndex,
        depth: usize,
        is_last: bool,
    },
    /// A link back to an ancestor. Not followed and has no `Leave`.
    Cycle {
        idx: NodeIndex,
        depth: usize,
        is_last: bool,
    },
    Leave { idx: NodeIndex },
}

struct Frame {
    idx: NodeIndex,
    children: Vec<NodeIndex>,
    next: usize,
}

/// Iterator over `WalkEvent`s. Memory grows with tree depth on the heap,
/// not the call stack.
pub struct Walk<'a> {
    tree: &'a FlowTree,
    next_root: usize,
    stack: Vec<Frame>,
    on_path: Vec<bool>,
}

impl<'a> Walk<'a> {
    pub fn new(tree: &'a FlowTree) -> Self {
        Self {
            tree,
            next_root: 0,
            stack: Vec::new(),
            on_path: vec![false; tree.graph.len()],
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        let (idx, is_last) = if let Some(top) = self.stack.last_mut() {
            let Some(&child) = top.children.get(top.next) else {
                let idx = top.idx;
                self.stack.pop();
                self.on_path[idx.index()] = false;
                return Some(WalkEvent::Leave { idx });
            };
            top.next += 1;
            (child, top.next == top.children.len())
        } else {
            let roots = &self.tree.roots;
            let root = *roots.get(self.next_root)?;
            self.next_root += 1;
            (root, self.next_root == roots.len())
        };

        let depth = self.stack.len();
        if self.on_path[idx.index()] {
            return Some(WalkEvent::Cycle {
                idx,
                depth,
                is_last,
            });
        }
        self.on_path[idx.index()] = true;
        self.stack.push(Frame {
            idx,
            children: self.tree.children(idx),
            next: 0,
        });
        Some(WalkEvent::Enter {
            idx,
            depth,
            is_last,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_hierarchy_walk.rs"]
mod tests;
