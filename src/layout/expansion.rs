//! Per-layer expanded/collapsed flags.
//!
//! The canvas starts with every layer collapsed; the layer list starts with
//! every layer expanded. Each view owns its own state.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionState {
    default_expanded: bool,
    flags: BTreeMap<i64, bool>,
}

impl ExpansionState {
    /// Canvas view: layers hidden until explicitly expanded.
    pub fn collapsed_by_default() -> Self {
        Self {
            default_expanded: false,
            flags: BTreeMap::new(),
        }
    }

    /// Layer-list view: every layer visible until explicitly collapsed.
    pub fn expanded_by_default() -> Self {
        Self {
            default_expanded: true,
            flags: BTreeMap::new(),
        }
    }

    pub fn is_expanded(&self, layer: i64) -> bool {
        self.flags.get(&layer).copied().unwrap_or(self.default_expanded)
    }

    /// Set a layer's flag. Returns true when the effective state changed.
    pub fn set(&mut self, layer: i64, expanded: bool) -> bool {
        let before = self.is_expanded(layer);
        self.flags.insert(layer, expanded);
        before != expanded
    }

    /// Flip a layer and return its new state.
    pub fn toggle(&mut self, layer: i64) -> bool {
        let next = !self.is_expanded(layer);
        self.flags.insert(layer, next);
        next
    }

    /// The subset of `layers` currently expanded, in the given order.
    pub fn expanded<'a>(&'a self, layers: &'a [i64]) -> impl Iterator<Item = i64> + 'a {
        layers.iter().copied().filter(|&l| self.is_expanded(l))
    }
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::collapsed_by_default()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_expansion.rs"]
mod tests;
