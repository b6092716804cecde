//! Hub → leaf connector curves.

use serde::Serialize;

use crate::hierarchy::LayerIndex;

use super::engine::LayoutEngine;
use super::expansion::ExpansionState;
use super::types::{Point, PositionKey};

/// Connector colors, cycled by layer rank.
pub const LAYER_PALETTE: [&str; 6] = [
    "#06b6d4", "#14b8a6", "#10b981", "#3b82f6", "#6366f1", "#0ea5e9",
];

pub fn layer_color(rank: usize) -> &'static str {
    LAYER_PALETTE[rank % LAYER_PALETTE.len()]
}

/// A cubic Bézier from a hub's right edge to a leaf's left edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub id: String,
    pub layer: i64,
    pub leaf: PositionKey,
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
    pub color: &'static str,
}

impl Connector {
    /// SVG path data: `M x y C x y, x y, x y`.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y,
        )
    }
}

/// Connectors for every leaf of every expanded layer, from current positions.
///
/// Collapsed layers contribute nothing. Leaves or hubs without a stored
/// position are skipped.
pub fn connectors(
    index: &LayerIndex,
    engine: &LayoutEngine,
    expansion: &ExpansionState,
) -> Vec<Connector> {
    let config = engine.config();
    let mut out = Vec::new();

    for (rank, &layer) in index.layers().iter().enumerate() {
        if !expansion.is_expanded(layer) {
            continue;
        }
        let Some(hub) = engine.get(PositionKey::Hub(layer)) else {
            continue;
        };
        let color = layer_color(rank);
        let start = Point::new(hub.x + config.hub_width, hub.y + config.hub_height / 2.0);
        let control1 = Point::new(hub.x + config.hub_width + config.hub_handle, start.y);

        for i in 0..index.nodes_in(layer).len() {
            let key = PositionKey::leaf(layer, i);
            let Some(leaf) = engine.get(key) else {
                continue;
            };
            let end = Point::new(leaf.x, leaf.y + config.leaf_height / 2.0);
            out.push(Connector {
                id: format!("wire-{}", key),
                layer,
                leaf: key,
                start,
                control1,
                control2: Point::new(leaf.x - config.leaf_handle, end.y),
                end,
                color,
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_connectors.rs"]
mod tests;
