//! Position map for hubs and leaves.
//!
//! Three transitions touch the map:
//!
//! 1. `place_hubs` stacks one hub per layer, once per session.
//! 2. `layout_leaves` rewrites a layer's leaf grid next to its hub's current
//!    position. Called on every collapsed → expanded transition, so earlier
//!    drags of those leaves are discarded.
//! 3. `drag_to` moves a single element.
//!
//! Entries are never removed.

use std::collections::HashMap;

use crate::config::LayoutConfig;

use super::types::{Point, PositionKey, Rect};

#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    positions: HashMap<PositionKey, Point>,
    hubs_placed: bool,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            positions: HashMap::new(),
            hubs_placed: false,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Stack hubs vertically in the given (ascending) layer order.
    ///
    /// Only the first call has an effect; returns whether it did.
    pub fn place_hubs(&mut self, layers: &[i64]) -> bool {
        if self.hubs_placed {
            return false;
        }
        let pitch = self.config.hub_pitch();
        for (i, &layer) in layers.iter().enumerate() {
            let y = self.config.hub_start_y + i as f64 * pitch;
            self.positions
                .insert(PositionKey::Hub(layer), Point::new(self.config.hub_x, y));
        }
        self.hubs_placed = true;
        true
    }

    /// Lay out `count` leaves of `layer` in a grid right of the hub.
    ///
    /// Returns the number of leaves placed: zero when the hub has no
    /// position yet.
    pub fn layout_leaves(&mut self, layer: i64, count: usize) -> usize {
        let Some(hub) = self.get(PositionKey::Hub(layer)) else {
            return 0;
        };
        for index in 0..count {
            let p = grid_position(&self.config, hub, index, count);
            self.positions.insert(PositionKey::leaf(layer, index), p);
        }
        count
    }

    pub fn get(&self, key: PositionKey) -> Option<Point> {
        self.positions.get(&key).copied()
    }

    pub fn set(&mut self, key: PositionKey, p: Point) {
        self.positions.insert(key, p);
    }

    /// Current position, falling back to the hub origin for hubs and to
    /// `(0, 0)` for leaves.
    pub fn position(&self, key: PositionKey) -> Point {
        self.get(key).unwrap_or_else(|| {
            if key.is_hub() {
                Point::new(self.config.hub_x, self.config.hub_start_y)
            } else {
                Point::ORIGIN
            }
        })
    }

    /// Move `key` to `start + delta / zoom`.
    ///
    /// `delta` is the pointer travel in screen pixels since the gesture
    /// began, so repeated calls with the same delta land on the same spot.
    pub fn drag_to(&mut self, key: PositionKey, start: Point, delta: Point, zoom: f64) -> Point {
        let p = start + delta.scale(1.0 / zoom);
        self.positions.insert(key, p);
        p
    }

    pub fn positions(&self) -> &HashMap<PositionKey, Point> {
        &self.positions
    }

    /// Bounding box of the element at its current position.
    pub fn bounds(&self, key: PositionKey) -> Rect {
        let origin = self.position(key);
        if key.is_hub() {
            Rect::at(origin, self.config.hub_width, self.config.hub_height)
        } else {
            Rect::at(origin, self.config.leaf_width, self.config.leaf_height)
        }
    }

    /// Centre of a hub's expand/collapse toggle (right edge, vertical middle).
    pub fn toggle_center(&self, layer: i64) -> Point {
        let hub = self.position(PositionKey::Hub(layer));
        Point::new(
            hub.x + self.config.hub_width,
            hub.y + self.config.hub_height / 2.0,
        )
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Grid slot of leaf `index` out of `count`, relative to a hub at `hub`.
///
/// The grid is vertically centred on the hub and then shifted down by
/// `grid_bias_y`.
pub fn grid_position(config: &LayoutConfig, hub: Point, index: usize, count: usize) -> Point {
    let columns = config.grid_columns.max(1);
    let rows = count.div_ceil(columns);
    let grid_height = rows as f64 * config.row_pitch;
    let start = Point::new(
        hub.x + config.grid_offset_x,
        hub.y - grid_height / 2.0 + config.grid_bias_y,
    );
    let col = (index % columns) as f64;
    let row = (index / columns) as f64;
    start + Point::new(col * config.column_pitch, row * config.row_pitch)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_engine.rs"]
mod tests;
