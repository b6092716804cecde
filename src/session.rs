//! Canvas session: the single owner of every piece of mutable canvas state.
//!
//! The host feeds [`InputEvent`]s in and reads one [`FrameSnapshot`] per
//! frame. Positions, viewport, gesture and expansion flags are only touched
//! through `&mut self`, so a snapshot never mixes old and new positions.

use petgraph::graph::NodeIndex;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::FlowConfig;
use crate::hierarchy::{AccountNode, DetailField, FlowTree, LayerIndex, node_details};
use crate::layout::{
    Connector, ExpansionState, LayoutEngine, Point, PositionKey, Rect, connectors, layer_color,
};
use crate::viewport::{Gesture, GestureTracker, Viewport};

// ─── Events ──────────────────────────────────────────────────────────────────

/// What sits under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    Background,
    Node(PositionKey),
    /// A hub's expand/collapse toggle.
    Toggle(i64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// `pos` is in screen coordinates.
    PointerDown { target: HitTarget, pos: Point },
    PointerMove { pos: Point },
    /// Carries no coordinates so window-level listeners can end a gesture
    /// released outside the canvas.
    PointerUp,
    Click { key: PositionKey },
    ZoomIn,
    ZoomOut,
    ResetView,
    ToggleLayer(i64),
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubFrame {
    pub key: PositionKey,
    pub layer: i64,
    pub rect: Rect,
    pub account_count: usize,
    pub expanded: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafFrame {
    pub key: PositionKey,
    pub layer: i64,
    pub id: String,
    pub rect: Rect,
    pub state: Option<String>,
    pub ifsc_code: Option<String>,
    pub selected: bool,
}

/// Everything one rendered frame reads, copied out at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub pan: Point,
    pub zoom: f64,
    pub hubs: Vec<HubFrame>,
    pub leaves: Vec<LeafFrame>,
    pub connectors: Vec<Connector>,
    pub selected: Option<String>,
}

impl FrameSnapshot {
    /// SVG `transform` for the world group: `screen = pan + zoom * world`.
    pub fn transform(&self) -> String {
        format!(
            "translate({} {}) scale({})",
            self.pan.x, self.pan.y, self.zoom
        )
    }
}

// ─── CanvasSession ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CanvasSession {
    tree: FlowTree,
    index: LayerIndex,
    engine: LayoutEngine,
    viewport: Viewport,
    gestures: GestureTracker,
    expansion: ExpansionState,
    selected: Option<NodeIndex>,
}

impl CanvasSession {
    /// Open a session on a built tree. Hubs are placed immediately; every
    /// layer starts collapsed.
    pub fn new(tree: FlowTree, config: &FlowConfig) -> Self {
        let index = LayerIndex::build(&tree);
        let mut engine = LayoutEngine::new(config.layout.clone());
        engine.place_hubs(index.layers());
        debug!(layers = index.len(), nodes = index.node_count(), "canvas session opened");

        Self {
            tree,
            index,
            engine,
            viewport: Viewport::new(config.viewport.clone()),
            gestures: GestureTracker::new(config.viewport.drag_threshold),
            expansion: ExpansionState::collapsed_by_default(),
            selected: None,
        }
    }

    pub fn tree(&self) -> &FlowTree {
        &self.tree
    }

    pub fn layer_index(&self) -> &LayerIndex {
        &self.index
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn gesture(&self) -> Gesture {
        self.gestures.gesture()
    }

    pub fn is_expanded(&self, layer: i64) -> bool {
        self.expansion.is_expanded(layer)
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { target, pos } => self.pointer_down(target, pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Click { key } => {
                self.click(key);
            }
            InputEvent::ZoomIn => {
                self.viewport.zoom_in();
            }
            InputEvent::ZoomOut => {
                self.viewport.zoom_out();
            }
            InputEvent::ResetView => self.viewport.reset(),
            InputEvent::ToggleLayer(layer) => {
                self.toggle_layer(layer);
            }
        }
    }

    /// Hit-test `pos` and start the matching gesture.
    pub fn press(&mut self, pos: Point) -> HitTarget {
        let target = self.hit_test(pos);
        self.pointer_down(target, pos);
        target
    }

    /// Start panning or dragging. Ignored on a toggle, and while another
    /// gesture is still in progress.
    pub fn pointer_down(&mut self, target: HitTarget, pos: Point) {
        if self.gestures.gesture().is_active() {
            debug!(?target, "pointer down during an active gesture; ignored");
            return;
        }
        let gesture = match target {
            HitTarget::Toggle(_) => return,
            HitTarget::Background => Gesture::Panning {
                start_pointer: pos,
                start_pan: self.viewport.pan,
            },
            HitTarget::Node(key) => Gesture::DraggingNode {
                key,
                start_pointer: pos,
                start_pos: self.engine.position(key),
            },
        };
        self.gestures.begin(gesture);
    }

    pub fn pointer_move(&mut self, pos: Point) {
        let Some(delta) = self.gestures.delta(pos) else {
            return;
        };
        match self.gestures.gesture() {
            Gesture::Idle => {}
            Gesture::Panning { start_pan, .. } => self.viewport.pan_to(start_pan, delta),
            Gesture::DraggingNode { key, start_pos, .. } => {
                self.engine.drag_to(key, start_pos, delta, self.viewport.zoom);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.gestures.end();
    }

    /// Select the account behind a visible leaf. Ignored right after a drag,
    /// for hubs, and for leaves of a collapsed layer. Returns the selected
    /// account.
    pub fn click(&mut self, key: PositionKey) -> Option<&AccountNode> {
        if self.gestures.has_dragged() {
            return None;
        }
        let PositionKey::Leaf { layer, index } = key else {
            return None;
        };
        if !self.expansion.is_expanded(layer) {
            return None;
        }
        let idx = *self.index.nodes_in(layer).get(index)?;
        self.selected = Some(idx);
        Some(self.tree.node(idx))
    }

    /// Select an account by identifier. Returns false for an unknown one.
    pub fn select(&mut self, id: &str) -> bool {
        match self.tree.graph.index_of(id) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&AccountNode> {
        self.selected.map(|idx| self.tree.node(idx))
    }

    pub fn selected_details(&self) -> Vec<DetailField> {
        self.selected()
            .map(|node| node_details(&node.attributes))
            .unwrap_or_default()
    }

    /// Flip a layer. Expanding lays its leaves out afresh next to the hub.
    /// Returns the new state.
    pub fn toggle_layer(&mut self, layer: i64) -> bool {
        let expanded = self.expansion.toggle(layer);
        if expanded {
            let count = self.index.nodes_in(layer).len();
            let placed = self.engine.layout_leaves(layer, count);
            info!(layer, placed, "layer expanded");
        } else {
            info!(layer, "layer collapsed");
        }
        expanded
    }

    /// Expand `layer` if it is collapsed. Returns whether anything changed.
    pub fn expand_layer(&mut self, layer: i64) -> bool {
        if self.expansion.is_expanded(layer) {
            return false;
        }
        self.toggle_layer(layer)
    }

    pub fn expand_all(&mut self) {
        let layers = self.index.layers().to_vec();
        for layer in layers {
            self.expand_layer(layer);
        }
    }

    /// Topmost target under a screen position: toggle, then expanded leaves
    /// (later drawn on top), then hubs, else the background.
    pub fn hit_test(&self, screen: Point) -> HitTarget {
        let world = self.viewport.screen_to_world(screen);
        let layers = self.index.layers();
        let radius = self.engine.config().toggle_radius;

        for &layer in layers.iter().rev() {
            let c = self.engine.toggle_center(layer);
            let d = world - c;
            if d.x * d.x + d.y * d.y <= radius * radius {
                return HitTarget::Toggle(layer);
            }
        }

        for &layer in layers.iter().rev() {
            if !self.expansion.is_expanded(layer) {
                continue;
            }
            for i in (0..self.index.nodes_in(layer).len()).rev() {
                let key = PositionKey::leaf(layer, i);
                if self.engine.bounds(key).contains(world) {
                    return HitTarget::Node(key);
                }
            }
        }

        for &layer in layers.iter().rev() {
            let key = PositionKey::Hub(layer);
            if self.engine.bounds(key).contains(world) {
                return HitTarget::Node(key);
            }
        }

        HitTarget::Background
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut hubs = Vec::with_capacity(self.index.len());
        let mut leaves = Vec::new();

        for (rank, &layer) in self.index.layers().iter().enumerate() {
            let nodes = self.index.nodes_in(layer);
            let expanded = self.expansion.is_expanded(layer);
            let key = PositionKey::Hub(layer);
            hubs.push(HubFrame {
                key,
                layer,
                rect: self.engine.bounds(key),
                account_count: nodes.len(),
                expanded,
                color: layer_color(rank),
            });

            if !expanded {
                continue;
            }
            for (i, &idx) in nodes.iter().enumerate() {
                let key = PositionKey::leaf(layer, i);
                let node = self.tree.node(idx);
                leaves.push(LeafFrame {
                    key,
                    layer,
                    id: node.id.clone(),
                    rect: self.engine.bounds(key),
                    state: non_empty(node, "state"),
                    ifsc_code: non_empty(node, "ifscCode"),
                    selected: self.selected == Some(idx),
                });
            }
        }

        FrameSnapshot {
            pan: self.viewport.pan,
            zoom: self.viewport.zoom,
            hubs,
            leaves,
            connectors: connectors(&self.index, &self.engine, &self.expansion),
            selected: self.selected().map(|n| n.id.clone()),
        }
    }
}

fn non_empty(node: &AccountNode, key: &str) -> Option<String> {
    node.attributes
        .get(key)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

#[cfg(test)]
#[path = "../tests/rust/test_session.rs"]
mod tests;
