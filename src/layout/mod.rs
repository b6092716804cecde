//! Canvas layout: positions, expansion flags and connector geometry.

pub mod connectors;
pub mod engine;
pub mod expansion;
pub mod types;

pub use connectors::{Connector, LAYER_PALETTE, connectors, layer_color};
pub use engine::{LayoutEngine, grid_position};
pub use expansion::ExpansionState;
pub use types::{Point, PositionKey, Rect};
