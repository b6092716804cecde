//! Account hierarchy: graph, builder, layer index and node details.

pub mod builder;
pub mod details;
pub mod export;
pub mod graph;
pub mod layers;
pub mod walk;

pub use builder::{BuildReport, FLOW_ROOT_NAME, FlowTree, NO_DATA_NAME, RootPolicy, build_tree};
pub use details::{DetailField, DetailIcon, node_details};
pub use graph::{AccountGraph, AccountNode};
pub use layers::LayerIndex;
pub use walk::{Walk, WalkEvent};
