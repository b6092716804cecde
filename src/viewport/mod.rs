//! Viewport transform and pointer gestures.

pub mod gesture;
pub mod state;

pub use gesture::{Gesture, GestureTracker};
pub use state::Viewport;
