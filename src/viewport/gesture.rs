//! Pointer gesture classification.
//!
//! A gesture is classified once, at pointer-down, and keeps that kind until
//! pointer-up. Every update is computed from the values captured at the
//! start, never accumulated.

use crate::layout::{Point, PositionKey};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Panning {
        start_pointer: Point,
        start_pan: Point,
    },
    DraggingNode {
        key: PositionKey,
        start_pointer: Point,
        start_pos: Point,
    },
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    pub fn start_pointer(&self) -> Option<Point> {
        match *self {
            Gesture::Idle => None,
            Gesture::Panning { start_pointer, .. } => Some(start_pointer),
            Gesture::DraggingNode { start_pointer, .. } => Some(start_pointer),
        }
    }
}

/// Current gesture plus whether it has travelled past the drag threshold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureTracker {
    gesture: Gesture,
    has_dragged: bool,
    threshold: f64,
}

impl GestureTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            gesture: Gesture::Idle,
            has_dragged: false,
            threshold,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// True when the current (or last finished) gesture moved beyond the
    /// threshold on either axis.
    pub fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    /// Start a gesture unless one is already in progress. A gesture keeps
    /// its kind until `end`, so a second pointer-down is ignored.
    pub fn begin(&mut self, gesture: Gesture) -> bool {
        if self.gesture.is_active() {
            return false;
        }
        self.gesture = gesture;
        self.has_dragged = false;
        true
    }

    /// Pointer travel since the gesture started, or `None` when idle.
    pub fn delta(&mut self, pointer: Point) -> Option<Point> {
        let start = self.gesture.start_pointer()?;
        let delta = pointer - start;
        if delta.x.abs() > self.threshold || delta.y.abs() > self.threshold {
            self.has_dragged = true;
        }
        Some(delta)
    }

    /// End the gesture. `has_dragged` survives until the next `begin` so a
    /// trailing click can consult it.
    pub fn end(&mut self) -> Gesture {
        std::mem::take(&mut self.gesture)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_viewport_gesture.rs"]
mod tests;
