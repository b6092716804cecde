//! Layout types: Point, PositionKey, Rect.

use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

// ─── Point ───────────────────────────────────────────────────────────────────

/// A position in diagram space (or screen space, where noted).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ─── PositionKey ─────────────────────────────────────────────────────────────

/// Stable key of a laid-out element.
///
/// Displays as `hub-<layer>` or `node-<layer>-<index>`; `index` is the
/// leaf's position within its layer group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PositionKey {
    Hub(i64),
    Leaf { layer: i64, index: usize },
}

impl PositionKey {
    pub fn leaf(layer: i64, index: usize) -> Self {
        PositionKey::Leaf { layer, index }
    }

    pub fn layer(&self) -> i64 {
        match *self {
            PositionKey::Hub(layer) => layer,
            PositionKey::Leaf { layer, .. } => layer,
        }
    }

    pub fn is_hub(&self) -> bool {
        matches!(self, PositionKey::Hub(_))
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionKey::Hub(layer) => write!(f, "hub-{}", layer),
            PositionKey::Leaf { layer, index } => write!(f, "node-{}-{}", layer, index),
        }
    }
}

impl Serialize for PositionKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── Rect ────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
