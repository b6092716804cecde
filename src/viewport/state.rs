//! Pan offset and zoom factor.

use serde::Serialize;

use crate::config::ViewportConfig;
use crate::layout::Point;

/// Screen transform of the canvas: `screen = pan + zoom * world`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub pan: Point,
    pub zoom: f64,
    #[serde(skip)]
    config: ViewportConfig,
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        let mut viewport = Self {
            pan: Point::ORIGIN,
            zoom: 1.0,
            config,
        };
        viewport.reset();
        viewport
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set_zoom(self.zoom + self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set_zoom(self.zoom - self.config.zoom_step)
    }

    /// Set zoom, silently clamped to `[min_zoom, max_zoom]`.
    ///
    /// Does not panic on an unvalidated config. When the bounds leave no
    /// positive finite zoom the current zoom is kept.
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        let zoom = zoom.max(self.config.min_zoom).min(self.config.max_zoom);
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
        self.zoom
    }

    /// Back to the origin at the default zoom, clamped like `set_zoom`.
    pub fn reset(&mut self) {
        self.pan = Point::ORIGIN;
        self.set_zoom(self.config.default_zoom);
    }

    /// Pan to `start + delta`. Screen units, not scaled by zoom.
    pub fn pan_to(&mut self, start: Point, delta: Point) {
        self.pan = start + delta;
    }

    pub fn world_to_screen(&self, p: Point) -> Point {
        self.pan + p.scale(self.zoom)
    }

    pub fn screen_to_world(&self, p: Point) -> Point {
        (p - self.pan).scale(1.0 / self.zoom)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_viewport_state.rs"]
mod tests;
