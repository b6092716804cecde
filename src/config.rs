//! Configuration for layout geometry, viewport limits and rendering.
//!
//! Every field has a default matching the stock layer map; a TOML file only
//! needs to name the values it changes:
//!
//! ```toml
//! [layout]
//! grid_columns = 3
//!
//! [viewport]
//! default_zoom = 1.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FlowError, Result};

// ─── LayoutConfig ────────────────────────────────────────────────────────────

/// Geometry of hubs, leaves and the leaf grid, in diagram units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// x of every hub on first layout.
    pub hub_x: f64,
    /// y of the first (lowest) layer's hub.
    pub hub_start_y: f64,
    pub hub_width: f64,
    pub hub_height: f64,
    /// Vertical space between two stacked hubs.
    pub hub_gap: f64,
    pub leaf_width: f64,
    pub leaf_height: f64,
    pub grid_columns: usize,
    pub column_pitch: f64,
    pub row_pitch: f64,
    /// Horizontal distance from a hub's x to its leaf grid.
    pub grid_offset_x: f64,
    /// Downward shift applied after centring the grid on the hub.
    pub grid_bias_y: f64,
    /// Horizontal length of a connector's control handles at the hub end.
    pub hub_handle: f64,
    /// Horizontal length of a connector's control handles at the leaf end.
    pub leaf_handle: f64,
    /// Radius of the expand/collapse toggle on a hub's right edge.
    pub toggle_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hub_x: 100.0,
            hub_start_y: 100.0,
            hub_width: 200.0,
            hub_height: 120.0,
            hub_gap: 50.0,
            leaf_width: 320.0,
            leaf_height: 140.0,
            grid_columns: 4,
            column_pitch: 350.0,
            row_pitch: 200.0,
            grid_offset_x: 350.0,
            grid_bias_y: 60.0,
            hub_handle: 150.0,
            leaf_handle: 100.0,
            toggle_radius: 14.0,
        }
    }
}

impl LayoutConfig {
    /// Vertical distance between consecutive hubs.
    pub fn hub_pitch(&self) -> f64 {
        self.hub_height + self.hub_gap
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("layout.hub_width", self.hub_width),
            ("layout.hub_height", self.hub_height),
            ("layout.leaf_width", self.leaf_width),
            ("layout.leaf_height", self.leaf_height),
            ("layout.column_pitch", self.column_pitch),
            ("layout.row_pitch", self.row_pitch),
            ("layout.toggle_radius", self.toggle_radius),
        ];
        for (name, value) in sizes {
            positive(name, value)?;
        }
        let offsets = [
            ("layout.hub_x", self.hub_x),
            ("layout.hub_start_y", self.hub_start_y),
            ("layout.hub_gap", self.hub_gap),
            ("layout.grid_offset_x", self.grid_offset_x),
            ("layout.grid_bias_y", self.grid_bias_y),
            ("layout.hub_handle", self.hub_handle),
            ("layout.leaf_handle", self.leaf_handle),
        ];
        for (name, value) in offsets {
            finite(name, value)?;
        }
        if self.grid_columns == 0 {
            return Err(invalid("layout.grid_columns must be at least 1"));
        }
        Ok(())
    }
}

// ─── ViewportConfig ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    /// Zoom on first open and after a reset.
    pub default_zoom: f64,
    /// Pointer travel (screen px, either axis) after which a gesture counts as a drag.
    pub drag_threshold: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.2,
            max_zoom: 2.0,
            zoom_step: 0.1,
            default_zoom: 0.5,
            drag_threshold: 5.0,
        }
    }
}

impl ViewportConfig {
    /// Requires `0 < min_zoom <= default_zoom <= max_zoom`, a positive zoom
    /// step and a non-negative drag threshold, all finite.
    pub fn validate(&self) -> Result<()> {
        positive("viewport.min_zoom", self.min_zoom)?;
        positive("viewport.max_zoom", self.max_zoom)?;
        positive("viewport.zoom_step", self.zoom_step)?;
        positive("viewport.default_zoom", self.default_zoom)?;
        finite("viewport.drag_threshold", self.drag_threshold)?;
        if self.drag_threshold < 0.0 {
            return Err(invalid("viewport.drag_threshold must not be negative"));
        }
        if !(self.min_zoom <= self.default_zoom && self.default_zoom <= self.max_zoom) {
            return Err(invalid(format!(
                "viewport zoom must satisfy min_zoom <= default_zoom <= max_zoom, got {} <= {} <= {}",
                self.min_zoom, self.default_zoom, self.max_zoom
            )));
        }
        Ok(())
    }
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

/// Configuration for the text and SVG renderers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Account names longer than this are cut and suffixed with `...`.
    pub max_label_chars: usize,
    /// SVG canvas size in screen pixels.
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            max_label_chars: 20,
            canvas_width: 1600.0,
            canvas_height: 1000.0,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        positive("render.canvas_width", self.canvas_width)?;
        positive("render.canvas_height", self.canvas_height)?;
        if self.max_label_chars == 0 {
            return Err(invalid("render.max_label_chars must be at least 1"));
        }
        Ok(())
    }
}

// ─── FlowConfig ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub layout: LayoutConfig,
    pub viewport: ViewportConfig,
    pub render: RenderConfig,
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.viewport.validate()?;
        self.render.validate()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

fn invalid(msg: impl Into<String>) -> FlowError {
    FlowError::InvalidConfig(msg.into())
}

fn finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{} must be a finite number, got {}", name, value)))
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{} must be greater than 0, got {}", name, value)))
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
