//! flowmap — fund-flow hierarchy builder and layer-map layout engine.
//!
//! Rows in (CSV or JSON), account hierarchy out, rendered as a text
//! outline, a layer list, an SVG canvas frame or JSON.
//!
//! Public API: [`render_table`] for the whole pipeline, or the modules
//! individually: `readers` → `hierarchy` → `session` → `renderers`.

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod layout;
pub mod readers;
pub mod renderers;
pub mod rows;
pub mod session;
pub mod viewport;

#[cfg(feature = "wasm")]
mod wasm;

use std::fmt;
use std::str::FromStr;

pub use config::FlowConfig;
pub use error::{FlowError, Result};
pub use hierarchy::{FlowTree, LayerIndex, build_tree, node_details};
pub use readers::{InputFormat, read_rows};
pub use rows::Row;
pub use session::{CanvasSession, FrameSnapshot, InputEvent};

use layout::ExpansionState;
use renderers::{CharSet, LayerList, LayerOutline, Renderer, SvgRenderer, TreeOutline};

// ─── View ────────────────────────────────────────────────────────────────────

/// Which rendering to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Indented tree under the Flow Root.
    #[default]
    Tree,
    /// Layer list, every layer expanded unless collapsed explicitly.
    Layers,
    /// SVG frame of the layer map, every layer collapsed unless expanded.
    Canvas,
    /// Nested JSON export of the Flow Root.
    Json,
    /// Detail list of one account, as JSON.
    Details,
}

impl FromStr for View {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tree" => Ok(View::Tree),
            "layers" => Ok(View::Layers),
            "canvas" | "svg" => Ok(View::Canvas),
            "json" => Ok(View::Json),
            "details" => Ok(View::Details),
            other => Err(FlowError::UnknownView(other.to_string())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Tree => "tree",
            View::Layers => "layers",
            View::Canvas => "canvas",
            View::Json => "json",
            View::Details => "details",
        };
        f.write_str(name)
    }
}

// ─── RenderOptions ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub format: InputFormat,
    pub view: View,
    /// Layers expanded on the canvas.
    pub expand: Vec<i64>,
    /// Expand every layer on the canvas.
    pub expand_all: bool,
    /// Layers collapsed in the layer list.
    pub collapse: Vec<i64>,
    /// Account selected on the canvas, or described by the details view.
    pub node: Option<String>,
    pub config: FlowConfig,
}

// ─── Pipeline ────────────────────────────────────────────────────────────────

/// Decode text input and render it.
pub fn render_table(src: &str, options: &RenderOptions) -> Result<String> {
    render_bytes(src.as_bytes(), options)
}

/// Decode raw input (text or a spreadsheet workbook) and render it.
pub fn render_bytes(src: &[u8], options: &RenderOptions) -> Result<String> {
    let rows = read_rows(src, options.format)?;
    render_rows(&rows, options)
}

/// Build the hierarchy for `rows` and render the requested view.
pub fn render_rows(rows: &[Row], options: &RenderOptions) -> Result<String> {
    let tree = build_tree(rows);
    let charset = CharSet::from_unicode_flag(options.config.render.unicode);

    match options.view {
        View::Tree => Ok(TreeOutline::new(charset).render(&tree)),
        View::Layers => {
            let index = LayerIndex::build(&tree);
            let mut expansion = ExpansionState::expanded_by_default();
            for &layer in &options.collapse {
                expansion.set(layer, false);
            }
            let list = LayerList {
                tree: &tree,
                index: &index,
                expansion: &expansion,
            };
            Ok(LayerOutline::new(charset).render(&list))
        }
        View::Canvas => {
            let mut session = CanvasSession::new(tree, &options.config);
            if options.expand_all {
                session.expand_all();
            }
            for &layer in &options.expand {
                session.expand_layer(layer);
            }
            if let Some(id) = &options.node {
                if !session.select(id) {
                    return Err(FlowError::UnknownAccount(id.clone()));
                }
            }
            let renderer = SvgRenderer::new(
                options.config.render.clone(),
                options.config.layout.clone(),
            );
            Ok(renderer.render(&session.snapshot()))
        }
        View::Json => {
            let mut text = tree.to_json_pretty()?;
            text.push('\n');
            Ok(text)
        }
        View::Details => {
            let id = options.node.as_deref().ok_or(FlowError::MissingAccount)?;
            let node = tree
                .graph
                .get(id)
                .ok_or_else(|| FlowError::UnknownAccount(id.to_string()))?;
            let mut text = serde_json::to_string_pretty(&node_details(&node.attributes))?;
            text.push('\n');
            Ok(text)
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
