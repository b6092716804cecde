//! WASM bindings for flowmap.
//!
//! Exposes `buildTree` and `renderLayerMap` to JavaScript via wasm-bindgen.
//! Both take the rows as a JSON array of flat objects. `buildTreeFromWorkbook`
//! takes the bytes of an uploaded spreadsheet instead.

use wasm_bindgen::prelude::*;

use crate::{InputFormat, RenderOptions, View, render_bytes, render_table};

/// Build the hierarchy and return the Flow Root as JSON.
#[wasm_bindgen(js_name = "buildTree")]
pub fn build_tree(json_rows: &str) -> Result<String, JsError> {
    let options = RenderOptions {
        format: InputFormat::Json,
        view: View::Json,
        ..RenderOptions::default()
    };
    render_table(json_rows, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Render the layer map as SVG with the given layers expanded.
#[wasm_bindgen(js_name = "renderLayerMap")]
pub fn render_layer_map(json_rows: &str, expanded_layers: &[i32]) -> Result<String, JsError> {
    let options = RenderOptions {
        format: InputFormat::Json,
        view: View::Canvas,
        expand: expanded_layers.iter().map(|&l| i64::from(l)).collect(),
        ..RenderOptions::default()
    };
    render_table(json_rows, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Build the hierarchy from the first sheet of a workbook file.
#[wasm_bindgen(js_name = "buildTreeFromWorkbook")]
pub fn build_tree_from_workbook(bytes: &[u8]) -> Result<String, JsError> {
    let options = RenderOptions {
        format: InputFormat::Xlsx,
        view: View::Json,
        ..RenderOptions::default()
    };
    render_bytes(bytes, &options).map_err(|e| JsError::new(&e.to_string()))
}
