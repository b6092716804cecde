//! JSON reader: a top-level array of flat objects, one object per row.
//!
//! This is the shape spreadsheet-to-JSON exporters emit (`sheet_to_json`
//! style), so object key order is kept as column order.

use serde_json::Value;
use tracing::debug;

use super::base::{RowReader, UTF8_BOM};
use crate::error::{FlowError, Result};
use crate::rows::{CellValue, Row};

pub struct JsonReader;

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Convert a JSON scalar into a cell. Nested values are kept as their JSON text.
pub fn cell_from_json(v: &Value) -> CellValue {
    match v {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or_default(),
        Value::String(s) => CellValue::from_text(s),
        Value::Array(_) | Value::Object(_) => CellValue::Text(v.to_string()),
    }
}

/// Convert an already-parsed JSON value into rows.
pub fn rows_from_value(value: &Value) -> Result<Vec<Row>> {
    let Value::Array(items) = value else {
        return Err(FlowError::Shape {
            expected: "an array of row objects",
            found: json_kind(value).to_string(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(obj) => Ok(obj
                .iter()
                .map(|(k, v)| (k.as_str(), cell_from_json(v)))
                .collect()),
            other => Err(FlowError::Shape {
                expected: "a row object",
                found: format!("{} at index {}", json_kind(other), i),
            }),
        })
        .collect()
}

impl RowReader for JsonReader {
    fn read(&self, src: &[u8]) -> Result<Vec<Row>> {
        let src = src.strip_prefix(UTF8_BOM).unwrap_or(src);
        let value: Value = serde_json::from_slice(src)?;
        let rows = rows_from_value(&value)?;
        debug!(rows = rows.len(), "read JSON input");
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_readers_json.rs"]
mod tests;
