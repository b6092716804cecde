//! Tabular row model and tolerant column lookup.

pub mod resolver;
pub mod types;

pub use resolver::{ColumnResolver, normalize_key, resolve};
pub use types::{CellValue, FieldMap, Row};
