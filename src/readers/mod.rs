//! Reader registry — pick a reader for the input format and decode rows.

pub mod base;
pub mod delimited;
pub mod json;
pub mod workbook;

pub use base::{InputFormat, RowReader};
pub use delimited::DelimitedReader;
pub use json::JsonReader;
pub use workbook::WorkbookReader;

use crate::error::Result;
use crate::rows::Row;

/// Decode `src` as `format` into an ordered row sequence.
pub fn read_rows(src: &[u8], format: InputFormat) -> Result<Vec<Row>> {
    match format {
        InputFormat::Csv => DelimitedReader::csv().read(src),
        InputFormat::Tsv => DelimitedReader::tsv().read(src),
        InputFormat::Json => JsonReader.read(src),
        InputFormat::Xlsx => WorkbookReader.read(src),
    }
}
