//! Reader trait and input format detection.

use std::path::Path;
use std::str::FromStr;

use crate::error::{FlowError, Result};
use crate::rows::Row;

// ─── RowReader trait ─────────────────────────────────────────────────────────

/// Trait for tabular input readers.
///
/// Each input format implements this trait and yields rows in file order.
/// Input is raw bytes since spreadsheets are binary.
pub trait RowReader {
    /// Decode the whole input into an ordered sequence of rows.
    fn read(&self, src: &[u8]) -> Result<Vec<Row>>;
}

pub(crate) const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Zip container (xlsx, xlsm, xlsb, ods) and OLE compound file (xls).
const WORKBOOK_MAGIC: [&[u8]; 2] = [b"PK\x03\x04", b"\xD0\xCF\x11\xE0"];

// ─── InputFormat ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
    /// First worksheet of a spreadsheet workbook.
    Xlsx,
}

impl InputFormat {
    /// Guess the format from a file extension. Unknown extensions yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(InputFormat::Csv),
            "tsv" | "tab" => Some(InputFormat::Tsv),
            "json" => Some(InputFormat::Json),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(InputFormat::Xlsx),
            _ => None,
        }
    }

    /// Sniff the format from the content: a workbook signature means a
    /// spreadsheet, a leading `[` means JSON, anything else is CSV.
    pub fn sniff(src: &[u8]) -> Self {
        if WORKBOOK_MAGIC.iter().any(|magic| src.starts_with(magic)) {
            return InputFormat::Xlsx;
        }
        let text = src.strip_prefix(UTF8_BOM).unwrap_or(src);
        match text.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'[') => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

impl FromStr for InputFormat {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "tsv" => Ok(InputFormat::Tsv),
            "json" => Ok(InputFormat::Json),
            "xlsx" | "xls" => Ok(InputFormat::Xlsx),
            other => Err(FlowError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_readers_base.rs"]
mod tests;
