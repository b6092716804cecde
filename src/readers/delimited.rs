//! Delimited-text reader (CSV / TSV) built on the `csv` crate.
//!
//! The first record is the header row. Cells stay text; blank records are
//! dropped the way spreadsheet exporters drop blank sheet rows.

use tracing::debug;

use super::base::{RowReader, UTF8_BOM};
use crate::error::Result;
use crate::rows::{CellValue, Row};

pub struct DelimitedReader {
    pub delimiter: u8,
}

impl DelimitedReader {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self::csv()
    }
}

impl RowReader for DelimitedReader {
    fn read(&self, src: &[u8]) -> Result<Vec<Row>> {
        let src = src.strip_prefix(UTF8_BOM).unwrap_or(src);
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(src);

        let headers = rdr.headers()?.clone();
        let mut rows = Vec::new();

        for record in rdr.records() {
            let record = record?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let row: Row = headers
                .iter()
                .zip(record.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header, CellValue::from_text(cell)))
                .collect();
            rows.push(row);
        }

        debug!(rows = rows.len(), columns = headers.len(), "read delimited input");
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_readers_delimited.rs"]
mod tests;
