//! Spreadsheet reader (xlsx, xlsm, xlsb, xls, ods) built on `calamine`.
//!
//! Only the first worksheet is read. Its first used row is the header row;
//! columns with a blank header are dropped, and so are rows with no values.
//! Numbers, booleans and dates keep their cell type.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use super::base::RowReader;
use crate::error::Result;
use crate::rows::{CellValue, Row};

pub struct WorkbookReader;

/// Dates become their serial day number, the way sheet exporters emit them
/// by default. Error cells keep their display text (`#DIV/0!`).
pub fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_text(s),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::from_text(s),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

/// Rows of a sheet range, keyed by the range's first row.
pub fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    sheet_rows
        .filter(|cells| !cells.iter().all(|cell| cell_from_data(cell).is_empty()))
        .map(|cells| {
            headers
                .iter()
                .zip(cells.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.as_str(), cell_from_data(cell)))
                .collect()
        })
        .collect()
}

impl RowReader for WorkbookReader {
    fn read(&self, src: &[u8]) -> Result<Vec<Row>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(src))?;
        let sheet = workbook.sheet_names().first().cloned();
        let Some(range) = workbook.worksheet_range_at(0) else {
            debug!("workbook has no worksheets");
            return Ok(Vec::new());
        };
        let rows = rows_from_range(&range?);
        debug!(sheet = ?sheet, rows = rows.len(), "read workbook input");
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_readers_workbook.rs"]
mod tests;
