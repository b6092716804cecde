//! Column resolver — tolerant header lookup by prioritized candidate names.
//!
//! Headers such as `"Account No."`, `"account_no"` and `"AccountNo"` all
//! normalize to `accountno` and therefore resolve to the same logical field.

use std::collections::HashMap;

use super::types::{CellValue, Row};

// ─── Field catalogue ─────────────────────────────────────────────────────────

pub const ACCOUNT_ID: &[&str] = &[
    "Account No",
    "AccountNo",
    "Account Number",
    "acc_no",
    "Acknowledgement N",
    "A/C No",
    "AC No",
];

pub const LAYER: &[&str] = &["Layer", "Level"];

pub const PARENT_ID: &[&str] = &[
    "parent_acc_no",
    "ParentAccountNo",
    "Parent Account No",
    "Parent",
];

pub const SERIAL_NO: &[&str] = &["S.No", "SNo", "Serial No", "S No", "SerialNumber"];

pub const ACKNOWLEDGEMENT: &[&str] = &["Acknowledgement N", "Acknowledgement", "AcknowledgementN"];

pub const IFSC_CODE: &[&str] = &["IFSC Code", "IFSCCode", "IFSC"];

pub const STATE: &[&str] = &["State"];

pub const DISTRICT: &[&str] = &["District"];

pub const POLICE_STATION: &[&str] = &[
    "police Station Name of Complain reported officer",
    "Police Station",
    "PS Name",
    "PoliceStation",
];

pub const DESIGNATION: &[&str] = &["Designation"];

pub const MOBILE_NUMBER: &[&str] = &["Mobile Number", "MobileNumber", "Mobile", "Phone"];

pub const EMAIL: &[&str] = &["Email", "E-mail", "EmailID"];

/// Secondary fields copied into every node's attributes:
/// (canonical attribute key, candidate headers).
pub const SECONDARY_FIELDS: &[(&str, &[&str])] = &[
    ("sNo", SERIAL_NO),
    ("acknowledgementN", ACKNOWLEDGEMENT),
    ("ifscCode", IFSC_CODE),
    ("state", STATE),
    ("district", DISTRICT),
    ("policeStation", POLICE_STATION),
    ("designation", DESIGNATION),
    ("mobileNumber", MOBILE_NUMBER),
    ("email", EMAIL),
];

// ─── Normalization ───────────────────────────────────────────────────────────

/// Lower-case a header and strip whitespace, dots, underscores and hyphens.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '.' | '_' | '-')))
        .flat_map(char::to_lowercase)
        .collect()
}

// ─── ColumnResolver ──────────────────────────────────────────────────────────

/// Normalized view over one row, built once and queried many times.
pub struct ColumnResolver<'a> {
    normalized: HashMap<String, &'a CellValue>,
}

impl<'a> ColumnResolver<'a> {
    pub fn new(row: &'a Row) -> Self {
        let mut normalized = HashMap::with_capacity(row.len());
        // Later headers win when two of them normalize to the same key.
        for (key, value) in row.iter() {
            normalized.insert(normalize_key(key), value);
        }
        Self { normalized }
    }

    /// First non-empty value among `candidates`, in the caller's priority order.
    pub fn resolve(&self, candidates: &[&str]) -> Option<&'a CellValue> {
        candidates.iter().find_map(|candidate| {
            self.normalized
                .get(&normalize_key(candidate))
                .copied()
                .filter(|v| !v.is_empty())
        })
    }

    /// Resolve and stringify; `None` if absent or empty.
    pub fn resolve_string(&self, candidates: &[&str]) -> Option<String> {
        self.resolve(candidates).map(CellValue::to_string)
    }
}

/// One-shot lookup without keeping the normalized view around.
pub fn resolve<'a>(row: &'a Row, candidates: &[&str]) -> Option<&'a CellValue> {
    ColumnResolver::new(row).resolve(candidates)
}

#[cfg(test)]
#[path = "../../tests/rust/test_rows_resolver.rs"]
mod tests;
