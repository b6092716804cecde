//! Row data structures: the scalar cell value and the ordered field map.
//!
//! A `FieldMap` is used twice: once for the raw rows handed over by a reader
//! and once for the attribute map attached to every account node.

use std::fmt;

use serde::{Serialize, Serializer};

// ─── CellValue ───────────────────────────────────────────────────────────────

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Empty cells and empty strings both count as "no value".
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    /// Coerce to an integer layer number.
    ///
    /// Numbers are truncated toward zero; text is trimmed and parsed as a
    /// float. Returns `None` when the value has no numeric reading.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            CellValue::Number(_) => None,
            CellValue::Bool(b) => Some(i64::from(*b)),
            CellValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return None;
                }
                t.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(|n| n.trunc() as i64)
            }
        }
    }

    /// Build a cell from raw CSV text. Numeric-looking text stays text so
    /// identifiers with leading zeros survive untouched.
    pub fn from_text(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            CellValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

// ─── FieldMap ────────────────────────────────────────────────────────────────

/// Insertion-ordered string → cell mapping.
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldMap {
    entries: Vec<(String, CellValue)>,
}

/// One input record, as produced by a reader.
pub type Row = FieldMap;

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Copy every entry of `other` into `self`, overwriting shared keys.
    pub fn extend_from(&mut self, other: &FieldMap) {
        for (k, v) in other.iter() {
            self.insert(k, v.clone());
        }
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_rows_types.rs"]
mod tests;
