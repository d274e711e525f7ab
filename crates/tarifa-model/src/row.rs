//! Raw cells and rows as delivered by an external table reader.
//!
//! A reader (CSV, XLSX, JSON export) turns one source file into a sequence
//! of [`RawRow`]s. Column order is significant: several vendors ship files
//! with unnamed columns whose meaning is purely positional, so the row
//! keeps its cells in source order instead of sorting them.

use serde::{Deserialize, Serialize};

/// A single raw cell value before any cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum RawValue {
    Text(String),
    Number(f64),
    Empty,
}

impl RawValue {
    /// True for missing cells and for text that trims to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }

    /// Display form of the cell: text is trimmed, numbers drop a trailing
    /// fractional zero run (`10.50` prints as `10.5`), missing cells print
    /// as the empty string.
    pub fn as_display_text(&self) -> String {
        match self {
            RawValue::Empty => String::new(),
            RawValue::Text(text) => text.trim().to_string(),
            RawValue::Number(value) => format_numeric(*value),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

fn format_numeric(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// An ordered mapping from column key to raw cell value.
///
/// Keys are whatever the reader produced: real header labels or synthetic
/// positional placeholders such as `col_12`. The row is immutable from the
/// engine's perspective; it is kept verbatim as the audit snapshot on every
/// product built from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, RawValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.cells.push((key.into(), value.into()));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(key, value);
        self
    }

    /// First cell stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.cells
            .iter()
            .find(|(cell_key, _)| cell_key == key)
            .map(|(_, value)| value)
    }

    /// Cells in source column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.cells
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Non-empty cells in source column order.
    pub fn populated(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.iter().filter(|(_, value)| !value.is_empty())
    }

    /// Cell at a source column position.
    pub fn cell_at(&self, index: usize) -> Option<(&str, &RawValue)> {
        self.cells
            .get(index)
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Serialized copy of the row for audit/debug trails.
    ///
    /// Cells serialize as an ordered list of `[key, value]` pairs so the
    /// source column order survives the round trip.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.cells).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_trims_and_formats() {
        assert_eq!(RawValue::from("  FRIGO X  ").as_display_text(), "FRIGO X");
        assert_eq!(RawValue::from(150.0).as_display_text(), "150");
        assert_eq!(RawValue::from(10.5).as_display_text(), "10.5");
        assert_eq!(RawValue::Empty.as_display_text(), "");
    }

    #[test]
    fn empty_detection_covers_blank_text() {
        assert!(RawValue::Empty.is_empty());
        assert!(RawValue::from("   ").is_empty());
        assert!(!RawValue::from(0.0).is_empty());
        assert!(!RawValue::from("x").is_empty());
    }

    #[test]
    fn rows_preserve_column_order() {
        let row = RawRow::new()
            .with("REFERENCIA", "A1")
            .with("DESCRIPCION", "Frigo X")
            .with("PVP", 150.0);
        let keys: Vec<&str> = row.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["REFERENCIA", "DESCRIPCION", "PVP"]);
        assert_eq!(row.get("PVP"), Some(&RawValue::Number(150.0)));
        assert_eq!(row.cell_at(1).map(|(key, _)| key), Some("DESCRIPCION"));
    }

    #[test]
    fn snapshot_round_trips_in_order() {
        let row = RawRow::new().with("B", "2").with("A", "1");
        let snapshot = row.snapshot_json();
        let cells: Vec<(String, RawValue)> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(cells[0].0, "B");
        assert_eq!(cells[1].0, "A");
    }
}
