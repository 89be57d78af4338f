#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::numeric::{format_numeric, parse_f64};

/// A single scalar value in a table cell.
///
/// `Missing` is a distinguished absent state: it is not the empty string and
/// not zero, and it survives transforms unless a stage's contract says
/// otherwise.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the cell. Textual numbers parse; everything else is None.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_f64(s),
            Self::Missing => None,
        }
    }

    /// Canonical textual rendering, used for composite row keys and CSV output.
    ///
    /// `Missing` renders as the empty string; numbers render without trailing
    /// zeros so `40.0` and `40` compare equal.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_numeric(*n),
            Self::Missing => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&CellValue::Missing)
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }
}

/// An ordered sequence of rows with named columns.
///
/// `columns` carries the display order; cells live in each row keyed by
/// column name. The column set is fixed for a pipeline run except for
/// derived columns appended by the encoder stage. Row count only shrinks.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Register a derived column. Existing rows keep `Missing` until a stage
    /// fills them; re-registering an existing column is a no-op.
    pub fn add_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_column(&name) {
            self.columns.push(name);
        }
    }

    pub fn column_values(&self, name: &str) -> Vec<&CellValue> {
        self.rows.iter().map(|row| row.get(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_distinct_from_empty_text() {
        assert_ne!(CellValue::Missing, CellValue::text(""));
        assert_ne!(CellValue::Missing, CellValue::Number(0.0));
        assert!(CellValue::Missing.is_missing());
    }

    #[test]
    fn render_is_canonical_for_numbers() {
        assert_eq!(CellValue::Number(40.0).render(), "40");
        assert_eq!(CellValue::Number(1250.5).render(), "1250.5");
        assert_eq!(CellValue::Missing.render(), "");
    }

    #[test]
    fn absent_cell_reads_as_missing() {
        let row = Row::new();
        assert!(row.get("age").is_missing());
    }

    #[test]
    fn add_column_is_idempotent() {
        let mut table = Table::new(vec!["patient_id".into()]);
        table.add_column("insurance_flag");
        table.add_column("insurance_flag");
        assert_eq!(table.columns, ["patient_id", "insurance_flag"]);
    }
}
