//! CSV implementation of the table I/O boundary.
//!
//! The core pipeline is agnostic to on-disk encoding; this module maps CSV
//! files to and from the in-memory [`Table`]. At this boundary an empty cell
//! is the absent marker: it ingests as `CellValue::Missing` and `Missing`
//! writes back out as an empty cell.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use prc_model::{CellValue, ColumnKind, Row, Schema, Table, parse_f64};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn parse_cell(raw: &str, kind: Option<ColumnKind>) -> CellValue {
    let cleaned = normalize_cell(raw);
    if cleaned.is_empty() {
        return CellValue::Missing;
    }
    if kind == Some(ColumnKind::Numeric) {
        if let Some(number) = parse_f64(&cleaned) {
            return CellValue::Number(number);
        }
        // unparseable numerics stay textual so imputation skips them
    }
    CellValue::Text(cleaned)
}

/// Read a CSV file into a [`Table`], typing cells by the declared schema.
///
/// # Errors
///
/// Fails when the file cannot be read, a record is malformed, or a schema
/// column is absent from the header row — the pipeline cannot run without
/// its declared columns, so this surfaces immediately.
pub fn read_csv_table(path: &Path, schema: &Schema) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    for name in schema.column_names() {
        if !headers.iter().any(|header| header == name) {
            bail!("required column '{name}' is missing from {}", path.display());
        }
    }

    let mut table = Table::new(headers.clone());
    for record in reader.records() {
        let record = record.with_context(|| format!("malformed record in {}", path.display()))?;
        let mut row = Row::new();
        for (idx, header) in headers.iter().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            row.set(header.clone(), parse_cell(raw, schema.kind_of(header)));
        }
        table.push_row(row);
    }
    debug!(path = %path.display(), rows = table.height(), columns = table.columns.len(), "read csv table");
    Ok(table)
}

/// Write a [`Table`] as CSV, rendering cells canonically.
///
/// # Errors
///
/// Fails when the file cannot be created or a record cannot be written.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.get(column).render())
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = table.height(), "wrote csv table");
    Ok(())
}
