//! Duplicate detection and removal.
//!
//! Two independent measurements plus one mutation. Full-row duplicates are
//! removed first-seen-wins; rows that merely share the key column are counted
//! as a diagnostic and deliberately left in place.

use std::collections::BTreeSet;

use prc_model::{Row, Table};
use tracing::debug;

fn composite_key(row: &Row, columns: &[String]) -> String {
    let mut key = String::new();
    for (pos, name) in columns.iter().enumerate() {
        if pos > 0 {
            key.push('|');
        }
        key.push_str(&row.get(name).render());
    }
    key
}

/// Number of rows whose entire field set exactly matches an earlier row.
pub fn count_full_duplicates(table: &Table) -> u64 {
    let mut seen = BTreeSet::new();
    table
        .rows
        .iter()
        .filter(|row| !seen.insert(composite_key(row, &table.columns)))
        .count() as u64
}

/// Number of rows whose key column matches an earlier row's key, regardless
/// of the other fields. A superset signal of the full-row count, reported
/// separately and never acted on. Rows without a usable key are skipped.
pub fn count_key_duplicates(table: &Table, key_column: &str) -> u64 {
    let mut seen = BTreeSet::new();
    let mut duplicates = 0;
    for row in &table.rows {
        let key = row.get(key_column).render();
        if key.trim().is_empty() {
            continue;
        }
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    duplicates
}

/// Retain the first occurrence of each fully-identical row, preserving order.
pub fn remove_full_duplicates(table: Table) -> Table {
    let columns = table.columns.clone();
    let mut seen = BTreeSet::new();
    let mut out = Table::new(columns.clone());
    let before = table.height();
    for row in table.rows {
        if seen.insert(composite_key(&row, &columns)) {
            out.push_row(row);
        }
    }
    debug!(before, after = out.height(), "removed full-row duplicates");
    out
}
