//! Binary encoding of small categorical domains.

use std::collections::BTreeMap;

use prc_model::{CellValue, EncodeRule, MetricValue, StageEntry, Table};
use tracing::debug;

/// Deterministic lookup of a categorical cell against a code mapping.
///
/// Total over all inputs: mapped text yields its numeric code, everything
/// else — unmapped text, numbers, missing — yields missing.
pub fn encode_binary(value: &CellValue, mapping: &BTreeMap<String, i64>) -> CellValue {
    match value {
        CellValue::Text(s) => match mapping.get(s.trim()) {
            Some(code) => CellValue::Number(*code as f64),
            None => CellValue::Missing,
        },
        _ => CellValue::Missing,
    }
}

/// Apply one encode rule, writing codes into the rule's target column.
///
/// The source column is never touched. The target is a derived column: it is
/// registered on first use and recomputed wholesale on every run, so a second
/// pass over already-encoded output is a no-op.
pub fn apply_encode_rule(table: &mut Table, rule: &EncodeRule, entry: &mut StageEntry) {
    table.add_column(&rule.target);
    let mut encoded = 0u64;
    let mut unmapped = 0u64;
    for row in &mut table.rows {
        let code = encode_binary(row.get(&rule.source), &rule.mapping);
        if code.is_missing() {
            unmapped += 1;
        } else {
            encoded += 1;
        }
        row.set(rule.target.clone(), code);
    }
    debug!(source = %rule.source, target = %rule.target, encoded, unmapped, "encoded column");
    entry.push(
        format!("{}.encoded", rule.target),
        MetricValue::Count(encoded),
    );
    entry.push(
        format!("{}.unmapped", rule.target),
        MetricValue::Count(unmapped),
    );
}
