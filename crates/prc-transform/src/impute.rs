//! Missing-value imputation.
//!
//! Strategies are keyed by column identity in the pipeline configuration,
//! never inferred from the data. Median fills compute the statistic over the
//! present values first, then fill, so late fills never feed the statistic.

use prc_model::{CellValue, ImputeRule, ImputeStrategy, MetricValue, StageEntry, Table};
use tracing::debug;

/// Median with the conventional midpoint-of-two-middles rule for even counts.
/// Returns None for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}

/// Apply one imputation rule in place, recording the absent count observed
/// before the fill.
///
/// An all-absent column under the median strategy has no statistic to
/// compute; its values stay missing and the fill count records zero.
pub fn impute_column(table: &mut Table, rule: &ImputeRule, entry: &mut StageEntry) {
    let absent = table
        .rows
        .iter()
        .filter(|row| row.get(&rule.column).is_missing())
        .count() as u64;
    entry.push(
        format!("{}.missing_before", rule.column),
        MetricValue::Count(absent),
    );

    let fill = match &rule.strategy {
        ImputeStrategy::Constant(value) => Some(value.clone()),
        ImputeStrategy::Median => {
            let present: Vec<f64> = table
                .rows
                .iter()
                .filter_map(|row| row.get(&rule.column).as_f64())
                .collect();
            let computed = median(&present);
            if let Some(value) = computed {
                entry.push(format!("{}.median", rule.column), MetricValue::Value(value));
            }
            computed.map(CellValue::Number)
        }
    };

    let Some(fill) = fill else {
        debug!(
            column = %rule.column,
            "median undefined for all-absent column; values left missing"
        );
        entry.push(format!("{}.filled", rule.column), MetricValue::Count(0));
        return;
    };

    let mut filled = 0u64;
    for row in &mut table.rows {
        if row.get(&rule.column).is_missing() {
            row.set(rule.column.clone(), fill.clone());
            filled += 1;
        }
    }
    debug!(column = %rule.column, filled, fill = %fill.render(), "imputed column");
    entry.push(
        format!("{}.fill_value", rule.column),
        MetricValue::Text(fill.render()),
    );
    entry.push(format!("{}.filled", rule.column), MetricValue::Count(filled));
}
