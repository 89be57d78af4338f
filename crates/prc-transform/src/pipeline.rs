//! The cleaning orchestrator.
//!
//! Fixed stage order: field normalization (dates, then phones) → imputation →
//! categorical encoding → duplicate resolution. Imputation has to run after
//! normalization so it sees the missing markers that unparseable dates become;
//! no imputation strategy is configured for date columns, so those stay
//! missing in the final output. There are no transactional semantics: a stage
//! that has run stays run.

use prc_model::{
    CleanConfig, CleanError, MetricValue, Result, StageEntry, StageReport, Table,
};
use tracing::{info, info_span};

use crate::dedupe;
use crate::encode::apply_encode_rule;
use crate::impute::impute_column;
use crate::normalize::{standardize_date, standardize_phone};

/// Result of one pipeline run: the cleaned table plus the audit trail.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CleaningOutcome {
    pub table: Table,
    pub report: StageReport,
    pub rows_before: usize,
    pub rows_after: usize,
}

pub struct CleaningPipeline {
    config: CleanConfig,
}

impl CleaningPipeline {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    /// Run every stage over the table.
    ///
    /// The table is owned for the duration of the run; each stage takes it by
    /// value and hands it to the next.
    ///
    /// # Errors
    ///
    /// Fails before any stage runs when the configuration is inconsistent or
    /// a declared column is absent from the table. Per-value data-quality
    /// problems never fail the run; they resolve to sentinels and show up in
    /// the stage report.
    pub fn run(&self, table: Table) -> Result<CleaningOutcome> {
        self.config.validate()?;
        self.check_columns(&table)?;

        let rows_before = table.height();
        let mut report = StageReport::new();
        let table = self.normalize_fields(table, &mut report);
        let table = self.impute(table, &mut report);
        let table = self.encode(table, &mut report);
        let table = self.dedupe(table, &mut report);
        let rows_after = table.height();
        info!(rows_before, rows_after, "cleaning run complete");

        Ok(CleaningOutcome {
            table,
            report,
            rows_before,
            rows_after,
        })
    }

    fn check_columns(&self, table: &Table) -> Result<()> {
        for name in self.config.schema.column_names() {
            if !table.has_column(name) {
                return Err(CleanError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }

    fn normalize_fields(&self, mut table: Table, report: &mut StageReport) -> Table {
        let _span = info_span!("stage", name = "normalize").entered();
        let mut entry = StageEntry::new("normalize");

        for column in self.config.date_columns() {
            let mut standardized = 0u64;
            let mut coerced = 0u64;
            for row in &mut table.rows {
                if row.get(column).is_missing() {
                    continue;
                }
                let next = standardize_date(row.get(column), &self.config.date_formats);
                if next.is_missing() {
                    coerced += 1;
                } else {
                    standardized += 1;
                }
                row.set(column.to_string(), next);
            }
            entry.push(
                format!("{column}.standardized"),
                MetricValue::Count(standardized),
            );
            entry.push(
                format!("{column}.coerced_to_missing"),
                MetricValue::Count(coerced),
            );
        }

        for column in self.config.phone_columns() {
            let mut rewritten = 0u64;
            let mut preserved = 0u64;
            for row in &mut table.rows {
                if row.get(column).is_missing() {
                    continue;
                }
                let next = standardize_phone(row.get(column));
                if &next == row.get(column) {
                    preserved += 1;
                } else {
                    rewritten += 1;
                }
                row.set(column.to_string(), next);
            }
            entry.push(format!("{column}.rewritten"), MetricValue::Count(rewritten));
            entry.push(format!("{column}.preserved"), MetricValue::Count(preserved));
        }

        report.append(entry);
        table
    }

    fn impute(&self, mut table: Table, report: &mut StageReport) -> Table {
        let _span = info_span!("stage", name = "impute").entered();
        let mut entry = StageEntry::new("impute");
        for rule in &self.config.impute {
            impute_column(&mut table, rule, &mut entry);
        }
        report.append(entry);
        table
    }

    fn encode(&self, mut table: Table, report: &mut StageReport) -> Table {
        let _span = info_span!("stage", name = "encode").entered();
        let mut entry = StageEntry::new("encode");
        for rule in &self.config.encode {
            apply_encode_rule(&mut table, rule, &mut entry);
        }
        report.append(entry);
        table
    }

    fn dedupe(&self, table: Table, report: &mut StageReport) -> Table {
        let _span = info_span!("stage", name = "dedupe").entered();
        let mut entry = StageEntry::new("dedupe");
        let full = dedupe::count_full_duplicates(&table);
        let key = dedupe::count_key_duplicates(&table, &self.config.key_column);
        let rows_before = table.height() as u64;
        let table = dedupe::remove_full_duplicates(table);
        entry.push("full_row_duplicates", MetricValue::Count(full));
        entry.push("key_duplicates", MetricValue::Count(key));
        entry.push("rows_before", MetricValue::Count(rows_before));
        entry.push("rows_after", MetricValue::Count(table.height() as u64));
        report.append(entry);
        table
    }
}
