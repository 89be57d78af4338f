pub mod config;
pub mod error;
pub mod numeric;
pub mod report;
pub mod schema;
pub mod table;

pub use config::{CleanConfig, EncodeRule, ImputeRule, ImputeStrategy, DEFAULT_DATE_FORMATS};
pub use error::{CleanError, Result};
pub use numeric::{format_numeric, parse_f64, parse_i64};
pub use report::{MetricValue, StageEntry, StageReport};
pub use schema::{ColumnKind, ColumnSpec, Schema};
pub use table::{CellValue, Row, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_report_is_append_only_and_ordered() {
        let mut report = StageReport::new();
        let mut normalize = StageEntry::new("normalize");
        normalize.push("admission_date.coerced_to_missing", MetricValue::Count(2));
        report.append(normalize);
        let mut dedupe = StageEntry::new("dedupe");
        dedupe.push("full_row_duplicates", MetricValue::Count(1));
        report.append(dedupe);

        let stages: Vec<&str> = report.entries.iter().map(|e| e.stage.as_str()).collect();
        assert_eq!(stages, ["normalize", "dedupe"]);
        assert_eq!(
            report.get("dedupe").and_then(|e| e.count("full_row_duplicates")),
            Some(1)
        );
    }

    #[test]
    fn config_serializes() {
        let config = CleanConfig::patient_records();
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: CleanConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round.key_column, "patient_id");
        assert_eq!(round.date_formats, config.date_formats);
    }
}
