//! Pipeline configuration.
//!
//! The column-to-strategy mappings and the candidate date formats are explicit
//! configuration handed to the orchestrator, never ambient state. The default
//! configuration enumerates the patient-records dataset this tool was built
//! for; alternate datasets supply their own JSON config.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};
use crate::schema::{ColumnKind, ColumnSpec, Schema};
use crate::table::CellValue;

/// Candidate date formats, tried in order. The order is the disambiguation
/// policy: the first format that parses wins, so `03/04/2020` resolves as
/// month/day/year. Reordering this list changes the meaning of ambiguous
/// input and breaks compatibility.
pub const DEFAULT_DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d", "%m-%d-%Y"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "value", rename_all = "snake_case")]
pub enum ImputeStrategy {
    /// Fill with the median of the column's present numeric values.
    Median,
    /// Fill with a fixed sentinel value.
    Constant(CellValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImputeRule {
    pub column: String,
    #[serde(flatten)]
    pub strategy: ImputeStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeRule {
    pub source: String,
    pub target: String,
    pub mapping: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    pub schema: Schema,
    pub key_column: String,
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
    #[serde(default)]
    pub impute: Vec<ImputeRule>,
    #[serde(default)]
    pub encode: Vec<EncodeRule>,
}

fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.map(String::from).to_vec()
}

impl CleanConfig {
    /// The static configuration for the patient-records dataset:
    /// median-imputed age, sentinel-imputed gender and bill amount, and a
    /// yes/no insurance flag derived next to its source column.
    pub fn patient_records() -> Self {
        Self {
            schema: Schema::new(vec![
                ColumnSpec::new("patient_id", ColumnKind::Identifier),
                ColumnSpec::new("admission_date", ColumnKind::Date),
                ColumnSpec::new("discharge_date", ColumnKind::Date),
                ColumnSpec::new("age", ColumnKind::Numeric),
                ColumnSpec::new("gender", ColumnKind::Categorical),
                ColumnSpec::new("bill_amount", ColumnKind::Numeric),
                ColumnSpec::new("contact_number", ColumnKind::Phone),
                ColumnSpec::new("insurance_status", ColumnKind::Categorical),
                ColumnSpec::new("diagnosis", ColumnKind::FreeText),
            ]),
            key_column: "patient_id".to_string(),
            date_formats: default_date_formats(),
            impute: vec![
                ImputeRule {
                    column: "age".to_string(),
                    strategy: ImputeStrategy::Median,
                },
                ImputeRule {
                    column: "gender".to_string(),
                    strategy: ImputeStrategy::Constant(CellValue::text("Unknown")),
                },
                ImputeRule {
                    column: "bill_amount".to_string(),
                    strategy: ImputeStrategy::Constant(CellValue::Number(0.0)),
                },
            ],
            encode: vec![EncodeRule {
                source: "insurance_status".to_string(),
                target: "insurance_flag".to_string(),
                mapping: BTreeMap::from([("Yes".to_string(), 1), ("No".to_string(), 0)]),
            }],
        }
    }

    /// Structural validation, run before any stage touches data.
    ///
    /// # Errors
    ///
    /// Fails when a rule references an undeclared column, an encode mapping
    /// is empty, an encode target collides with a declared column, or no
    /// candidate date formats are configured.
    pub fn validate(&self) -> Result<()> {
        if self.date_formats.is_empty() {
            return Err(CleanError::NoDateFormats);
        }
        let mut seen = std::collections::BTreeSet::new();
        for name in self.schema.column_names() {
            if !seen.insert(name.to_string()) {
                return Err(CleanError::DuplicateColumn(name.to_string()));
            }
        }
        if !self.schema.contains(&self.key_column) {
            return Err(CleanError::MissingColumn(self.key_column.clone()));
        }
        for rule in &self.impute {
            if !self.schema.contains(&rule.column) {
                return Err(CleanError::MissingColumn(rule.column.clone()));
            }
        }
        for rule in &self.encode {
            if !self.schema.contains(&rule.source) {
                return Err(CleanError::MissingColumn(rule.source.clone()));
            }
            if rule.mapping.is_empty() {
                return Err(CleanError::EmptyMapping {
                    column: rule.source.clone(),
                });
            }
            if self.schema.contains(&rule.target) {
                return Err(CleanError::EncodeTargetCollision {
                    column: rule.source.clone(),
                    target: rule.target.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn date_columns(&self) -> Vec<&str> {
        self.schema.columns_of_kind(ColumnKind::Date)
    }

    pub fn phone_columns(&self) -> Vec<&str> {
        self.schema.columns_of_kind(ColumnKind::Phone)
    }
}
