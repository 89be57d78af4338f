//! Per-stage audit metrics.
//!
//! Every pipeline stage appends one entry; nothing downstream consumes the
//! report — it exists for audit rendering only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeric::format_numeric;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum MetricValue {
    Count(u64),
    Value(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Value(v) => f.write_str(&format_numeric(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Metrics recorded by a single stage, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEntry {
    pub stage: String,
    pub metrics: Vec<(String, MetricValue)>,
}

impl StageEntry {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            metrics: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: MetricValue) {
        self.metrics.push((name.into(), value));
    }

    pub fn count(&self, name: &str) -> Option<u64> {
        self.metrics.iter().find_map(|(n, v)| match v {
            MetricValue::Count(c) if n == name => Some(*c),
            _ => None,
        })
    }
}

/// Append-only, ordered audit trail for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageReport {
    pub entries: Vec<StageEntry>,
}

impl StageReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: StageEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, stage: &str) -> Option<&StageEntry> {
        self.entries.iter().find(|entry| entry.stage == stage)
    }
}
