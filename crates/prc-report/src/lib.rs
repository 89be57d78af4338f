//! Report rendering for cleaning runs.
//!
//! Consumes the stage report and row counts produced by the pipeline and
//! renders them; the core only produces that data and never renders it.

use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use prc_transform::CleaningOutcome;

/// Render the audit trail as plain text, one stage block per entry, metrics
/// in recorded order.
pub fn render_text(outcome: &CleaningOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Cleaning run: {} rows in, {} rows out",
        outcome.rows_before, outcome.rows_after
    );
    for entry in &outcome.report.entries {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}]", entry.stage);
        for (name, value) in &entry.metrics {
            let _ = writeln!(out, "  {name}: {value}");
        }
    }
    out
}

/// Write the full outcome (cleaned table included) as pretty-printed JSON.
///
/// # Errors
///
/// Fails when the file cannot be created or serialization fails.
pub fn write_json(path: &Path, outcome: &CleaningOutcome) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), outcome)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}
