//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use prc_ingest::{read_csv_table, write_csv_table};
use prc_model::CleanConfig;
use prc_transform::{CleaningOutcome, CleaningPipeline};

use crate::cli::CleanArgs;

pub fn run_clean(args: &CleanArgs) -> Result<CleaningOutcome> {
    let config = load_config(args.config.as_deref())?;
    let table = read_csv_table(&args.input, &config.schema)?;
    info!(path = %args.input.display(), rows = table.height(), "loaded input table");

    let outcome = CleaningPipeline::new(config).run(table)?;

    if args.dry_run {
        info!("dry run; skipping output files");
        return Ok(outcome);
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_csv_table(&output, &outcome.table)?;
    println!("Cleaned table: {}", output.display());
    if let Some(report_path) = &args.report {
        prc_report::write_json(report_path, &outcome)?;
        println!("Report: {}", report_path.display());
    }
    Ok(outcome)
}

pub fn print_default_config() -> Result<()> {
    let config = CleanConfig::patient_records();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CleanConfig> {
    let Some(path) = path else {
        return Ok(CleanConfig::patient_records());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: CleanConfig = serde_json::from_str(&raw)
        .with_context(|| format!("invalid config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("inconsistent config {}", path.display()))?;
    Ok(config)
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("cleaned");
    input.with_file_name(format!("{stem}_cleaned.csv"))
}
