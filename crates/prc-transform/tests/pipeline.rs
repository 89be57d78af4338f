//! End-to-end pipeline tests over a small messy patient table.

use prc_model::{CellValue, CleanConfig, CleanError, Row, Table};
use prc_transform::{CleaningOutcome, CleaningPipeline};

fn patient_row(
    id: &str,
    admission: &str,
    discharge: &str,
    age: CellValue,
    gender: CellValue,
    bill: CellValue,
    phone: &str,
    insurance: &str,
) -> Row {
    let mut row = Row::new();
    row.set("patient_id", CellValue::text(id));
    row.set("admission_date", CellValue::text(admission));
    row.set("discharge_date", CellValue::text(discharge));
    row.set("age", age);
    row.set("gender", gender);
    row.set("bill_amount", bill);
    row.set("contact_number", CellValue::text(phone));
    row.set("insurance_status", CellValue::text(insurance));
    row.set("diagnosis", CellValue::text("Flu"));
    row
}

fn messy_table() -> Table {
    let mut table = Table::new(
        [
            "patient_id",
            "admission_date",
            "discharge_date",
            "age",
            "gender",
            "bill_amount",
            "contact_number",
            "insurance_status",
            "diagnosis",
        ]
        .map(String::from)
        .to_vec(),
    );
    let row_a = patient_row(
        "P001",
        "03/04/2020",
        "2020/03/10",
        CellValue::Number(45.0),
        CellValue::text("M"),
        CellValue::Number(1250.5),
        "(123) 456-7890",
        "Yes",
    );
    // exact copy of row A: the one full-row duplicate
    table.push_row(row_a.clone());
    table.push_row(patient_row(
        "P002",
        "25-12-2019",
        "sometime in march",
        CellValue::Missing,
        CellValue::Missing,
        CellValue::Missing,
        "12345",
        "No",
    ));
    table.push_row(row_a.clone());
    // shares P001's key but differs in bill_amount: key duplicate only
    let mut row_c = row_a;
    row_c.set("bill_amount", CellValue::Number(99.0));
    table.push_row(row_c);
    table
}

fn run(table: Table) -> CleaningOutcome {
    CleaningPipeline::new(CleanConfig::patient_records())
        .run(table)
        .expect("pipeline run")
}

#[test]
fn full_run_normalizes_imputes_encodes_and_dedupes() {
    let outcome = run(messy_table());

    assert_eq!(outcome.rows_before, 4);
    assert_eq!(outcome.rows_after, 3);

    let first = &outcome.table.rows[0];
    assert_eq!(first.get("admission_date"), &CellValue::text("2020-03-04"));
    assert_eq!(first.get("discharge_date"), &CellValue::text("2020-03-10"));
    assert_eq!(first.get("contact_number"), &CellValue::text("123-456-7890"));
    assert_eq!(first.get("insurance_flag"), &CellValue::Number(1.0));

    let second = &outcome.table.rows[1];
    assert_eq!(second.get("admission_date"), &CellValue::text("2019-12-25"));
    // unparseable discharge date became missing and no strategy refills dates
    assert!(second.get("discharge_date").is_missing());
    // median of the three present ages (45, 45, 45)
    assert_eq!(second.get("age"), &CellValue::Number(45.0));
    assert_eq!(second.get("gender"), &CellValue::text("Unknown"));
    assert_eq!(second.get("bill_amount"), &CellValue::Number(0.0));
    // malformed phone preserved verbatim for manual review
    assert_eq!(second.get("contact_number"), &CellValue::text("12345"));
    assert_eq!(second.get("insurance_flag"), &CellValue::Number(0.0));
}

#[test]
fn encoding_retains_the_source_column() {
    let outcome = run(messy_table());
    assert!(outcome.table.has_column("insurance_status"));
    assert!(outcome.table.has_column("insurance_flag"));
    assert_eq!(
        outcome.table.rows[0].get("insurance_status"),
        &CellValue::text("Yes")
    );
    // derived column is appended, never replacing the source
    assert_eq!(outcome.table.columns.last().map(String::as_str), Some("insurance_flag"));
}

#[test]
fn report_covers_every_stage_in_order() {
    let outcome = run(messy_table());
    let stages: Vec<&str> = outcome
        .report
        .entries
        .iter()
        .map(|entry| entry.stage.as_str())
        .collect();
    assert_eq!(stages, ["normalize", "impute", "encode", "dedupe"]);

    let normalize = outcome.report.get("normalize").unwrap();
    assert_eq!(normalize.count("discharge_date.coerced_to_missing"), Some(1));

    let impute = outcome.report.get("impute").unwrap();
    assert_eq!(impute.count("age.missing_before"), Some(1));
    assert_eq!(impute.count("gender.missing_before"), Some(1));
    assert_eq!(impute.count("bill_amount.missing_before"), Some(1));

    let dedupe = outcome.report.get("dedupe").unwrap();
    assert_eq!(dedupe.count("full_row_duplicates"), Some(1));
    // two later rows share P001's key: the removed copy and the divergent one
    assert_eq!(dedupe.count("key_duplicates"), Some(2));
    assert_eq!(dedupe.count("rows_before"), Some(4));
    assert_eq!(dedupe.count("rows_after"), Some(3));
}

#[test]
fn second_run_is_a_fixed_point() {
    let first = run(messy_table());
    let second = run(first.table.clone());

    assert_eq!(second.table, first.table);
    assert_eq!(second.rows_before, second.rows_after);
    let dedupe = second.report.get("dedupe").unwrap();
    assert_eq!(dedupe.count("full_row_duplicates"), Some(0));
}

#[test]
fn missing_declared_column_fails_before_any_stage() {
    let mut table = messy_table();
    table.columns.retain(|c| c != "diagnosis");
    for row in &mut table.rows {
        row.cells.remove("diagnosis");
    }
    let result = CleaningPipeline::new(CleanConfig::patient_records()).run(table);
    match result {
        Err(CleanError::MissingColumn(column)) => assert_eq!(column, "diagnosis"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}
