use prc_model::{
    CellValue, CleanConfig, CleanError, ColumnKind, ColumnSpec, EncodeRule, Row, Schema, Table,
};

fn row(cells: &[(&str, CellValue)]) -> Row {
    let mut row = Row::new();
    for (name, value) in cells {
        row.set(*name, value.clone());
    }
    row
}

#[test]
fn table_round_trips_through_json() {
    let mut table = Table::new(vec!["patient_id".into(), "age".into()]);
    table.push_row(row(&[
        ("patient_id", CellValue::text("P001")),
        ("age", CellValue::Number(42.0)),
    ]));
    table.push_row(row(&[
        ("patient_id", CellValue::text("P002")),
        ("age", CellValue::Missing),
    ]));

    let json = serde_json::to_string(&table).expect("serialize table");
    let round: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
    assert!(round.rows[1].get("age").is_missing());
}

#[test]
fn default_config_passes_validation() {
    let config = CleanConfig::patient_records();
    config.validate().expect("default config is valid");
    assert_eq!(config.date_columns(), ["admission_date", "discharge_date"]);
    assert_eq!(config.phone_columns(), ["contact_number"]);
}

#[test]
fn validation_rejects_unknown_impute_column() {
    let mut config = CleanConfig::patient_records();
    config.impute[0].column = "weight".to_string();
    match config.validate() {
        Err(CleanError::MissingColumn(column)) => assert_eq!(column, "weight"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn validation_rejects_encode_target_shadowing_schema() {
    let mut config = CleanConfig::patient_records();
    config.encode[0].target = "gender".to_string();
    assert!(matches!(
        config.validate(),
        Err(CleanError::EncodeTargetCollision { .. })
    ));
}

#[test]
fn validation_rejects_empty_encode_mapping() {
    let schema = Schema::new(vec![
        ColumnSpec::new("patient_id", ColumnKind::Identifier),
        ColumnSpec::new("insurance_status", ColumnKind::Categorical),
    ]);
    let config = CleanConfig {
        schema,
        key_column: "patient_id".to_string(),
        date_formats: vec!["%m/%d/%Y".to_string()],
        impute: vec![],
        encode: vec![EncodeRule {
            source: "insurance_status".to_string(),
            target: "insurance_flag".to_string(),
            mapping: Default::default(),
        }],
    };
    assert!(matches!(
        config.validate(),
        Err(CleanError::EmptyMapping { .. })
    ));
}
