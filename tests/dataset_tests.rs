use std::collections::BTreeMap;

use serde_json::Value;

use adminportal::io::dataset::{self, DatasetError};
use adminportal::state::plans::PlanRow;

#[test]
fn test_load_rows_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planos.json");
    std::fs::write(
        &path,
        r#"[{"nome":"Acme","plano":"Premium","tipoFaturamento":"PIX"}]"#,
    )
    .unwrap();

    let rows: Vec<PlanRow> = dataset::load_rows(&path).unwrap();
    assert_eq!(rows, vec![PlanRow::new("Acme", "Premium", "PIX")]);
}

#[test]
fn test_load_rows_as_generic_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.json");
    std::fs::write(&path, r#"[{"name":"Alice","age":30},{"name":"Bob"}]"#).unwrap();

    let rows: Vec<BTreeMap<String, Value>> = dataset::load_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["age"], Value::Number(30.into()));
    assert!(!rows[1].contains_key("age"));
}

#[test]
fn test_load_rows_empty_array() {
    let rows: Vec<PlanRow> = dataset::parse_rows("[]").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_load_rows_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = dataset::load_rows::<PlanRow>(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(DatasetError::Io(_))));
}

#[test]
fn test_parse_rows_not_array() {
    let result = dataset::parse_rows::<PlanRow>(r#"{"nome":"Acme"}"#);
    assert!(matches!(result, Err(DatasetError::NotAnArray)));
}

#[test]
fn test_parse_rows_invalid_json() {
    let result = dataset::parse_rows::<PlanRow>("not json");
    assert!(matches!(result, Err(DatasetError::Parse(_))));
}

#[test]
fn test_parse_rows_reports_bad_row_index() {
    let content = r#"[
        {"nome":"Acme","plano":"Premium","tipoFaturamento":"PIX"},
        {"nome":"Globex","plano":"Básico"}
    ]"#;
    let err = dataset::parse_rows::<PlanRow>(content).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidRow { index: 1, .. }));
    assert!(err.to_string().starts_with("row 1 is not a valid record"));
}
