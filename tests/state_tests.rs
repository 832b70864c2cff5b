use std::collections::BTreeMap;
use serde_json::Value;

use adminportal::state::data_model::{self, Row, TableRow};

#[test]
fn test_row_cell_lookup() {
    let row: Row = BTreeMap::from([("nome".to_string(), Value::String("Acme".to_string()))]);
    assert_eq!(row.cell("nome"), Some(Value::String("Acme".to_string())));
    assert_eq!(row.cell("plano"), None);
}

#[test]
fn test_display_name_probes_name_fields() {
    let nome: Row = BTreeMap::from([("nome".to_string(), Value::String("Acme".to_string()))]);
    assert_eq!(nome.display_name(), Some("Acme".to_string()));

    let name: Row = BTreeMap::from([("name".to_string(), Value::String("Globex".to_string()))]);
    assert_eq!(name.display_name(), Some("Globex".to_string()));

    let empty: Row = BTreeMap::from([
        ("nome".to_string(), Value::String(String::new())),
        ("name".to_string(), Value::String("Initech".to_string())),
    ]);
    assert_eq!(empty.display_name(), Some("Initech".to_string()));

    let numeric: Row = BTreeMap::from([("nome".to_string(), Value::Number(7.into()))]);
    assert_eq!(numeric.display_name(), None);
}

#[test]
fn test_cell_text_of_missing_value_is_empty() {
    let row: Row = BTreeMap::from([("ativo".to_string(), Value::Bool(true))]);
    assert_eq!(data_model::cell_text(&row, "ativo"), "true");
    assert_eq!(data_model::cell_text(&row, "nome"), "");
}

#[test]
fn test_display_value_string() {
    let v = Value::String("hello".to_string());
    assert_eq!(data_model::display_value(&v), "hello");
}

#[test]
fn test_display_value_number() {
    let v = Value::Number(42.into());
    assert_eq!(data_model::display_value(&v), "42");
}

#[test]
fn test_display_value_bool() {
    assert_eq!(data_model::display_value(&Value::Bool(true)), "true");
    assert_eq!(data_model::display_value(&Value::Bool(false)), "false");
}

#[test]
fn test_display_value_null() {
    assert_eq!(data_model::display_value(&Value::Null), "");
}

#[test]
fn test_display_value_array_and_object() {
    let array: Value = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(data_model::display_value(&array), "[1,2,3]");

    let object: Value = serde_json::from_str(r#"{"key":"val"}"#).unwrap();
    assert_eq!(data_model::display_value(&object), r#"{"key":"val"}"#);
}
