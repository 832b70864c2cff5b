use std::collections::BTreeMap;
use serde_json::Value;

pub type Row = BTreeMap<String, Value>;

/// Field names probed, in order, when a row is asked for its display name.
pub const NAME_FIELDS: &[&str] = &["nome", "name"];

/// Read access to the fields of a row, addressed by column key.
///
/// The table never looks at a row beyond the keys its columns name, so this is
/// the whole contract a row type has to satisfy.
pub trait TableRow {
    fn cell(&self, key: &str) -> Option<Value>;

    /// A human readable name for the row, used by the edit dialog title.
    fn display_name(&self) -> Option<String> {
        NAME_FIELDS.iter().find_map(|key| match self.cell(key) {
            Some(Value::String(name)) if !name.is_empty() => Some(name),
            _ => None,
        })
    }
}

impl TableRow for Row {
    fn cell(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

/// Formats a JSON value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Stringified cell value; missing cells become the empty string.
pub fn cell_text<T: TableRow + ?Sized>(row: &T, key: &str) -> String {
    row.cell(key)
        .as_ref()
        .map(display_value)
        .unwrap_or_default()
}
