use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("JSON root is not an array")]
    NotAnArray,

    #[error("row {index} is not a valid record: {source}")]
    InvalidRow {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of records from `path`.
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let content = fs::read_to_string(path)?;
    let rows = parse_rows(&content)?;
    tracing::info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parses a JSON array of records, reporting the first row that does not fit `T`.
pub fn parse_rows<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, DatasetError> {
    let value: Value = serde_json::from_str(content)?;

    let Value::Array(items) = value else {
        return Err(DatasetError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| DatasetError::InvalidRow { index, source })
        })
        .collect()
}
