use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

pub struct DatasetReader;

impl DatasetReader {
    /// Read a dataset file whose root must be a JSON object.
    pub async fn read_document(path: &Path) -> Result<Map<String, Value>> {
        let content = fs::read_to_string(path)
            .await
            .context(format!("Failed to read dataset: {:?}", path))?;

        let value: Value = serde_json::from_str(&content)
            .context(format!("Failed to parse dataset: {:?}", path))?;

        match value {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!(
                "Dataset {:?} must be a JSON object, found {}",
                path,
                json_kind(&other)
            ),
        }
    }

    /// Read the array stored under `field`. A missing field yields no items.
    pub async fn read_collection(path: &Path, field: &str) -> Result<Vec<Value>> {
        let mut document = Self::read_document(path).await?;

        match document.remove(field) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => anyhow::bail!(
                "Field '{}' in {:?} must be an array, found {}",
                field,
                path,
                json_kind(&other)
            ),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
