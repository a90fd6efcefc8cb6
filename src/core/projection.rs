use crate::domain::model::Record;
use crate::utils::error::{ProjectorError, Result};
use serde_json::{Map, Value};

pub const DEFAULT_FIELDS: [&str; 2] = ["input", "output"];

pub fn default_fields() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Splits a parsed document into records. The root must be an array and
/// every element an object.
pub fn records_from_document(document: Value) -> Result<Vec<Record>> {
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(ProjectorError::schema(
                None,
                format!("document root must be an array, found {}", type_name(&other)),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(obj) => Ok(Record::new(obj)),
            other => Err(ProjectorError::schema(
                Some(index),
                format!("expected an object, found {}", type_name(&other)),
            )),
        })
        .collect()
}

/// 只保留指定欄位，依 `fields` 的順序輸出
pub fn project_record(index: usize, record: &Record, fields: &[String]) -> Result<Record> {
    let mut projected = Map::with_capacity(fields.len());
    for field in fields {
        let value = record.get(field).ok_or_else(|| {
            ProjectorError::schema(Some(index), format!("missing field '{}'", field))
        })?;
        projected.insert(field.clone(), value.clone());
    }
    Ok(Record::new(projected))
}

/// Fails on the first record that lacks a projected field.
pub fn project_records(records: &[Record], fields: &[String]) -> Result<Vec<Record>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| project_record(index, record, fields))
        .collect()
}
