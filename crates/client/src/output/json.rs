//! JSON output formatting.

use osctl_core::FieldValue;
use serde_json::{Map, Value};

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Rows as an array of objects keyed by column header.
pub fn rows_to_json<I>(headers: &[&str], rows: I) -> Value
where
    I: Iterator<Item = Vec<String>>,
{
    Value::Array(
        rows.map(|row| {
            let object: Map<String, Value> = headers
                .iter()
                .zip(row)
                .map(|(header, cell)| (header.to_string(), Value::String(cell)))
                .collect();
            Value::Object(object)
        })
        .collect(),
    )
}

/// Attribute pairs as a single object.
pub fn fields_to_json(fields: &[(&str, FieldValue)]) -> Value {
    let object: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                serde_json::to_value(value).unwrap_or(Value::Null),
            )
        })
        .collect();
    Value::Object(object)
}
