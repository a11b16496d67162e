//! Resource traits shared by every remote entity.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// A remote entity addressable by identifier or name.
pub trait Resource {
    /// Human-readable kind used in error messages ("user", "role", ...).
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn name(&self) -> &str;
}

/// A single attribute value read off a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    /// Wraps an optional string, dropping `None`.
    pub fn text(value: Option<&str>) -> Option<Self> {
        value.map(|v| FieldValue::Text(v.to_string()))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Flag(true) => f.write_str("True"),
            FieldValue::Flag(false) => f.write_str("False"),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Typed attribute access, one match arm per attribute.
///
/// Attribute names are the normalized form used by column projection:
/// lower-case with underscores (`project_id`, `domain_id`).
pub trait Fields {
    /// Every attribute this type can expose, in no particular order.
    const FIELDS: &'static [&'static str];

    /// Returns the attribute value, or `None` when the resource does not carry it.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Read access to one resource type on a remote service.
///
/// `get` returns `Ok(None)` when the service reports the identifier as
/// unknown; every other failure is an error.
#[async_trait]
pub trait Collection<T>: Send + Sync {
    /// Fetches a resource by identifier.
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// Lists every resource in the collection.
    async fn list(&self) -> Result<Vec<T>>;

    /// Whether `token` is syntactically a valid identifier for this collection.
    ///
    /// Empty, `.` and `..` tokens can never be a path segment, so they go
    /// straight to the name listing.
    fn accepts_id(&self, token: &str) -> bool {
        !matches!(token, "" | "." | "..")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("paul").to_string(), "paul");
        assert_eq!(FieldValue::from(true).to_string(), "True");
        assert_eq!(FieldValue::from(false).to_string(), "False");
        assert_eq!(
            FieldValue::List(vec!["10.0.0.3".to_string(), "fd00::3".to_string()]).to_string(),
            "[10.0.0.3, fd00::3]"
        );
    }

    #[test]
    fn test_field_value_text_drops_none() {
        assert_eq!(FieldValue::text(None), None);
        assert_eq!(
            FieldValue::text(Some("Sir Paul")),
            Some(FieldValue::Text("Sir Paul".to_string()))
        );
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            FieldValue::from("a1"),
            FieldValue::from(true),
            FieldValue::List(vec!["x".to_string()]),
        ])
        .unwrap();
        assert_eq!(json, r#"["a1",true,["x"]]"#);
    }
}
