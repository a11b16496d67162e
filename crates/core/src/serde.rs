//! Serde helper functions for service responses.
//!
//! Identity services send empty strings for unset optional attributes and
//! compute services send timestamps with or without a zone suffix.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional timestamp.
/// Accepts RFC 3339 or a zone-less `YYYY-MM-DDTHH:MM:SS`, read as UTC.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.and_utc())
            })
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
        time_field: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": ""}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }

    #[test]
    fn test_whitespace_string_is_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": "   "}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }

    #[test]
    fn test_null_and_missing_are_none() {
        let parsed: TestStruct =
            serde_json::from_str(r#"{"string_field": null, "time_field": null}"#).unwrap();
        assert_eq!(parsed.string_field, None);
        assert_eq!(parsed.time_field, None);

        let parsed: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.string_field, None);
        assert_eq!(parsed.time_field, None);
    }

    #[test]
    fn test_string_is_kept() {
        let parsed: TestStruct =
            serde_json::from_str(r#"{"string_field": "Fab Four"}"#).unwrap();
        assert_eq!(parsed.string_field, Some("Fab Four".to_string()));
    }

    #[test]
    fn test_rfc3339_timestamp() {
        let parsed: TestStruct =
            serde_json::from_str(r#"{"time_field": "2013-05-22T14:08:39Z"}"#).unwrap();
        assert_eq!(
            parsed.time_field,
            Some(Utc.with_ymd_and_hms(2013, 5, 22, 14, 8, 39).unwrap())
        );
    }

    #[test]
    fn test_zoneless_timestamp_is_utc() {
        let parsed: TestStruct =
            serde_json::from_str(r#"{"time_field": "2013-05-22T14:08:39"}"#).unwrap();
        assert_eq!(
            parsed.time_field,
            Some(Utc.with_ymd_and_hms(2013, 5, 22, 14, 8, 39).unwrap())
        );
    }

    #[test]
    fn test_invalid_timestamp_fails() {
        let result: Result<TestStruct, _> =
            serde_json::from_str(r#"{"time_field": "yesterday"}"#);
        assert!(result.is_err());
    }
}
