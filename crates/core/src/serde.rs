//! Serde helper functions for request deserialization.
//!
//! Editors submit empty strings for fields they left blank, so required
//! text fields and query parameters treat an empty string as `None`.
//! Whitespace is content and is kept.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserialize an optional positive number from a query-string value.
///
/// Missing, non-numeric and zero values all become `None`, so callers can
/// fall back to their own default.
pub fn deserialize_optional_positive<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<u32>().ok()).filter(|n| *n > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_positive")]
        number_field: Option<u32>,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let json = r#"{"string_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_keeps_whitespace() {
        let json = r#"{"string_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("   ".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_null() {
        let json = r#"{"string_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"string_field": "hello"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_missing() {
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_positive_valid() {
        let json = r#"{"number_field": "3"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.number_field, Some(3));
    }

    #[test]
    fn test_deserialize_optional_positive_zero_and_garbage() {
        let zero: TestStruct = serde_json::from_str(r#"{"number_field": "0"}"#).unwrap();
        assert_eq!(zero.number_field, None);

        let garbage: TestStruct = serde_json::from_str(r#"{"number_field": "abc"}"#).unwrap();
        assert_eq!(garbage.number_field, None);

        let negative: TestStruct = serde_json::from_str(r#"{"number_field": "-2"}"#).unwrap();
        assert_eq!(negative.number_field, None);
    }
}
