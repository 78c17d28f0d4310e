//! Serde helpers for the quirks of the remote JSON payloads.
//!
//! The calendar service encodes absent optional text as `""` rather than
//! omitting the field or sending `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserialize a value, treating `null` as the type's default.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Skip predicate for boolean flags that are only sent when set.
pub fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": ""}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_null() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": null}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": "hello"}"#).unwrap();
        assert_eq!(result.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_missing() {
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Counted {
        #[serde(default, deserialize_with = "deserialize_null_default")]
        count: u32,
    }

    #[test]
    fn test_deserialize_null_default() {
        let null: Counted = serde_json::from_str(r#"{"count": null}"#).unwrap();
        assert_eq!(null.count, 0);
        let missing: Counted = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(missing.count, 0);
        let set: Counted = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert_eq!(set.count, 3);
    }

    #[test]
    fn test_is_false() {
        assert!(is_false(&false));
        assert!(!is_false(&true));
    }
}
