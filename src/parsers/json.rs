use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::FormatError;
use crate::models::Record;

/// Wire shape of one array element. Field names are matched exactly; a missing
/// field and an explicit `null` both become `None`. A repeated field keeps its
/// last value.
#[derive(Debug)]
struct JsonRecord {
    key: Option<String>,
    value: Option<String>,
}

impl<'de> Deserialize<'de> for JsonRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Later entries overwrite earlier ones with the same name
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self { key: take_text(&mut fields, "Key")?, value: take_text(&mut fields, "Value")? })
    }
}

fn take_text<E: Error>(fields: &mut Map<String, Value>, name: &str) -> Result<Option<String>, E> {
    match fields.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => {
            Err(E::custom(format!("{} must be a string or null, found {}", name, other)))
        }
    }
}

impl From<JsonRecord> for Record {
    fn from(json: JsonRecord) -> Self {
        Record::new(json.key, json.value)
    }
}

/// Parse a JSON array of `{"Key": .., "Value": ..}` objects.
///
/// Blank content yields no records and `null` array elements are skipped.
/// Unknown fields are ignored, including `key`/`VALUE` and other case variants
/// of the two recognized names. When `Key` or `Value` is repeated in one object
/// the last occurrence wins.
///
/// # Errors
///
/// Returns [`FormatError::Json`] if the content is not valid JSON, the root is not
/// an array, or `Key`/`Value` holds anything other than a string or `null`.
pub fn parse_json(content: &str) -> Result<Vec<Record>, FormatError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<Option<JsonRecord>> = serde_json::from_str(content)?;
    Ok(entries.into_iter().flatten().map(Record::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: Option<&str>, value: Option<&str>) -> Record {
        Record::new(key.map(str::to_string), value.map(str::to_string))
    }

    #[test]
    fn test_parse_json_returns_records() {
        let content = r#"[
            { "Key": "a", "Value": "b" },
            { "Key": "c", "Value": "d" }
        ]"#;
        let records = parse_json(content).unwrap();
        assert_eq!(records, vec![Record::pair("a", "b"), Record::pair("c", "d")]);
    }

    #[test]
    fn test_parse_json_empty_array() {
        assert!(parse_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_blank_content() {
        assert!(parse_json("").unwrap().is_empty());
        assert!(parse_json("   \n\t  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_missing_fields_are_absent() {
        let content = r#"[{ "Key": "c" }, { "Value": "d" }, {}]"#;
        let records = parse_json(content).unwrap();
        assert_eq!(
            records,
            vec![record(Some("c"), None), record(None, Some("d")), record(None, None)]
        );
    }

    #[test]
    fn test_parse_json_explicit_null_fields_are_absent() {
        let records = parse_json(r#"[{ "Key": null, "Value": null }]"#).unwrap();
        assert_eq!(records, vec![record(None, None)]);
    }

    #[test]
    fn test_parse_json_empty_string_is_not_absent() {
        let records = parse_json(r#"[{ "Key": "", "Value": "" }]"#).unwrap();
        assert_eq!(records, vec![Record::pair("", "")]);
        assert_ne!(records[0], record(None, None));
    }

    #[test]
    fn test_parse_json_skips_null_elements() {
        let content = r#"[{ "Key": "a", "Value": "b" }, null, { "Key": "c", "Value": "d" }]"#;
        let records = parse_json(content).unwrap();
        assert_eq!(records, vec![Record::pair("a", "b"), Record::pair("c", "d")]);

        assert!(parse_json("[null, null, null]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_ignores_extra_fields() {
        let records = parse_json(r#"[{ "Key": "a", "Value": "b", "Extra": 123 }]"#).unwrap();
        assert_eq!(records, vec![Record::pair("a", "b")]);
    }

    #[test]
    fn test_parse_json_case_mismatched_names_are_absent() {
        let content = r#"[
            { "key": "a", "value": "b" },
            { "KEY": "c", "VaLuE": "d" },
            { "Key": "e", "VaLuE": "f" },
            { "KEY": "g", "Value": "h" }
        ]"#;
        let records = parse_json(content).unwrap();
        assert_eq!(
            records,
            vec![
                record(None, None),
                record(None, None),
                record(Some("e"), None),
                record(None, Some("h")),
            ]
        );
    }

    #[test]
    fn test_parse_json_duplicate_field_last_wins() {
        let records = parse_json(r#"[{ "Key": "a", "Key": "b", "Value": "v" }]"#).unwrap();
        assert_eq!(records, vec![Record::pair("b", "v")]);

        let records = parse_json(r#"[{ "Key": "a", "Value": "v", "Value": null }]"#).unwrap();
        assert_eq!(records, vec![record(Some("a"), None)]);
    }

    #[test]
    fn test_parse_json_non_object_element() {
        let result = parse_json(r#"[{ "Key": "a", "Value": "b" }, "text"]"#);
        assert!(matches!(result, Err(FormatError::Json(_))));
    }

    #[test]
    fn test_parse_json_malformed() {
        let result = parse_json(r#"[{ "Key": "a", "Value": "b" "#);
        assert!(matches!(result, Err(FormatError::Json(_))));
    }

    #[test]
    fn test_parse_json_non_array_root() {
        let result = parse_json(r#"{ "Key": "a", "Value": "b" }"#);
        assert!(matches!(result, Err(FormatError::Json(_))));
    }

    #[test]
    fn test_parse_json_nested_object_value() {
        let result = parse_json(r#"[{ "Key": "a", "Value": { "Nested": "data" } }]"#);
        assert!(matches!(result, Err(FormatError::Json(_))));
    }

    #[test]
    fn test_parse_json_number_value() {
        let err = parse_json(r#"[{ "Key": "a", "Value": 5 }]"#).unwrap_err();
        assert!(err.to_string().contains("Value must be a string or null"));
    }

    #[test]
    fn test_parse_json_not_json_at_all() {
        let err = parse_json("not,a,valid,json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }
}
