//! Text fields that tolerate `null` and non-string JSON values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use validator::ValidationError;

/// Raw JSON value of a required text field.
///
/// An absent key and an explicit `null` both land in `Missing`, so they reach
/// validation instead of failing the JSON extractor.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum TextField {
    #[default]
    Missing,
    Text(String),
    Other(Value),
}

impl TextField {
    /// The string value, if the field held one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TextField::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            TextField::Missing => true,
            TextField::Text(text) => text.is_empty(),
            TextField::Other(_) => false,
        }
    }
}

impl<'de> Deserialize<'de> for TextField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => TextField::Missing,
            Value::String(text) => TextField::Text(text),
            other => TextField::Other(other),
        })
    }
}

impl Serialize for TextField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TextField::Missing => serializer.serialize_none(),
            TextField::Text(text) => serializer.serialize_str(text),
            TextField::Other(value) => value.serialize(serializer),
        }
    }
}

/// Validator for `#[validate(custom(...))]`: fails on absent, `null` or `""`.
pub fn required(value: &TextField) -> Result<(), ValidationError> {
    if value.is_missing() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        field: TextField,
    }

    fn parse(value: Value) -> TextField {
        serde_json::from_value::<Body>(value).unwrap().field
    }

    #[test]
    fn test_absent_and_null_are_missing() {
        assert_eq!(parse(json!({})), TextField::Missing);
        assert_eq!(parse(json!({ "field": null })), TextField::Missing);
        assert!(required(&TextField::Missing).is_err());
    }

    #[test]
    fn test_empty_string_is_missing() {
        let field = parse(json!({ "field": "" }));
        assert_eq!(field.as_text(), Some(""));
        assert!(field.is_missing());
    }

    #[test]
    fn test_non_string_is_present_but_not_text() {
        let field = parse(json!({ "field": 42 }));
        assert_eq!(field, TextField::Other(json!(42)));
        assert_eq!(field.as_text(), None);
        assert!(required(&field).is_ok());
    }
}
