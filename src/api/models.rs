use serde_json::{Map, Value};

use crate::errors::PlagiarismError;

pub const ORIGINAL_TEXT: &str = "original_text";
pub const SUSPICIOUS_TEXT: &str = "suspicious_text";

/// The two texts of a `/plagiarism/possibility` request.
///
/// Extracted by hand from the raw JSON object so that the remaining fields
/// can be echoed back untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PossibilityRequest {
    pub original_text: String,
    pub suspicious_text: String,
}

impl PossibilityRequest {
    pub fn from_json(body: &Value) -> Result<Self, PlagiarismError> {
        let obj = body.as_object().ok_or_else(|| {
            PlagiarismError::InvalidInput("request body must be a JSON object".into())
        })?;

        Ok(Self {
            original_text: required_text(obj, ORIGINAL_TEXT)?.to_string(),
            suspicious_text: required_text(obj, SUSPICIOUS_TEXT)?.to_string(),
        })
    }
}

fn required_text<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a str, PlagiarismError> {
    match obj.get(field) {
        Some(Value::String(text)) => Ok(text),
        Some(Value::Null) | None => Err(PlagiarismError::InvalidInput(format!(
            "missing required field '{}'",
            field
        ))),
        Some(other) => Err(PlagiarismError::InvalidInput(format!(
            "field '{}' must be a string, got {}",
            field,
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_both_fields_present() {
        let req = PossibilityRequest::from_json(&json!({
            "original_text": "a b",
            "suspicious_text": "c d",
            "extra": 1
        }))
        .unwrap();
        assert_eq!(req.original_text, "a b");
        assert_eq!(req.suspicious_text, "c d");
    }

    #[test]
    fn test_missing_field() {
        let err = PossibilityRequest::from_json(&json!({"original_text": "a"})).unwrap_err();
        assert!(err.to_string().contains("suspicious_text"));
        assert!(matches!(err, PlagiarismError::InvalidInput(_)));
    }

    #[test]
    fn test_null_field() {
        let err = PossibilityRequest::from_json(&json!({
            "original_text": null,
            "suspicious_text": "b"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("original_text"));
    }

    #[test]
    fn test_non_string_field() {
        let err = PossibilityRequest::from_json(&json!({
            "original_text": "a",
            "suspicious_text": 42
        }))
        .unwrap_err();
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_non_object_body() {
        assert!(PossibilityRequest::from_json(&json!(["a", "b"])).is_err());
    }

    #[test]
    fn test_empty_strings_are_valid() {
        let req = PossibilityRequest::from_json(&json!({
            "original_text": "",
            "suspicious_text": ""
        }))
        .unwrap();
        assert!(req.original_text.is_empty());
    }
}
