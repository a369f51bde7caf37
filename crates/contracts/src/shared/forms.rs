//! Form payloads and the server's validation error contract.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Flat snapshot of a form's fields taken at submit time. Values are always
/// strings, exactly as the form data API yields them; the server does its own
/// typing and validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Flat JSON object. A repeated field keeps its last value, matching the
    /// plain-object mapping the server already accepts.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.fields {
            object.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(object)
    }
}

/// Field-level validation errors from a rejected mutation:
/// `{"errors": {"<field>": ["<message>", ...]}}`.
///
/// Consumed once to render inline errors next to the offending inputs, then
/// discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrorSet {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrorSet {
    /// Parse a mutation failure body. `Some` only when the payload carries
    /// the structured `errors` mapping; anything else (plain text, JSON
    /// without `errors`, `"errors": null`) is an unstructured failure and
    /// gets the generic banner instead.
    pub fn from_body(body: &str) -> Option<Self> {
        #[derive(Deserialize)]
        struct FailureBody {
            errors: Option<BTreeMap<String, Vec<String>>>,
        }

        let parsed: FailureBody = serde_json::from_str(body).ok()?;
        parsed.errors.map(|errors| Self { errors })
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// All messages for one field joined into the single line shown under
    /// its input.
    pub fn joined_message(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(|messages| messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_serializes_to_flat_object() {
        let mut submission = FormSubmission::new();
        submission.push("account", "3");
        submission.push("amount", "120.50");
        submission.push("description", "");

        let json = submission.to_json();
        assert_eq!(json["account"], "3");
        assert_eq!(json["amount"], "120.50");
        assert_eq!(json["description"], "");
        assert_eq!(json.as_object().map(|o| o.len()), Some(3));
    }

    #[test]
    fn test_submission_repeated_field_keeps_last_value() {
        let mut submission = FormSubmission::new();
        submission.push("type", "deposit");
        submission.push("type", "withdrawal");

        let json = submission.to_json();
        assert_eq!(json["type"], "withdrawal");
        assert_eq!(json.as_object().map(|o| o.len()), Some(1));
    }

    #[test]
    fn test_error_set_parses_structured_body() {
        let set =
            ValidationErrorSet::from_body(r#"{"errors": {"quantity": ["must be positive"]}}"#)
                .unwrap();
        assert_eq!(set.fields().count(), 1);
        assert_eq!(
            set.joined_message("quantity").as_deref(),
            Some("must be positive")
        );
        assert_eq!(set.joined_message("price"), None);
    }

    #[test]
    fn test_error_set_joins_multiple_messages() {
        let set = ValidationErrorSet::from_body(
            r#"{"success": false, "errors": {"date": ["required", "invalid format"]}}"#,
        )
        .unwrap();
        assert_eq!(
            set.joined_message("date").as_deref(),
            Some("required, invalid format")
        );
    }

    #[test]
    fn test_error_set_preserves_message_order() {
        let set = ValidationErrorSet::from_body(
            r#"{"errors": {"name": ["first", "second", "third"]}}"#,
        )
        .unwrap();
        assert_eq!(
            set.joined_message("name").as_deref(),
            Some("first, second, third")
        );
    }

    #[test]
    fn test_unstructured_bodies_yield_none() {
        assert_eq!(ValidationErrorSet::from_body("Internal Server Error"), None);
        assert_eq!(ValidationErrorSet::from_body(r#"{"detail": "boom"}"#), None);
        assert_eq!(ValidationErrorSet::from_body(r#"{"errors": null}"#), None);
        assert_eq!(ValidationErrorSet::from_body(""), None);
    }

    #[test]
    fn test_empty_error_mapping_is_structured_but_empty() {
        // An empty mapping still counts as structured; the inline renderer
        // then simply has nothing to attach.
        let set = ValidationErrorSet::from_body(r#"{"errors": {}}"#).unwrap();
        assert_eq!(set.fields().count(), 0);
    }
}
