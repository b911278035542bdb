//! User domain entity and related types.
//!
//! Users are schemaless documents: only `name` and `email` are enforced,
//! every other field is stored and returned untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::config::REQUIRED_USER_FIELDS;
use crate::errors::{AppError, AppResult};

use super::Validate;

/// User document as received from clients and as returned from the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDocument(Map<String, Value>);

impl UserDocument {
    /// Wrap an existing JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a single field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow all fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Required fields whose value is absent or falsy
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_USER_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.get(field).is_some_and(is_truthy))
            .collect()
    }
}

impl Validate for UserDocument {
    fn validate(&self) -> AppResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(?missing, "Rejecting user document");
            Err(AppError::MissingFields)
        }
    }
}

/// Whether a JSON value counts as present.
///
/// `null`, `false`, zero, `""`, `[]` and `{}` are all treated as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Create user request (documentation only; extra fields are accepted)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> UserDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_document_passes() {
        let user = doc(json!({"name": "John", "email": "john@example.com"}));
        assert!(user.validate().is_ok());
        assert!(user.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_name_reported() {
        let user = doc(json!({"email": "john@example.com"}));
        assert_eq!(user.missing_fields(), vec!["name"]);
        assert!(matches!(user.validate(), Err(AppError::MissingFields)));
    }

    #[test]
    fn test_empty_email_reported() {
        let user = doc(json!({"name": "John", "email": ""}));
        assert_eq!(user.missing_fields(), vec!["email"]);
    }

    #[test]
    fn test_both_missing_reported_in_order() {
        let user = doc(json!({}));
        assert_eq!(user.missing_fields(), vec!["name", "email"]);
    }

    #[test]
    fn test_non_string_truthy_values_pass() {
        let user = doc(json!({"name": 42, "email": true}));
        assert!(user.validate().is_ok());

        let user = doc(json!({"name": ["a"], "email": {"addr": "x"}}));
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_falsy_values() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
            let user = doc(json!({"name": falsy, "email": "john@example.com"}));
            assert!(user.validate().is_err());
        }
    }

    #[test]
    fn test_truthy_values() {
        for truthy in [json!(true), json!(-1), json!(0.5), json!(" "), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_extra_fields_preserved() {
        let user = doc(json!({"name": "John", "email": "j@x.io", "age": 30}));
        assert_eq!(user.get("age"), Some(&json!(30)));
        assert_eq!(user.fields().len(), 3);
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(serde_json::from_value::<UserDocument>(json!(["John"])).is_err());
        assert!(serde_json::from_value::<UserDocument>(json!(null)).is_err());
    }

    #[test]
    fn test_serializes_transparently() {
        let user = doc(json!({"name": "John", "email": "john@example.com"}));
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({"name": "John", "email": "john@example.com"}));
    }
}
