//! Record and result types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::validation::ValidationError;

/// A generic record: field name to JSON value, with no fixed schema.
pub type SObject = serde_json::Map<String, serde_json::Value>;

/// Result of a create or upsert operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UpsertResult {
    pub id: String,
    pub success: bool,
    /// Only reported by upserts that inserted a new record.
    #[serde(default)]
    pub created: bool,
    /// Diagnostic entries as returned by the API.
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

impl UpsertResult {
    /// Result for an update the API acknowledged without a body.
    pub(crate) fn updated(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            success: true,
            created: false,
            errors: Vec::new(),
        }
    }
}

/// Parse raw JSON into a record.
///
/// Empty input and `null` are treated as a missing record. Any JSON value
/// other than an object is rejected.
///
/// ```
/// let record = sforce_rest::parse_sobject(br#"{"Name": "Acme"}"#).unwrap();
/// assert_eq!(record["Name"], "Acme");
///
/// let err = sforce_rest::parse_sobject(b"  ").unwrap_err();
/// assert_eq!(err.to_string(), "sobject value is required");
/// ```
pub fn parse_sobject(bytes: &[u8]) -> Result<SObject> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::SObjectValue.into());
    }

    match serde_json::from_slice::<serde_json::Value>(bytes)? {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Err(ValidationError::SObjectValue.into()),
        other => Err(Error::new(ErrorKind::Client(sforce_client::ErrorKind::Json(
            format!("expected a JSON object, found {}", kind_name(&other)),
        )))),
    }
}

fn kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
