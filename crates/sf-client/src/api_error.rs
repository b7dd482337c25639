//! API error bodies returned by Salesforce for failed requests.
//!
//! The REST API is not consistent about the shape of an error body: most
//! endpoints return a JSON array of error objects, some return a single
//! object. [`ApiErrors::decode`] accepts both, trying the array shape first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Error code Salesforce reports for an expired or invalid access token.
pub const INVALID_SESSION_ID: &str = "INVALID_SESSION_ID";

const MAX_MESSAGE_LENGTH: usize = 500;

/// A single error entry reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human readable message.
    pub message: String,
    /// Machine readable code, e.g. `INVALID_FIELD`.
    #[serde(rename = "errorCode", alias = "error_code")]
    pub error_code: String,
    /// Fields the error applies to, when the API reports them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl ApiError {
    /// Create an error entry without field references.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_code: error_code.into(),
            fields: Vec::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.error_code, self.message)
    }
}

/// Ordered, non-empty list of errors decoded from one response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrors(Vec<ApiError>);

impl ApiErrors {
    /// Wrap a list of errors. Returns `None` if the list is empty.
    pub fn new(errors: Vec<ApiError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Decode an error body, accepting either a JSON array of error objects
    /// or a single error object. Returns `None` for anything else, including
    /// an empty array.
    pub fn decode(body: &[u8]) -> Option<Self> {
        if let Ok(errors) = serde_json::from_slice::<Vec<ApiError>>(body) {
            if !errors.is_empty() {
                return Some(Self::sanitized(errors));
            }
        }

        if let Ok(error) = serde_json::from_slice::<ApiError>(body) {
            return Some(Self::sanitized(vec![error]));
        }

        None
    }

    fn sanitized(errors: Vec<ApiError>) -> Self {
        Self(
            errors
                .into_iter()
                .map(|mut e| {
                    e.message = sanitize_error_message(&e.message);
                    e
                })
                .collect(),
        )
    }

    /// The first reported error.
    pub fn first(&self) -> &ApiError {
        &self.0[0]
    }

    /// Returns true if any entry carries the given error code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.0.iter().any(|e| e.error_code == code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ApiError> {
        self.0.iter()
    }


    pub fn into_vec(self) -> Vec<ApiError> {
        self.0
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ApiErrors {
    type Item = &'a ApiError;
    type IntoIter = std::slice::Iter<'a, ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Convert a non-2xx response body into an error.
pub(crate) fn error_from_body(status: u16, body: &[u8]) -> Error {
    if let Some(errors) = ApiErrors::decode(body) {
        return Error::new(ErrorKind::Api { status, errors });
    }

    let text = String::from_utf8_lossy(body);
    let message = if text.trim().is_empty() {
        default_reason(status).to_string()
    } else {
        sanitize_error_message(&text)
    };

    Error::new(ErrorKind::Http { status, message })
}

fn default_reason(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status")
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// - Removes anything that looks like an access token
/// - Removes session IDs
/// - Truncates messages longer than 500 bytes
pub fn sanitize_error_message(message: &str) -> String {
    // Salesforce tokens start with the org id ("00D..."), then "!" and the secret part.
    let token_pattern = regex_lite::Regex::new(r"00[A-Za-z0-9]{13,}[!][A-Za-z0-9_.]+")
        .expect("token pattern is valid");
    let session_pattern =
        regex_lite::Regex::new(r"sid=[A-Za-z0-9]{20,}").expect("session pattern is valid");

    let mut sanitized = token_pattern
        .replace_all(message, "[REDACTED_TOKEN]")
        .to_string();
    sanitized = session_pattern
        .replace_all(&sanitized, "sid=[REDACTED]")
        .to_string();

    if sanitized.len() > MAX_MESSAGE_LENGTH {
        let mut end = MAX_MESSAGE_LENGTH;
        while !sanitized.is_char_boundary(end) {
            end -= 1;
        }
        sanitized.truncate(end);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
