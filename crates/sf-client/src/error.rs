//! Error types for sforce-client.

use crate::api_error::{ApiErrors, INVALID_SESSION_ID};

/// Result type alias for sforce-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sforce-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the request never produced a usable HTTP response.
    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }

    /// Returns true if this is an authorization failure (401 or invalid session).
    pub fn is_auth_error(&self) -> bool {
        self.kind.is_auth_error()
    }

    /// Returns the HTTP status code, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        self.kind.status()
    }

    /// Returns the decoded API errors, if the response body carried any.
    pub fn api_errors(&self) -> Option<&ApiErrors> {
        match &self.kind {
            ErrorKind::Api { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Non-2xx response whose body decoded as one or more API errors.
    #[error("Salesforce API error ({status}): {errors}")]
    Api { status: u16, errors: ApiErrors },

    /// Non-2xx response without a decodable API error body.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl ErrorKind {
    /// Returns true for network-level failures and malformed bodies.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout | ErrorKind::Connection(_) | ErrorKind::Json(_) | ErrorKind::Other(_)
        )
    }

    /// Returns true for a 401 or an `INVALID_SESSION_ID` error body.
    pub fn is_auth_error(&self) -> bool {
        match self {
            ErrorKind::Api { status, errors } => {
                *status == 401 || errors.contains_code(INVALID_SESSION_ID)
            }
            ErrorKind::Http { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Returns the HTTP status code carried by this kind, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ErrorKind::Api { status, .. } | ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Other(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
