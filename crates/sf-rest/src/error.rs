//! Error types for sforce-rest.

use crate::validation::ValidationError;

/// Result type alias for sforce-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sforce-rest operations.
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

    /// Returns true if the input was rejected before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    /// Returns true for login failures and sessions rejected after re-login.
    pub fn is_auth_error(&self) -> bool {
        match &self.kind {
            ErrorKind::Auth(kind) => matches!(kind, sforce_auth::ErrorKind::OAuth { .. }),
            ErrorKind::Client(kind) => kind.is_auth_error(),
            ErrorKind::Validation(_) => false,
        }
    }

    /// Returns true for network-level failures and malformed bodies.
    pub fn is_transport(&self) -> bool {
        match &self.kind {
            ErrorKind::Client(kind) => kind.is_transport(),
            _ => false,
        }
    }

    /// HTTP status of the failed response, if any.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Client(kind) => kind.status(),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Caller input failed a precondition.
    #[error("{0}")]
    Validation(ValidationError),

    /// Login or session error.
    #[error("{0}")]
    Auth(sforce_auth::ErrorKind),

    /// Transport or API error.
    #[error("{0}")]
    Client(sforce_client::ErrorKind),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::new(ErrorKind::Validation(err))
    }
}

impl From<sforce_auth::Error> for Error {
    fn from(err: sforce_auth::Error) -> Self {
        // Transport and API errors surface the same way whether or not they
        // passed through the session.
        let kind = match err.kind {
            sforce_auth::ErrorKind::Client(kind) => ErrorKind::Client(kind),
            other => ErrorKind::Auth(other),
        };
        Self {
            kind,
            source: err.source,
        }
    }
}

impl From<sforce_client::Error> for Error {
    fn from(err: sforce_client::Error) -> Self {
        Self {
            kind: ErrorKind::Client(err.kind),
            source: err.source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        sforce_client::Error::from(err).into()
    }
}
