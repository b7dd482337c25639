//! Error types for sforce-auth.
//!
//! Error messages never include credential values.

/// Result type alias for sforce-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sforce-auth operations.
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

    /// Returns true if this is an authorization failure: a rejected login or
    /// a session the API still refused after re-login.
    pub fn is_auth_error(&self) -> bool {
        match &self.kind {
            ErrorKind::OAuth { .. } => true,
            ErrorKind::Client(kind) => kind.is_auth_error(),
            _ => false,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The token endpoint rejected the login with an OAuth error body.
    #[error("OAuth error: {error} - {description}")]
    OAuth { error: String, description: String },

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The token endpoint answered 2xx without a usable token.
    #[error("Invalid login response: {0}")]
    InvalidLoginResponse(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport or API error from the HTTP layer.
    #[error("{0}")]
    Client(sforce_client::ErrorKind),
}

impl From<sforce_client::Error> for Error {
    fn from(err: sforce_client::Error) -> Self {
        Self {
            kind: ErrorKind::Client(err.kind),
            source: err.source,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
