//! Connected-app and user credentials for the username-password login flow.
//!
//! The client secret and password are redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};

/// Immutable login credentials: connected-app client id and secret plus the
/// resource owner's username and password. All four are required.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create credentials, rejecting empty values.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let creds = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        };

        for (name, value) in [
            ("client id", &creds.client_id),
            ("client secret", &creds.client_secret),
            ("username", &creds.username),
            ("password", &creds.password),
        ] {
            if value.is_empty() {
                return Err(Error::new(ErrorKind::InvalidCredentials(format!(
                    "{name} is required"
                ))));
            }
        }

        Ok(creds)
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `SF_CLIENT_ID` or `SALESFORCE_CLIENT_ID`
    /// - `SF_CLIENT_SECRET` or `SALESFORCE_CLIENT_SECRET`
    /// - `SF_USERNAME` or `SALESFORCE_USERNAME`
    /// - `SF_PASSWORD` or `SALESFORCE_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::new(
            env_var("CLIENT_ID")?,
            env_var("CLIENT_SECRET")?,
            env_var("USERNAME")?,
            env_var("PASSWORD")?,
        )
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

fn env_var(suffix: &str) -> Result<String> {
    let primary = format!("SF_{suffix}");
    std::env::var(&primary)
        .or_else(|_| std::env::var(format!("SALESFORCE_{suffix}")))
        .map_err(|_| Error::new(ErrorKind::EnvVar(primary)))
}
