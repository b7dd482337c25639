//! Authenticated session.
//!
//! A [`Session`] logs in with the username-password flow, caches the access
//! token and instance URL, and sends authenticated requests. When the API
//! rejects the cached token, the session logs in again and retries the
//! request exactly once.
//!
//! ## Concurrency
//!
//! A session can be shared between tasks (`Arc<Session<_>>`). The token and
//! instance URL are replaced together as one value, and only by a successful
//! login. Logins are serialized: a caller that hits an authorization failure
//! passes the token it used, and if another caller replaced that token while
//! it waited for the login lock, it reuses the new token instead of logging
//! in again.

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};

use sforce_client::{ClientConfig, HttpTransport, RequestBuilder, RequestMethod, Response, SfHttpClient};

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::oauth::{handle_token_response, password_token_request};

/// Token and instance URL issued by one login.
#[derive(Clone)]
struct AuthState {
    access_token: String,
    instance_url: String,
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("access_token", &"[REDACTED]")
            .field("instance_url", &self.instance_url)
            .finish()
    }
}

/// Progress of one logical request.
enum SendState {
    NeedLogin,
    HaveToken(AuthState),
    RetryingAfterAuthFailure(AuthState),
}

/// Authenticated session against one Salesforce org.
pub struct Session<T = SfHttpClient> {
    transport: T,
    login_url: String,
    api_version: String,
    credentials: Credentials,
    auth: RwLock<Option<AuthState>>,
    login_lock: Mutex<()>,
}

impl<T> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("login_url", &self.login_url)
            .field("api_version", &self.api_version)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl Session<SfHttpClient> {
    /// Create a session using the default HTTP client.
    ///
    /// No request is made until the first [`login`](Self::login) or
    /// [`send`](Self::send).
    pub fn new(
        login_url: impl Into<String>,
        api_version: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        Self::with_config(login_url, api_version, credentials, ClientConfig::default())
    }

    /// Create a session with custom HTTP configuration.
    pub fn with_config(
        login_url: impl Into<String>,
        api_version: impl Into<String>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = SfHttpClient::new(config)?;
        Self::with_transport(transport, login_url, api_version, credentials)
    }
}

impl<T: HttpTransport> Session<T> {
    /// Create a session that sends through the given transport.
    pub fn with_transport(
        transport: T,
        login_url: impl Into<String>,
        api_version: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let login_url = login_url.into();
        url::Url::parse(&login_url)?;

        Ok(Self {
            transport,
            login_url: login_url.trim_end_matches('/').to_string(),
            api_version: normalize_api_version(&api_version.into())?,
            credentials,
            auth: RwLock::new(None),
            login_lock: Mutex::new(()),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// API version as used in resource paths, e.g. `v62.0`.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The cached access token, if logged in.
    pub async fn access_token(&self) -> Option<String> {
        self.auth.read().await.as_ref().map(|a| a.access_token.clone())
    }

    /// The cached instance URL, if logged in.
    pub async fn instance_url(&self) -> Option<String> {
        self.auth.read().await.as_ref().map(|a| a.instance_url.clone())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.auth.read().await.is_some()
    }

    /// Log in and replace the cached token and instance URL.
    ///
    /// On failure the previously cached values, if any, are kept.
    pub async fn login(&self) -> Result<()> {
        let _guard = self.login_lock.lock().await;
        self.login_locked().await.map(|_| ())
    }

    /// Send an authenticated request to `path`, relative to
    /// `{instance_url}/services/data/{api_version}/`.
    ///
    /// Logs in first if there is no cached token. If the API rejects the
    /// token, logs in once more and retries once; a second rejection is
    /// returned as the error. Any other non-2xx response is decoded into an
    /// error without retrying. A 2xx response is returned undecoded.
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn send(
        &self,
        method: RequestMethod,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let mut state = match self.cached().await {
            Some(auth) => SendState::HaveToken(auth),
            None => SendState::NeedLogin,
        };

        loop {
            state = match state {
                SendState::NeedLogin => SendState::HaveToken(self.refresh(None).await?),
                SendState::HaveToken(auth) => {
                    let response = self.execute(&auth, method, path, body).await?;
                    if !response.is_auth_failure() {
                        return Ok(response.error_for_status()?);
                    }
                    warn!(status = response.status(), "Session rejected, logging in again");
                    SendState::RetryingAfterAuthFailure(
                        self.refresh(Some(&auth.access_token)).await?,
                    )
                }
                SendState::RetryingAfterAuthFailure(auth) => {
                    let response = self.execute(&auth, method, path, body).await?;
                    return Ok(response.error_for_status()?);
                }
            };
        }
    }

    async fn cached(&self) -> Option<AuthState> {
        self.auth.read().await.clone()
    }

    /// Obtain a token newer than `stale`, logging in only if nobody else
    /// already did.
    async fn refresh(&self, stale: Option<&str>) -> Result<AuthState> {
        let _guard = self.login_lock.lock().await;

        let current = self.cached().await;
        if let Some(current) = current {
            if stale != Some(current.access_token.as_str()) {
                debug!("Reusing token from a concurrent login");
                return Ok(current);
            }
        }

        self.login_locked().await
    }

    /// Caller must hold `login_lock`.
    #[instrument(skip(self), fields(login_url = %self.login_url))]
    async fn login_locked(&self) -> Result<AuthState> {
        let request = password_token_request(&self.login_url, &self.credentials)?;
        let response = self.transport.execute(request).await?;
        let token = handle_token_response(response)?;

        let state = AuthState {
            access_token: token.access_token,
            instance_url: token.instance_url.trim_end_matches('/').to_string(),
        };
        *self.auth.write().await = Some(state.clone());

        info!(instance_url = %state.instance_url, "Logged in");
        Ok(state)
    }

    async fn execute(
        &self,
        auth: &AuthState,
        method: RequestMethod,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let url = format!(
            "{}/services/data/{}/{}",
            auth.instance_url,
            self.api_version,
            path.trim_start_matches('/')
        );

        let mut request = RequestBuilder::new(method, url)
            .bearer_auth(&auth.access_token)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json_value(body.clone());
        }

        let response = self.transport.execute(request).await?;
        if let Some(usage) = response.api_usage() {
            debug!(used = usage.used, limit = usage.limit, "API usage");
        }
        Ok(response)
    }
}

/// `62.0` becomes `v62.0`; anything else is used as given.
fn normalize_api_version(version: &str) -> Result<String> {
    let version = version.trim().trim_matches('/');
    if version.is_empty() {
        return Err(Error::new(ErrorKind::Config(
            "api version is required".to_string(),
        )));
    }
    if version.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(format!("v{version}"))
    } else {
        Ok(version.to_string())
    }
}
