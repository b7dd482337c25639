//! Transport configuration.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Settings for [`SfHttpClient`](crate::SfHttpClient).
///
/// `timeout` bounds each physical request, the login's token request
/// included. It is the only deadline the client applies; there are no
/// retries to budget for beyond the single re-login.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// How long an unused pooled connection is kept. `None` keeps it forever.
    pub idle_timeout: Option<Duration>,
    pub max_idle_per_host: usize,
    pub user_agent: String,
    /// Advertise gzip and deflate support.
    pub accept_compressed: bool,
    /// Emit a debug event per request and response.
    pub log_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Some(Duration::from_secs(90)),
            max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            log_requests: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]. Unset values keep their defaults.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.idle_timeout = timeout;
        self
    }

    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.config.max_idle_per_host = max;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn accept_compressed(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    pub fn log_requests(mut self, enabled: bool) -> Self {
        self.config.log_requests = enabled;
        self
    }

    /// Check and return the configuration.
    ///
    /// Zero timeouts and an empty user agent are rejected.
    pub fn build(self) -> Result<ClientConfig> {
        let config = self.config;
        if config.timeout.is_zero() {
            return Err(config_error("timeout must be greater than zero"));
        }
        if config.connect_timeout.is_zero() {
            return Err(config_error("connect timeout must be greater than zero"));
        }
        if config.user_agent.trim().is_empty() {
            return Err(config_error("user agent must not be empty"));
        }
        Ok(config)
    }
}

fn config_error(message: &str) -> Error {
    Error::new(ErrorKind::Config(message.to_string()))
}
