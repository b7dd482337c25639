//! HTTP transport.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder};
use crate::response::Response;

/// Executes one physical HTTP request.
///
/// Implementations must not retry and must return every response that was
/// received, whatever its status; only failures that produced no response
/// (malformed URL, connect, timeout, unreadable body) are errors.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: RequestBuilder) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: HttpTransport> HttpTransport for Arc<T> {
    fn execute(&self, request: RequestBuilder) -> impl Future<Output = Result<Response>> + Send {
        (**self).execute(request)
    }
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct SfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SfHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.idle_timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn execute_once(&self, request: RequestBuilder) -> Result<Response> {
        let url = url::Url::parse(&request.url)?;
        let mut req = self.inner.request(request.method.to_reqwest(), url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        req = match request.body {
            Some(RequestBody::Json(value)) => req.body(serde_json::to_vec(&value)?),
            Some(RequestBody::Form(form)) => req.body(form),
            None => req,
        };

        if self.config.log_requests {
            debug!("Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response.bytes().await?;

        if self.config.log_requests {
            if (200..300).contains(&status) {
                debug!(status, content_length = body.len(), "Response received");
            } else {
                info!(status, content_length = body.len(), "Non-success response");
            }
        }

        Ok(Response::new(status, headers, body))
    }
}

impl HttpTransport for SfHttpClient {
    fn execute(&self, request: RequestBuilder) -> impl Future<Output = Result<Response>> + Send {
        self.execute_once(request)
    }
}
