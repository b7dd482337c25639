//! Buffered HTTP responses.
//!
//! The transport reads the whole body before handing the response back, so
//! a response can be inspected (status, error body) and then decoded by the
//! caller, and test transports can construct one directly.

use std::collections::HashMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::api_error::{error_from_body, ApiErrors, INVALID_SESSION_ID};
use crate::error::{Error, Result};

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Create a response. Header names are normalized to lowercase.
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Create a response with a JSON body.
    pub fn from_json(status: u16, body: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::new(status, headers, body.to_string())
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if this response reports a missing, expired or invalid
    /// session: a 401, or a failed response whose error body carries
    /// `INVALID_SESSION_ID`.
    pub fn is_auth_failure(&self) -> bool {
        if self.status == 401 {
            return true;
        }
        !self.is_success()
            && ApiErrors::decode(&self.body).is_some_and(|e| e.contains_code(INVALID_SESSION_ID))
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns true if the body is empty or whitespace only.
    pub fn is_empty_body(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// The raw body.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// The body as text (lossy UTF-8).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Pass a 2xx response through; turn anything else into an error decoded
    /// from the body.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }

    /// Decode the body as an error, regardless of status.
    pub fn into_error(self) -> Error {
        error_from_body(self.status, &self.body)
    }

    /// Get API usage limits from response headers.
    pub fn api_usage(&self) -> Option<ApiUsage> {
        // Sforce-Limit-Info: api-usage=25/15000
        let info = self.header("sforce-limit-info")?;

        for part in info.split(',') {
            if let Some(usage) = part.trim().strip_prefix("api-usage=") {
                let (used, limit) = usage.split_once('/')?;
                return Some(ApiUsage {
                    used: used.trim().parse().ok()?,
                    limit: limit.trim().parse().ok()?,
                });
            }
        }

        None
    }
}

/// API usage information from response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiUsage {
    /// Number of API calls used.
    pub used: u64,
    /// Total API call limit.
    pub limit: u64,
}

impl ApiUsage {
    /// Get the remaining API calls.
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }

    /// Get the usage percentage.
    pub fn percentage(&self) -> f64 {
        if self.limit == 0 {
            100.0
        } else {
            (self.used as f64 / self.limit as f64) * 100.0
        }
    }
}
