//! # sforce-client
//!
//! HTTP transport and wire-level types for the Salesforce REST API.
//!
//! This crate provides:
//! - The [`HttpTransport`] seam and its reqwest implementation, [`SfHttpClient`]
//! - Request building with JSON and form bodies
//! - Buffered responses with status, header and body access
//! - Decoding of API error bodies (array or single object)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    sforce-rest                              │
//! │  - SObject CRUD operations, validation                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    sforce-auth::Session                     │
//! │  - Login, token cache, bearer header                        │
//! │  - One re-login and retry on 401                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpTransport (SfHttpClient)             │
//! │  - One physical request per call, no retries                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sforce_client::{HttpTransport, RequestBuilder, RequestMethod, SfHttpClient};
//!
//! let client = SfHttpClient::default_client()?;
//! let request = RequestBuilder::new(RequestMethod::Get, "https://example.com/services/data")
//!     .bearer_auth(token);
//! let versions: serde_json::Value = client.execute(request).await?.error_for_status()?.json()?;
//! ```

mod api_error;
mod client;
mod config;
mod error;
mod request;
mod response;
pub mod security;

pub use api_error::{sanitize_error_message, ApiError, ApiErrors, INVALID_SESSION_ID};
pub use client::{HttpTransport, SfHttpClient};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{ApiUsage, Response};

/// Default Salesforce API version.
pub const DEFAULT_API_VERSION: &str = "v62.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("sforce/", env!("CARGO_PKG_VERSION"));
