//! # sforce
//!
//! Salesforce REST client for Rust: single-record SObject operations over a
//! session that logs in with the username-password flow and logs in again
//! once when the token expires.
//!
//! ## Security
//!
//! - Tokens, client secrets and passwords are redacted in Debug output
//! - Tracing spans skip credentials and request bodies
//! - Error messages taken from response bodies are sanitized
//!
//! ## Crates
//!
//! - **sforce-client** - HTTP transport, request and response types, API error decoding
//! - **sforce-auth** - Credentials, login, session token cache
//! - **sforce-rest** - SObject create, get, upsert and delete
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sforce::{Credentials, SalesforceRestClient, PRODUCTION_LOGIN_URL};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SalesforceRestClient::connect(
//!     PRODUCTION_LOGIN_URL,
//!     sforce::client::DEFAULT_API_VERSION,
//!     Credentials::from_env()?,
//! )?;
//!
//! let account = client.get_sobject("Account", "001xx000003DGb2AAG").await?;
//! println!("{}", account["Name"]);
//! # Ok(())
//! # }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use sforce_auth as auth;
#[cfg(feature = "client")]
pub use sforce_client as client;
#[cfg(feature = "rest")]
pub use sforce_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use sforce_auth::{Credentials, Session, PRODUCTION_LOGIN_URL, SANDBOX_LOGIN_URL};
#[cfg(feature = "client")]
pub use sforce_client::{ClientConfig, HttpTransport, SfHttpClient};
#[cfg(feature = "rest")]
pub use sforce_rest::{parse_sobject, SObject, SalesforceRestClient, UpsertResult};
