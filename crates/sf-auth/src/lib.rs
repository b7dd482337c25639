//! # sforce-auth
//!
//! Session management for the Salesforce REST API.
//!
//! - Username-password OAuth login
//! - Token and instance URL cache shared between tasks
//! - One automatic re-login and retry when the API rejects the cached token
//!
//! Credentials and tokens are redacted in `Debug` output and skipped in
//! tracing spans.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sforce_auth::{Credentials, Session, PRODUCTION_LOGIN_URL};
//! use sforce_client::RequestMethod;
//!
//! # async fn example() -> Result<(), sforce_auth::Error> {
//! let credentials = Credentials::from_env()?;
//! let session = Session::new(PRODUCTION_LOGIN_URL, "62.0", credentials)?;
//!
//! let response = session
//!     .send(RequestMethod::Get, "sobjects/Account/001xx000003DGb2AAG", None)
//!     .await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod oauth;
mod session;

pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{handle_token_response, password_token_request, TokenResponse, TOKEN_PATH};
pub use session::Session;

/// Production login URL.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Sandbox login URL.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";
