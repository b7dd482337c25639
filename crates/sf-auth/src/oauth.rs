//! OAuth 2.0 username-password flow.
//!
//! The token request is a form POST to `{login_url}/services/oauth2/token`
//! carrying the connected-app client id and secret and the user's username
//! and password. A successful response yields the access token and the
//! instance URL all further requests go to.

use serde::{Deserialize, Serialize};
use sforce_client::{RequestBuilder, RequestMethod, Response};

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};

/// Path of the token endpoint, relative to the login URL.
pub const TOKEN_PATH: &str = "/services/oauth2/token";

/// Build the password-grant token request.
pub fn password_token_request(login_url: &str, credentials: &Credentials) -> Result<RequestBuilder> {
    let form = [
        ("grant_type", "password"),
        ("client_id", credentials.client_id()),
        ("client_secret", credentials.client_secret()),
        ("username", credentials.username()),
        ("password", credentials.password()),
    ];

    let url = format!("{}{}", login_url.trim_end_matches('/'), TOKEN_PATH);
    Ok(RequestBuilder::new(RequestMethod::Post, url).form(&form)?)
}

/// Interpret the token endpoint's response.
pub fn handle_token_response(response: Response) -> Result<TokenResponse> {
    if !response.is_success() {
        return Err(login_error(response));
    }

    let token: TokenResponse = response.json()?;

    if token.access_token.is_empty() {
        return Err(Error::new(ErrorKind::InvalidLoginResponse(
            "missing access_token".to_string(),
        )));
    }
    if token.instance_url.is_empty() {
        return Err(Error::new(ErrorKind::InvalidLoginResponse(
            "missing instance_url".to_string(),
        )));
    }

    Ok(token)
}

/// A failed login body is tried as an OAuth error first, then as an API
/// error list or object, then kept as text.
fn login_error(response: Response) -> Error {
    match response.json::<OAuthErrorResponse>() {
        Ok(err) => Error::new(ErrorKind::OAuth {
            error: err.error,
            description: err.error_description,
        }),
        Err(_) => response.into_error().into(),
    }
}

/// Token response from OAuth.
///
/// `access_token` and `signature` are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    #[serde(default)]
    pub access_token: String,
    /// Instance URL.
    #[serde(default)]
    pub instance_url: String,
    /// User ID URL.
    #[serde(default)]
    pub id: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Signature for verification.
    #[serde(default)]
    pub signature: Option<String>,
    /// Issued at timestamp.
    #[serde(default)]
    pub issued_at: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("instance_url", &self.instance_url)
            .field("id", &self.id)
            .field("token_type", &self.token_type)
            .field("signature", &self.signature.as_ref().map(|_| "[REDACTED]"))
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}
