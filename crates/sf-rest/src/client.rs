//! Salesforce REST API client.
//!
//! Each operation validates its inputs, builds the path under
//! `/services/data/{version}/sobjects`, sends it through the shared
//! [`Session`] and decodes the 2xx body.

use std::sync::Arc;

use tracing::instrument;

use sforce_auth::{Credentials, Session};
use sforce_client::security::url as url_security;
use sforce_client::{HttpTransport, RequestMethod, Response, SfHttpClient};

use crate::error::Result;
use crate::sobject::{SObject, UpsertResult};
use crate::validation;

/// Salesforce REST API client for single-record SObject operations.
///
/// Cloning is cheap; clones share one session and token cache.
///
/// # Example
///
/// ```rust,no_run
/// use sforce_auth::{Credentials, PRODUCTION_LOGIN_URL};
/// use sforce_rest::{parse_sobject, SalesforceRestClient};
///
/// # async fn example() -> Result<(), sforce_rest::Error> {
/// let client = SalesforceRestClient::connect(
///     PRODUCTION_LOGIN_URL,
///     "62.0",
///     Credentials::from_env()?,
/// )?;
///
/// let record = parse_sobject(br#"{"Name": "Acme"}"#)?;
/// let created = client.create_sobject("Account", &record).await?;
/// let fetched = client.get_sobject("Account", &created.id).await?;
/// client.delete_sobject("Account", &created.id).await?;
/// # Ok(())
/// # }
/// ```
pub struct SalesforceRestClient<T = SfHttpClient> {
    session: Arc<Session<T>>,
}

impl<T> Clone for SalesforceRestClient<T> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}

impl<T> std::fmt::Debug for SalesforceRestClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceRestClient")
            .field("session", &self.session)
            .finish()
    }
}

impl SalesforceRestClient<SfHttpClient> {
    /// Create a client with a new session using the default HTTP client.
    ///
    /// The first operation logs in.
    pub fn connect(
        login_url: impl Into<String>,
        api_version: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let session = Session::new(login_url, api_version, credentials)?;
        Ok(Self::new(session))
    }
}

impl<T: HttpTransport> SalesforceRestClient<T> {
    pub fn new(session: Session<T>) -> Self {
        Self::from_shared(Arc::new(session))
    }

    /// Create a client over a session shared with other callers.
    pub fn from_shared(session: Arc<Session<T>>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Arc<Session<T>> {
        &self.session
    }

    /// Create a record. `POST sobjects/{type}`.
    #[instrument(skip(self, object))]
    pub async fn create_sobject(&self, object_type: &str, object: &SObject) -> Result<UpsertResult> {
        validation::object_type(object_type)?;
        validation::object(object)?;

        let path = url_security::join_segments(&["sobjects", object_type]);
        let response = self.send(RequestMethod::Post, &path, Some(object)).await?;
        Ok(response.json()?)
    }

    /// Fetch a record by id. `GET sobjects/{type}/{id}`.
    #[instrument(skip(self))]
    pub async fn get_sobject(&self, object_type: &str, id: &str) -> Result<SObject> {
        validation::object_type(object_type)?;
        validation::id(id)?;

        let path = url_security::join_segments(&["sobjects", object_type, id]);
        let response = self.send(RequestMethod::Get, &path, None).await?;
        Ok(response.json()?)
    }

    /// Fetch a record by external id.
    /// `GET sobjects/{type}/{external_id_field}/{external_id}`.
    #[instrument(skip(self))]
    pub async fn get_sobject_by_external_id(
        &self,
        object_type: &str,
        external_id_field: &str,
        external_id: &str,
    ) -> Result<SObject> {
        validation::object_type(object_type)?;
        validation::external_id_field(external_id_field)?;
        validation::external_id(external_id)?;

        let path =
            url_security::join_segments(&["sobjects", object_type, external_id_field, external_id]);
        let response = self.send(RequestMethod::Get, &path, None).await?;
        Ok(response.json()?)
    }

    /// Update a record by id. `PATCH sobjects/{type}/{id}`.
    ///
    /// The result always carries the given id.
    #[instrument(skip(self, object))]
    pub async fn upsert_sobject(
        &self,
        object_type: &str,
        id: &str,
        object: &SObject,
    ) -> Result<UpsertResult> {
        validation::object_type(object_type)?;
        validation::id(id)?;
        validation::object(object)?;

        let path = url_security::join_segments(&["sobjects", object_type, id]);
        let response = self.send(RequestMethod::Patch, &path, Some(object)).await?;

        let mut result = decode_upsert(&response, id)?;
        result.id = id.to_string();
        Ok(result)
    }

    /// Insert or update a record by external id.
    /// `PATCH sobjects/{type}/{external_id_field}/{external_id}`.
    ///
    /// An insert answers with the new record's id. An update answers without
    /// a body, in which case the result carries the external id.
    #[instrument(skip(self, object))]
    pub async fn upsert_sobject_by_external_id(
        &self,
        object_type: &str,
        external_id_field: &str,
        external_id: &str,
        object: &SObject,
    ) -> Result<UpsertResult> {
        validation::object_type(object_type)?;
        validation::external_id_field(external_id_field)?;
        validation::external_id(external_id)?;
        validation::object(object)?;

        let path =
            url_security::join_segments(&["sobjects", object_type, external_id_field, external_id]);
        let response = self.send(RequestMethod::Patch, &path, Some(object)).await?;
        decode_upsert(&response, external_id)
    }

    /// Delete a record by id. `DELETE sobjects/{type}/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_sobject(&self, object_type: &str, id: &str) -> Result<()> {
        validation::object_type(object_type)?;
        validation::id(id)?;

        let path = url_security::join_segments(&["sobjects", object_type, id]);
        self.send(RequestMethod::Delete, &path, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: RequestMethod,
        path: &str,
        object: Option<&SObject>,
    ) -> Result<Response> {
        let body = object.map(|o| serde_json::Value::Object(o.clone()));
        Ok(self.session.send(method, path, body.as_ref()).await?)
    }
}

fn decode_upsert(response: &Response, id: &str) -> Result<UpsertResult> {
    if response.is_empty_body() {
        return Ok(UpsertResult::updated(id));
    }
    Ok(response.json()?)
}
