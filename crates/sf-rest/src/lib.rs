//! # sforce-rest
//!
//! Salesforce REST API client for single-record SObject operations.
//!
//! | Operation | Request |
//! |---|---|
//! | [`create_sobject`](SalesforceRestClient::create_sobject) | `POST sobjects/{type}` |
//! | [`get_sobject`](SalesforceRestClient::get_sobject) | `GET sobjects/{type}/{id}` |
//! | [`get_sobject_by_external_id`](SalesforceRestClient::get_sobject_by_external_id) | `GET sobjects/{type}/{field}/{value}` |
//! | [`upsert_sobject`](SalesforceRestClient::upsert_sobject) | `PATCH sobjects/{type}/{id}` |
//! | [`upsert_sobject_by_external_id`](SalesforceRestClient::upsert_sobject_by_external_id) | `PATCH sobjects/{type}/{field}/{value}` |
//! | [`delete_sobject`](SalesforceRestClient::delete_sobject) | `DELETE sobjects/{type}/{id}` |
//!
//! Missing inputs are rejected with a [`ValidationError`] before anything is
//! sent. Authentication, including the one re-login when a session expires,
//! is handled by [`sforce_auth::Session`].

mod client;
mod error;
mod sobject;
mod validation;

pub use client::SalesforceRestClient;
pub use error::{Error, ErrorKind, Result};
pub use sobject::{parse_sobject, SObject, UpsertResult};
pub use validation::ValidationError;
