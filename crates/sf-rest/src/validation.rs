//! Input checks run before any request is sent.
//!
//! Checks run in a fixed order: object type, external id field, id or
//! external id, then the record body. The first failure wins.
//!
//! Path values must also not be `.` or `..`, which would address a
//! different resource once the URL is normalized.

use sforce_client::security::url as url_security;

use crate::sobject::SObject;

/// A required input was missing, or unusable as a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("sobject name is required")]
    SObjectName,
    #[error("external id field is required")]
    ExternalIdField,
    #[error("sobject id is required")]
    SObjectId,
    #[error("external id is required")]
    ExternalId,
    #[error("sobject value is required")]
    SObjectValue,
    /// A path value was `.` or `..`. Holds the input's name.
    #[error("{0} must not be \".\" or \"..\"")]
    DotSegment(&'static str),
}

pub(crate) fn object_type(value: &str) -> Result<(), ValidationError> {
    segment(value, ValidationError::SObjectName, "sobject name")
}

pub(crate) fn external_id_field(value: &str) -> Result<(), ValidationError> {
    segment(value, ValidationError::ExternalIdField, "external id field")
}

pub(crate) fn id(value: &str) -> Result<(), ValidationError> {
    segment(value, ValidationError::SObjectId, "sobject id")
}

pub(crate) fn external_id(value: &str) -> Result<(), ValidationError> {
    segment(value, ValidationError::ExternalId, "external id")
}

pub(crate) fn object(value: &SObject) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::SObjectValue);
    }
    Ok(())
}

fn segment(value: &str, missing: ValidationError, name: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(missing);
    }
    if url_security::is_dot_segment(value) {
        return Err(ValidationError::DotSegment(name));
    }
    Ok(())
}
