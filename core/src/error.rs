//! Error types for the parcel API client.
//!
//! # Design
//! `ValidationError` is its own type rather than an `ApiError` variant
//! because it is raised by entity setters long before a request exists.
//! Callers fixing their input only ever see `ValidationError`; callers
//! interpreting a server response only ever see `ApiError`. `NotFound`
//! gets a dedicated variant because callers frequently distinguish "no
//! such resource" from "the server returned an unexpected status."

use std::fmt;

/// A field-level validation failure raised by an entity setter.
///
/// The entity field is left unchanged when a setter returns this error;
/// assignment only happens after the bound check passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the entity field that rejected the value.
    pub field: &'static str,
    /// Human-readable description of why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for '{}': {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Errors returned by `ParcelClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested resource does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request URL could not be assembled from the base URL.
    UrlError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::UrlError(msg) => {
                write!(f, "invalid request URL: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_names_the_field() {
        let err = ValidationError::new("postal_code", "must be 1 to 10 characters, got 0");
        assert_eq!(
            err.to_string(),
            "invalid value for 'postal_code': must be 1 to 10 characters, got 0"
        );
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }
}
