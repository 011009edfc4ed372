//! HTTP-specific error types for the commercetools API client.
//!
//! Only failures that cannot be expressed as a [`Response`](crate::rest::Response)
//! surface here. A missing token or a non-2xx status is a soft failure and
//! comes back as `Ok(Response { success: false, .. })`.
//!
//! # Error Handling
//!
//! - [`InvalidRequestError`]: A request failed validation before anything was sent
//! - [`HttpError`]: Unified error type encompassing all hard failures
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_api::clients::HttpError;
//!
//! match client.get::<serde_json::Value>("/customer-groups/abc", &[]).await {
//!     Ok(response) if response.success => println!("{:?}", response.result),
//!     Ok(response) => println!("API errors: {:?}", response.errors),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Decode(e)) => println!("Unexpected payload: {e}"),
//!     Err(HttpError::Encode(e)) => println!("Could not serialize payload: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::decode::DecodeError;

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A body was provided without a content type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A resource identifier (id, key or container) was empty.
    #[error("The {resource} identifier cannot be empty.")]
    MissingId {
        /// What kind of identifier was missing.
        resource: &'static str,
    },

    /// The resource version was below 1.
    #[error("Invalid resource version {version}. Versions start at 1.")]
    InvalidVersion {
        /// The invalid version that was provided.
        version: i64,
    },

    /// An update was requested without any actions.
    #[error("At least one update action is required.")]
    NoActions,

    /// An update action was given an empty name.
    #[error("Update action name cannot be empty.")]
    EmptyActionName,
}

/// Unified error type for all hard client failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response body could not be decoded into the target type.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A request payload could not be serialized.
    #[error("Failed to serialize request payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");

        let error = InvalidRequestError::InvalidVersion { version: 0 };
        assert_eq!(
            error.to_string(),
            "Invalid resource version 0. Versions start at 1."
        );

        let error = InvalidRequestError::MissingId { resource: "id" };
        assert_eq!(error.to_string(), "The id identifier cannot be empty.");
    }

    #[test]
    fn test_http_error_from_invalid_request_is_transparent() {
        let error: HttpError = InvalidRequestError::NoActions.into();
        assert!(matches!(
            error,
            HttpError::InvalidRequest(InvalidRequestError::NoActions)
        ));
        assert_eq!(error.to_string(), "At least one update action is required.");
    }

    #[test]
    fn test_http_error_from_decode_error() {
        let error: HttpError = DecodeError::UnknownDiscriminator {
            family: "tier",
            value: "CartWeight".to_string(),
        }
        .into();
        assert!(matches!(error, HttpError::Decode(_)));
        assert!(error.to_string().contains("CartWeight"));
    }

    #[test]
    fn test_all_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &InvalidRequestError::EmptyActionName;
        let _ = error;

        let error: &dyn std::error::Error = &HttpError::InvalidRequest(
            InvalidRequestError::MissingBodyType,
        );
        let _ = error;
    }
}
