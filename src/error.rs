//! Error types for the commercetools API client.
//!
//! This module contains the errors raised while building a
//! [`Configuration`](crate::Configuration) or one of its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Nothing here ever touches the network.
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the API client's ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the API client's secret.")]
    EmptyClientSecret,

    /// Project key is invalid.
    #[error("Invalid project key '{key}'. Expected lowercase letters, digits, '-' or '_'.")]
    InvalidProjectKey {
        /// The invalid key that was provided.
        key: String,
    },

    /// A service URL (OAuth or API) is invalid.
    #[error("Invalid service URL '{url}'. Please provide an absolute http(s) URL.")]
    InvalidServiceUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A scope could not be parsed.
    #[error("Invalid scope: {reason}")]
    InvalidScope {
        /// The reason the scope is invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
