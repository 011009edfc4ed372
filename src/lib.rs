//! # commercetools API Rust SDK
//!
//! A typed client for the commercetools HTTP API, providing validated
//! configuration, client credentials authentication with token caching, and
//! an HTTP executor with retry on service unavailability.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Configuration`] and [`ConfigurationBuilder`]
//! - Validated newtypes for credentials, the project key and service URLs
//! - OAuth client credentials flow with a cached, self-renewing [`Token`]
//! - An async [`Client`] that retries HTTP 503 and maps every outcome to a
//!   [`rest::Response`]
//! - Polymorphic decoding for money values and shipping rate tiers via
//!   [`decode`]
//! - Update actions encoded into the API's `{version, actions}` payload
//!
//! ## Quick Start
//!
//! ```rust
//! use commercetools_api::{
//!     ClientId, ClientSecret, Configuration, ProjectKey, ProjectScope, Scopes, ServiceUrl,
//! };
//!
//! let config = Configuration::builder()
//!     .oauth_url(ServiceUrl::new("https://auth.europe-west1.gcp.commercetools.com").unwrap())
//!     .api_url(ServiceUrl::new("https://api.europe-west1.gcp.commercetools.com").unwrap())
//!     .project_key(ProjectKey::new("my-project").unwrap())
//!     .client_id(ClientId::new("client-id").unwrap())
//!     .client_secret(ClientSecret::new("client-secret").unwrap())
//!     .scopes(Scopes::from(ProjectScope::ManageCustomers))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.scope_string(), "manage_customers:my-project");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use commercetools_api::Client;
//! use commercetools_api::rest::{QueryParams, Resource};
//! use commercetools_api::rest::resources::CustomerGroup;
//!
//! let client = Client::new(config)?;
//!
//! let response = CustomerGroup::query(&client, &QueryParams::new().limit(10)).await?;
//! if response.success {
//!     for group in response.result.unwrap().results {
//!         println!("{}", group.name);
//!     }
//! }
//! ```
//!
//! ## Error Model
//!
//! API-level failures are not Rust errors. A non-2xx status, or a missing
//! token, yields a [`rest::Response`] with `success == false` and the
//! API's error messages. [`HttpError`] is reserved for invalid requests
//! detected before sending, transport failures and undecodable bodies.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and request inputs validate before any I/O
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod decode;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{ProjectScope, Scopes, Token, TokenManager, TokenResponse};
pub use config::{
    ClientId, ClientSecret, Configuration, ConfigurationBuilder, ProjectKey, ServiceUrl,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Client, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidRequestError,
};
