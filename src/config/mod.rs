//! Configuration types for the commercetools API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Configuration`]: All settings the client needs (endpoints, credentials,
//!   scopes, retry policy, connection pooling)
//! - [`ConfigurationBuilder`]: A builder for constructing [`Configuration`] instances
//! - [`ClientId`], [`ClientSecret`], [`ProjectKey`], [`ServiceUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use commercetools_api::{
//!     ClientId, ClientSecret, Configuration, ProjectKey, ProjectScope, ServiceUrl,
//! };
//!
//! let config = Configuration::builder()
//!     .oauth_url(ServiceUrl::new("https://auth.europe-west1.gcp.commercetools.com/oauth/token").unwrap())
//!     .api_url(ServiceUrl::new("https://api.europe-west1.gcp.commercetools.com").unwrap())
//!     .project_key(ProjectKey::new("my-project").unwrap())
//!     .client_id(ClientId::new("client-id").unwrap())
//!     .client_secret(ClientSecret::new("client-secret").unwrap())
//!     .scopes(ProjectScope::ManageProducts.into())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.scope_string(), "manage_products:my-project");
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, ProjectKey, ServiceUrl};

use std::time::Duration;

use crate::auth::Scopes;
use crate::error::ConfigError;

/// Default number of retries after an HTTP 503 response.
pub const DEFAULT_INTERNAL_SERVER_ERROR_RETRIES: u32 = 1;

/// Default wait between 503 retries.
pub const DEFAULT_INTERNAL_SERVER_ERROR_RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Default lifetime of a pooled connection.
pub const DEFAULT_HTTP_CLIENT_POOL_ITEM_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Configuration for the commercetools API client.
///
/// # Thread Safety
///
/// `Configuration` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct Configuration {
    oauth_url: ServiceUrl,
    api_url: ServiceUrl,
    project_key: ProjectKey,
    client_id: ClientId,
    client_secret: ClientSecret,
    scopes: Scopes,
    internal_server_error_retries: u32,
    internal_server_error_retry_interval: Duration,
    http_client_pool_item_lifetime: Duration,
    user_agent_prefix: Option<String>,
}

impl Configuration {
    /// Creates a new builder for constructing a `Configuration`.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Returns the OAuth token endpoint.
    #[must_use]
    pub const fn oauth_url(&self) -> &ServiceUrl {
        &self.oauth_url
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ServiceUrl {
        &self.api_url
    }

    /// Returns the project key.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the configured scopes.
    #[must_use]
    pub const fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    /// Returns the space-separated scope string sent to the token endpoint.
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.to_scope_string(&self.project_key)
    }

    /// Returns how many times a request is retried after an HTTP 503.
    #[must_use]
    pub const fn internal_server_error_retries(&self) -> u32 {
        self.internal_server_error_retries
    }

    /// Returns the wait between 503 retries.
    #[must_use]
    pub const fn internal_server_error_retry_interval(&self) -> Duration {
        self.internal_server_error_retry_interval
    }

    /// Returns how long an idle pooled connection is kept.
    #[must_use]
    pub const fn http_client_pool_item_lifetime(&self) -> Duration {
        self.http_client_pool_item_lifetime
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify Configuration is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Configuration>();
};

/// Builder for constructing [`Configuration`] instances.
///
/// Required fields are `oauth_url`, `api_url`, `project_key`, `client_id`
/// and `client_secret`.
///
/// # Defaults
///
/// - `scopes`: `manage_project`
/// - `internal_server_error_retries`: 1
/// - `internal_server_error_retry_interval`: 100 ms
/// - `http_client_pool_item_lifetime`: 1 hour
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    oauth_url: Option<ServiceUrl>,
    api_url: Option<ServiceUrl>,
    project_key: Option<ProjectKey>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    scopes: Option<Scopes>,
    internal_server_error_retries: Option<u32>,
    internal_server_error_retry_interval: Option<Duration>,
    http_client_pool_item_lifetime: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ConfigurationBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth token endpoint (required).
    #[must_use]
    pub fn oauth_url(mut self, url: ServiceUrl) -> Self {
        self.oauth_url = Some(url);
        self
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ServiceUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the project key (required).
    #[must_use]
    pub fn project_key(mut self, key: ProjectKey) -> Self {
        self.project_key = Some(key);
        self
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the requested scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: Scopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets how many times a request is retried after an HTTP 503.
    #[must_use]
    pub const fn internal_server_error_retries(mut self, retries: u32) -> Self {
        self.internal_server_error_retries = Some(retries);
        self
    }

    /// Sets the wait between 503 retries.
    #[must_use]
    pub const fn internal_server_error_retry_interval(mut self, interval: Duration) -> Self {
        self.internal_server_error_retry_interval = Some(interval);
        self
    }

    /// Sets how long an idle pooled connection is kept.
    #[must_use]
    pub const fn http_client_pool_item_lifetime(mut self, lifetime: Duration) -> Self {
        self.http_client_pool_item_lifetime = Some(lifetime);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`Configuration`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if any required field
    /// was not set.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let oauth_url = self
            .oauth_url
            .ok_or(ConfigError::MissingRequiredField { field: "oauth_url" })?;
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;
        let project_key = self.project_key.ok_or(ConfigError::MissingRequiredField {
            field: "project_key",
        })?;
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self.client_secret.ok_or(ConfigError::MissingRequiredField {
            field: "client_secret",
        })?;

        Ok(Configuration {
            oauth_url,
            api_url,
            project_key,
            client_id,
            client_secret,
            scopes: self.scopes.unwrap_or_default(),
            internal_server_error_retries: self
                .internal_server_error_retries
                .unwrap_or(DEFAULT_INTERNAL_SERVER_ERROR_RETRIES),
            internal_server_error_retry_interval: self
                .internal_server_error_retry_interval
                .unwrap_or(DEFAULT_INTERNAL_SERVER_ERROR_RETRY_INTERVAL),
            http_client_pool_item_lifetime: self
                .http_client_pool_item_lifetime
                .unwrap_or(DEFAULT_HTTP_CLIENT_POOL_ITEM_LIFETIME),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
