//! Authenticated request executor for the commercetools API.
//!
//! This module provides the [`Client`] type, which ties together the
//! configuration, the HTTP transport and the token cache.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::TokenManager;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::config::Configuration;
use crate::rest::Response;

/// Client for the commercetools HTTP API.
///
/// Every call goes through the same steps:
///
/// 1. Ensure a valid token, fetching one if needed. If none can be obtained
///    the call returns a failed [`Response`] with a `no_token` error and no
///    request is sent.
/// 2. Send the request with `Authorization: <tokenType> <accessToken>`,
///    retrying on HTTP 503 as configured.
/// 3. Map the outcome into a [`Response<T>`].
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`. Share one instance across tasks so they reuse
/// the pooled connections and the cached token.
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_api::{Client, Configuration};
/// use serde_json::Value;
///
/// let client = Client::new(config)?;
///
/// let response = client
///     .get::<Value>("/customer-groups", &[("limit".into(), "5".into())])
///     .await?;
///
/// if response.success {
///     println!("{:?}", response.result);
/// }
/// ```
#[derive(Debug)]
pub struct Client {
    config: Configuration,
    http_client: HttpClient,
    token_manager: TokenManager,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP transport cannot be created.
    pub fn new(config: Configuration) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            config,
            http_client,
            token_manager: TokenManager::new(),
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Returns the token cache of this client.
    #[must_use]
    pub const fn token_manager(&self) -> &TokenManager {
        &self.token_manager
    }

    /// Returns the underlying HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Builds the absolute URL for an endpoint: `<apiUrl>/<projectKey><endpoint>`.
    ///
    /// A leading `/` is added to the endpoint when missing.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.starts_with('/') { "" } else { "/" };
        format!(
            "{}/{}{separator}{endpoint}",
            self.config.api_url(),
            self.config.project_key()
        )
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures or an undecodable 2xx body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Response<T>, HttpError> {
        let builder = HttpRequest::builder(HttpMethod::Get, self.url(endpoint)).query(query.to_vec());
        self.send(builder).await
    }

    /// Sends a POST request with a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the payload cannot be serialized, for network
    /// failures, or an undecodable 2xx body.
    pub async fn post<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &P,
        query: &[(String, String)],
    ) -> Result<Response<T>, HttpError> {
        let body = serde_json::to_value(payload)?;
        let builder = HttpRequest::builder(HttpMethod::Post, self.url(endpoint))
            .json(&body)
            .query(query.to_vec());
        self.send(builder).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network failures or an undecodable 2xx body.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Response<T>, HttpError> {
        let builder =
            HttpRequest::builder(HttpMethod::Delete, self.url(endpoint)).query(query.to_vec());
        self.send(builder).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: HttpRequestBuilder,
    ) -> Result<Response<T>, HttpError> {
        let Some(token) = self
            .token_manager
            .ensure_token(&self.http_client, &self.config)
            .await
        else {
            return Ok(Response::no_token());
        };

        let request = builder
            .header("Authorization", token.authorization_header())
            .build()?;
        let http_response = self.http_client.execute(request).await?;

        Ok(Response::from_http(http_response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret, ProjectKey, ServiceUrl};

    fn client() -> Client {
        let config = Configuration::builder()
            .oauth_url(ServiceUrl::new("https://auth.example.com/oauth/token").unwrap())
            .api_url(ServiceUrl::new("https://api.example.com/").unwrap())
            .project_key(ProjectKey::new("foo").unwrap())
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();
        Client::new(config).unwrap()
    }

    #[test]
    fn test_url_with_leading_slash() {
        assert_eq!(
            client().url("/customer-groups"),
            "https://api.example.com/foo/customer-groups"
        );
    }

    #[test]
    fn test_url_without_leading_slash() {
        assert_eq!(
            client().url("customer-groups/abc"),
            "https://api.example.com/foo/customer-groups/abc"
        );
    }

    #[test]
    fn test_new_client_has_no_cached_token() {
        assert!(client().token_manager().current().is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
