//! HTTP transport for commercetools API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the pooled
//! connection, applies the default headers, and retries requests answered
//! with HTTP 503.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::Configuration;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport shared by the token endpoint and the resource API.
///
/// The client handles:
/// - Default headers including User-Agent and `Accept: application/json`
/// - Connection pooling, with idle connections dropped after the configured lifetime
/// - Retries on HTTP 503 only, with a fixed wait between attempts
///
/// Every other status code, including other 5xx codes, is returned on the
/// first attempt. When retries are exhausted the last 503 response is
/// returned as-is.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.example.com/foo/customer-groups")
///     .build()?;
///
/// let response = client.execute(request).await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// How many times a 503 is retried.
    retries: u32,
    /// Wait between 503 retries.
    retry_interval: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &Configuration) -> Result<Self, HttpError> {
        let mut default_headers = HashMap::new();
        default_headers.insert(
            "User-Agent".to_string(),
            Self::user_agent(config.user_agent_prefix()),
        );
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_idle_timeout(config.http_client_pool_item_lifetime())
            .build()?;

        Ok(Self {
            client,
            default_headers,
            retries: config.internal_server_error_retries(),
            retry_interval: config.internal_server_error_retry_interval(),
        })
    }

    /// Builds the User-Agent string identifying the SDK and Rust version.
    fn user_agent(prefix: Option<&str>) -> String {
        let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        format!("{prefix}commercetools-rust-sdk/{SDK_VERSION} Rust/{rust_version}")
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns how many times a 503 response is retried.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Sends a request, retrying while the server answers with HTTP 503.
    ///
    /// At most `retries + 1` attempts are made. The retry interval is only
    /// awaited between attempts, never after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    ///
    /// Non-2xx responses are not errors at this layer.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let attempts = self.retries.saturating_add(1);
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Delete => self.client.delete(&request.url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.clone());
            }

            tracing::debug!(
                method = %request.http_method,
                url = %request.url,
                attempt,
                "Sending request"
            );

            let res = req_builder.send().await?;

            let status = res.status();
            let code = status.as_u16();
            let reason_phrase = status.canonical_reason().map(String::from);
            let res_headers = Self::parse_response_headers(res.headers());
            let body = res.text().await?;

            let response = HttpResponse::new(code, reason_phrase, res_headers, body);

            if !response.is_service_unavailable() || attempt >= attempts {
                return Ok(response);
            }

            tracing::warn!(
                url = %request.url,
                attempt,
                max_attempts = attempts,
                "Service unavailable (503), retrying in {:?}",
                self.retry_interval
            );
            tokio::time::sleep(self.retry_interval).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
