//! HTTP response types for the commercetools API client.
//!
//! This module provides the [`HttpResponse`] type, the raw transport-level
//! result that [`Response`](crate::rest::Response) is mapped from.

use std::collections::HashMap;

/// Header carrying the server-side correlation id of a request.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// An HTTP response from the commercetools API or token endpoint.
///
/// Header names are stored lowercase; a header may carry multiple values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason phrase for the status code, if known.
    pub reason_phrase: Option<String>,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        reason_phrase: Option<String>,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code,
            reason_phrase,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the server is shedding load (HTTP 503).
    #[must_use]
    pub const fn is_service_unavailable(&self) -> bool {
        self.code == 503
    }

    /// Returns the first value of the given (lowercase) header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Correlation-ID` header value, if present.
    ///
    /// Include this id when reporting a problem with a request.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.header(CORRELATION_ID_HEADER)
    }

    /// Parses the body as JSON. An empty body yields `null`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&self.body)
    }
}
