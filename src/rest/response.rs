//! Response wrapper for commercetools API operations.
//!
//! This module provides [`Response<T>`], the result of every call that
//! reached the I/O stage, along with [`ErrorMessage`] and
//! [`PagedQueryResult<T>`].
//!
//! A `Response` is either successful (`result` is present, `errors` is
//! empty) or failed (`result` is `None`, `errors` carries whatever the server
//! reported). Callers must check [`Response::success`].
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_api::rest::Resource;
//! use commercetools_api::rest::resources::CustomerGroup;
//!
//! let response = CustomerGroup::get_by_id(&client, "abc").await?;
//! if response.success {
//!     let group = response.result.unwrap();
//!     println!("{} v{}", group.name, group.version);
//! } else {
//!     for error in &response.errors {
//!         println!("{}: {}", error.code, error.message);
//!     }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::HttpResponse;
use crate::decode::{payload, DecodeError};

/// Error code reported when no token could be obtained.
pub const NO_TOKEN_CODE: &str = "no_token";

/// A single error from the API error envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Machine-readable error code (e.g. `ConcurrentModification`).
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub message: String,
}

impl ErrorMessage {
    /// Creates a new error message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Reads one envelope entry. Missing or non-string fields become empty;
    /// entries that are not objects are skipped.
    fn from_entry(entry: &Value) -> Option<Self> {
        let entry = entry.as_object()?;
        let field = |name: &str| {
            entry
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Some(Self::new(field("code"), field("message")))
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: Vec<Value>,
}

/// The outcome of an API call that reached the I/O stage.
#[derive(Clone, Debug)]
pub struct Response<T> {
    /// `true` if the server answered with a 2xx status.
    pub success: bool,
    /// The HTTP status code, or `0` if no request was sent.
    pub status_code: u16,
    /// The canonical reason phrase for the status code, if known.
    pub reason_phrase: Option<String>,
    /// The `X-Correlation-ID` of the request, if the server sent one.
    pub correlation_id: Option<String>,
    /// The decoded result. Present iff `success`.
    pub result: Option<T>,
    /// Errors reported by the server. Empty when `success`.
    pub errors: Vec<ErrorMessage>,
}

impl<T> Response<T> {
    /// The failed response returned when no token could be obtained.
    ///
    /// No request was sent, so the status code is `0`.
    #[must_use]
    pub fn no_token() -> Self {
        Self {
            success: false,
            status_code: 0,
            reason_phrase: None,
            correlation_id: None,
            result: None,
            errors: vec![ErrorMessage::new(NO_TOKEN_CODE, "Could not retrieve token")],
        }
    }

    /// Returns `true` if this failure carries the given error code.
    #[must_use]
    pub fn has_error(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Maps the result, keeping every other field.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            success: self.success,
            status_code: self.status_code,
            reason_phrase: self.reason_phrase,
            correlation_id: self.correlation_id,
            result: self.result.map(f),
            errors: self.errors,
        }
    }

    /// Converts the response into a `Result`, yielding the errors on failure.
    ///
    /// # Errors
    ///
    /// Returns the server's error list when the call did not succeed.
    pub fn into_result(self) -> Result<Option<T>, Vec<ErrorMessage>> {
        if self.success {
            Ok(self.result)
        } else {
            Err(self.errors)
        }
    }
}

impl<T: DeserializeOwned> Response<T> {
    /// Maps a raw HTTP response.
    ///
    /// A 2xx body is decoded into `T`; an empty body decodes as JSON `null`.
    /// Any other status is a failed response whose errors are read from the
    /// `{"errors": [...]}` envelope, entry by entry. A body that is not an
    /// envelope at all yields an empty error list.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if a 2xx body cannot be decoded into `T`.
    pub fn from_http(http: HttpResponse) -> Result<Self, DecodeError> {
        let correlation_id = http.correlation_id().map(String::from);

        if http.is_ok() {
            let value = http.json().map_err(|source| DecodeError::InvalidPayload {
                target: std::any::type_name::<T>(),
                source,
            })?;
            let result: T = payload(std::any::type_name::<T>(), &value)?;
            return Ok(Self {
                success: true,
                status_code: http.code,
                reason_phrase: http.reason_phrase,
                correlation_id,
                result: Some(result),
                errors: Vec::new(),
            });
        }

        let errors = match serde_json::from_str::<ErrorEnvelope>(&http.body) {
            Ok(envelope) => envelope
                .errors
                .iter()
                .filter_map(ErrorMessage::from_entry)
                .collect(),
            Err(e) => {
                tracing::debug!(
                    status = http.code,
                    error = %e,
                    "Could not parse error envelope"
                );
                Vec::new()
            }
        };

        Ok(Self {
            success: false,
            status_code: http.code,
            reason_phrase: http.reason_phrase,
            correlation_id,
            result: None,
            errors,
        })
    }
}

/// A page of query results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedQueryResult<T> {
    /// The limit that was applied to the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of results in this page.
    pub count: u32,
    /// Total number of matching results, only present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Offset of this page.
    pub offset: u32,
    /// The results, in server order.
    pub results: Vec<T>,
}
