//! HTTP client types for commercetools API communication.
//!
//! This module provides the transport layer and the authenticated executor
//! every resource call goes through.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The authenticated executor (token, auth header, response mapping)
//! - [`HttpClient`]: The pooled transport with 503 retry
//! - [`HttpRequest`]: A request to be sent
//! - [`HttpResponse`]: A raw response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`], [`InvalidRequestError`]: Hard failures
//!
//! # Retry Behavior
//!
//! Only **HTTP 503** is retried. The client waits the configured interval
//! between attempts and makes at most `internal_server_error_retries + 1`
//! attempts. Every other status, including other 5xx codes, is returned
//! immediately.

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use client::Client;
pub use errors::{HttpError, InvalidRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, CORRELATION_ID_HEADER};
