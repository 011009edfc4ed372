//! Resource trait for CRUD operations.
//!
//! This module defines the [`Resource`] trait, which gives every API
//! resource the same read, query, create and delete operations, and
//! [`UpdatableResource`], which adds key lookups and update actions.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Define its draft type
//! 3. Implement `Resource` with the endpoint; the operations come for free
//! 4. Implement `UpdatableResource` if the endpoint accepts update actions
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_api::rest::{Resource, UpdatableResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Zone {
//!     pub id: String,
//!     pub version: i64,
//!     pub name: String,
//! }
//!
//! #[derive(Debug, Serialize)]
//! pub struct ZoneDraft {
//!     pub name: String,
//! }
//!
//! impl Resource for Zone {
//!     type Draft = ZoneDraft;
//!
//!     const NAME: &'static str = "Zone";
//!     const ENDPOINT: &'static str = "/zones";
//! }
//!
//! impl UpdatableResource for Zone {}
//!
//! // Usage:
//! let zone = Zone::get_by_id(&client, "abc").await?;
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{Client, HttpError, InvalidRequestError};
use crate::rest::actions::UpdateRequest;
use crate::rest::{PagedQueryResult, QueryParams, Response};

/// An API resource that can be read, queried, created and deleted.
///
/// Every operation validates its inputs before any I/O: an empty id or a
/// version below 1 fails with [`HttpError::InvalidRequest`] and nothing is
/// sent.
///
/// # Associated Constants
///
/// - `NAME`: The resource name used in logs (e.g. "CustomerGroup")
/// - `ENDPOINT`: The endpoint below the project (e.g. "/customer-groups")
#[allow(async_fn_in_trait)]
pub trait Resource: DeserializeOwned + Send + Sync + Sized {
    /// The payload used to create the resource.
    type Draft: Serialize + Send + Sync;

    /// The resource name.
    const NAME: &'static str;

    /// The endpoint of the resource, relative to the project.
    const ENDPOINT: &'static str;

    /// Fetches a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `id` is empty, or any
    /// transport error.
    async fn get_by_id(client: &Client, id: &str) -> Result<Response<Self>, HttpError> {
        let id = require("id", id)?;
        client.get(&id_path(Self::ENDPOINT, id), &[]).await
    }

    /// Queries resources.
    ///
    /// # Errors
    ///
    /// Returns any transport error.
    async fn query(
        client: &Client,
        params: &QueryParams,
    ) -> Result<Response<PagedQueryResult<Self>>, HttpError> {
        client.get(Self::ENDPOINT, &params.to_pairs()).await
    }

    /// Creates a resource from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if the draft cannot be serialized, or
    /// any transport error.
    async fn create(client: &Client, draft: &Self::Draft) -> Result<Response<Self>, HttpError> {
        client.post(Self::ENDPOINT, draft, &[]).await
    }

    /// Deletes the resource with the given id, expected to be at `version`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `id` is empty or the version
    /// is below 1, or any transport error.
    async fn delete(client: &Client, id: &str, version: i64) -> Result<Response<Self>, HttpError> {
        let id = require("id", id)?;
        require_version(version)?;
        client
            .delete(&id_path(Self::ENDPOINT, id), &version_query(version))
            .await
    }
}

/// A resource addressable by key and modified through update actions.
///
/// The update operations encode their [`UpdateRequest`] before anything is
/// sent, so a version below 1 or an empty action list never reaches the
/// network.
#[allow(async_fn_in_trait)]
pub trait UpdatableResource: Resource {
    /// Fetches a resource by key.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `key` is empty, or any
    /// transport error.
    async fn get_by_key(client: &Client, key: &str) -> Result<Response<Self>, HttpError> {
        let key = require("key", key)?;
        client.get(&key_path(Self::ENDPOINT, key), &[]).await
    }

    /// Applies update actions to the resource with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `id` is empty, the version is
    /// below 1 or there are no actions, or any transport error.
    async fn update(
        client: &Client,
        id: &str,
        request: &UpdateRequest,
    ) -> Result<Response<Self>, HttpError> {
        let id = require("id", id)?;
        let payload = request.to_json()?;
        tracing::debug!(
            resource = Self::NAME,
            id,
            version = request.version(),
            actions = request.len(),
            "Updating resource"
        );
        client.post(&id_path(Self::ENDPOINT, id), &payload, &[]).await
    }

    /// Applies update actions to the resource with the given key.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    async fn update_by_key(
        client: &Client,
        key: &str,
        request: &UpdateRequest,
    ) -> Result<Response<Self>, HttpError> {
        let key = require("key", key)?;
        let payload = request.to_json()?;
        client.post(&key_path(Self::ENDPOINT, key), &payload, &[]).await
    }

    /// Deletes the resource with the given key, expected to be at `version`.
    ///
    /// # Errors
    ///
    /// Same as [`Resource::delete`].
    async fn delete_by_key(
        client: &Client,
        key: &str,
        version: i64,
    ) -> Result<Response<Self>, HttpError> {
        let key = require("key", key)?;
        require_version(version)?;
        client
            .delete(&key_path(Self::ENDPOINT, key), &version_query(version))
            .await
    }
}

/// Rejects an empty or blank identifier.
pub(crate) fn require<'a>(
    resource: &'static str,
    value: &'a str,
) -> Result<&'a str, InvalidRequestError> {
    if value.trim().is_empty() {
        return Err(InvalidRequestError::MissingId { resource });
    }
    Ok(value)
}

/// Rejects a version below 1.
pub(crate) const fn require_version(version: i64) -> Result<(), InvalidRequestError> {
    if version < 1 {
        return Err(InvalidRequestError::InvalidVersion { version });
    }
    Ok(())
}

pub(crate) fn version_query(version: i64) -> Vec<(String, String)> {
    vec![("version".to_string(), version.to_string())]
}

pub(crate) fn id_path(endpoint: &str, id: &str) -> String {
    format!("{endpoint}/{}", urlencoding::encode(id))
}

fn key_path(endpoint: &str, key: &str) -> String {
    format!("{endpoint}/key={}", urlencoding::encode(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank_identifiers() {
        assert_eq!(require("id", "abc"), Ok("abc"));
        assert_eq!(
            require("id", ""),
            Err(InvalidRequestError::MissingId { resource: "id" })
        );
        assert_eq!(
            require("key", "  "),
            Err(InvalidRequestError::MissingId { resource: "key" })
        );
    }

    #[test]
    fn test_require_version() {
        assert!(require_version(1).is_ok());
        assert_eq!(
            require_version(0),
            Err(InvalidRequestError::InvalidVersion { version: 0 })
        );
        assert!(require_version(-3).is_err());
    }

    #[test]
    fn test_paths_are_encoded() {
        assert_eq!(id_path("/customer-groups", "abc"), "/customer-groups/abc");
        assert_eq!(
            key_path("/customer-groups", "vip customers"),
            "/customer-groups/key=vip%20customers"
        );
    }

    #[test]
    fn test_version_query() {
        assert_eq!(
            version_query(3),
            vec![("version".to_string(), "3".to_string())]
        );
    }
}
